use thiserror::Error;

/// Contract violations found while loading a catalog. The browser itself never
/// fails at runtime; these only surface while a data source is being read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate lyric id `{0}`")]
    DuplicateId(String),

    #[error("lyric `{id}` is missing a value for `{field}`")]
    MissingField { id: String, field: &'static str },

    #[error("lyric `{id}` lists the mood `{mood}` more than once")]
    DuplicateMood { id: String, mood: String },
}
