//! Where the anthology comes from. A JSON file named on the command line wins;
//! otherwise the SQLite store under the data directory is used, seeded with the
//! bundled anthology on first run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::{ensure_schema, load_or_seed_lyrics};
use crate::models::LyricRecord;

/// Parse a JSON array of lyric records (camelCase keys, `spotifyUrl`
/// optional).
pub fn parse_catalog_json(text: &str) -> Result<Vec<LyricRecord>> {
    serde_json::from_str(text).context("catalog file is not a valid list of lyrics")
}

/// Read and parse a JSON catalog file.
pub fn read_catalog_file(path: &Path) -> Result<Vec<LyricRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    parse_catalog_json(&text)
}

/// Resolve the configured source and build the validated catalog.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let records = match &config.catalog_file {
        Some(path) => {
            info!(path = %path.display(), "loading catalog from JSON file");
            read_catalog_file(path)?
        }
        None => {
            let db_path = config.db_path();
            info!(path = %db_path.display(), "loading catalog from lyric store");
            let mut conn = ensure_schema(&db_path)?;
            load_or_seed_lyrics(&mut conn, config.reseed)?
        }
    };

    let catalog = Catalog::new(records).context("catalog failed validation")?;
    let vocabulary = catalog.vocabulary();
    info!(
        records = catalog.len(),
        moods = vocabulary.moods.len(),
        eras = vocabulary.eras.len(),
        languages = vocabulary.languages.len(),
        lengths = vocabulary.lengths.len(),
        "catalog ready"
    );
    Ok(catalog)
}
