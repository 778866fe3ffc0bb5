//! Core library surface for the Love Lyrics Atlas TUI.
//!
//! The catalog and explorer modules hold the browsing logic and know nothing
//! about terminals; `ui` renders them, while `db`, `source` and `config` bring
//! the anthology in from disk.
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod models;
pub mod seed;
pub mod source;
pub mod ui;

/// The browsing core.
pub use catalog::{facet_values, trending, Catalog, FacetVocabulary, TRENDING_SIZE};
pub use explorer::{compute_filtered_view, Explorer, FilteredView};

/// Domain types the other layers pass around.
pub use error::CatalogError;
pub use models::{Facet, FilterState, Gradient, LyricRecord};

/// Startup plumbing used by `main.rs`.
pub use config::{Args, Config};
pub use logging::init_logging;
pub use source::load_catalog;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
