//! Persistence module split across logical submodules.

mod connection;
mod lyrics;

pub use connection::{create_tables, ensure_schema};
pub use lyrics::{
    clear_lyrics, count_lyrics, fetch_lyrics, insert_lyrics, load_or_seed_lyrics,
};
