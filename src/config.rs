use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".love-lyrics-atlas";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "atlas.sqlite";
/// Subdirectory of the data directory that receives log files.
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Parser)]
#[command(name = "love-lyrics-atlas")]
#[command(about = "Browse an anthology of love lyrics by mood, era, language and length")]
pub struct Args {
    /// Load the catalog from a JSON file instead of the lyric store
    #[arg(long, env = "LYRICS_ATLAS_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory holding the lyric store and logs
    #[arg(long, env = "LYRICS_ATLAS_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Wipe the lyric store and reseed it with the bundled anthology
    #[arg(long)]
    pub reseed: bool,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub catalog_file: Option<PathBuf>,
    pub reseed: bool,
}

impl Config {
    /// Fill in defaults for anything the command line left out.
    pub fn from_args(args: Args) -> Result<Self> {
        let data_dir = match args.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self {
            data_dir,
            catalog_file: args.catalog,
            reseed: args.reseed,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

/// Resolve the data directory inside the user's home.
fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
