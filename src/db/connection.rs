use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Ensure the database file exists, run lazy migrations, and return a live
/// connection. Foreign keys are switched on so deleting a lyric cascades to its
/// lines and moods.
pub fn ensure_schema(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(db_path).context("failed to open SQLite database")?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Create the lyric tables if they are missing. Split out from
/// [`ensure_schema`] so in-memory connections get the exact same schema.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS lyrics (
            id TEXT PRIMARY KEY,
            position INTEGER NOT NULL UNIQUE,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            excerpt TEXT NOT NULL,
            era TEXT NOT NULL,
            language TEXT NOT NULL,
            length TEXT NOT NULL,
            year INTEGER NOT NULL,
            gradient_from TEXT NOT NULL,
            gradient_to TEXT NOT NULL,
            spotify_url TEXT
        )",
        [],
    )
    .context("failed to create lyrics table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS lyric_lines (
            lyric_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            line TEXT NOT NULL,
            PRIMARY KEY (lyric_id, position),
            FOREIGN KEY(lyric_id) REFERENCES lyrics(id) ON DELETE CASCADE
        )",
        [],
    )
    .context("failed to create lyric_lines table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS lyric_moods (
            lyric_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            mood TEXT NOT NULL,
            PRIMARY KEY (lyric_id, mood),
            FOREIGN KEY(lyric_id) REFERENCES lyrics(id) ON DELETE CASCADE
        )",
        [],
    )
    .context("failed to create lyric_moods table")?;

    Ok(())
}
