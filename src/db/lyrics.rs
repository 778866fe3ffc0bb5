use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::info;

use crate::models::{Gradient, LyricRecord};
use crate::seed;

/// Load every lyric in authored order, each with its lines and moods in
/// their stored positions.
pub fn fetch_lyrics(conn: &Connection) -> Result<Vec<LyricRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, artist, excerpt, era, language, length, year,
                    gradient_from, gradient_to, spotify_url
             FROM lyrics
             ORDER BY position",
        )
        .context("failed to prepare lyrics query")?;

    let mut lyrics = stmt
        .query_map([], |row| {
            Ok(LyricRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                artist: row.get(2)?,
                excerpt: row.get(3)?,
                lyrics: Vec::new(),
                mood: Vec::new(),
                era: row.get(4)?,
                language: row.get(5)?,
                length: row.get(6)?,
                year: row.get(7)?,
                gradient: Gradient(row.get(8)?, row.get(9)?),
                spotify_url: row.get(10)?,
            })
        })
        .context("failed to iterate lyrics")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect lyrics")?;

    for lyric in &mut lyrics {
        lyric.lyrics = fetch_lines(conn, &lyric.id)?;
        lyric.mood = fetch_moods(conn, &lyric.id)?;
    }

    Ok(lyrics)
}

fn fetch_lines(conn: &Connection, lyric_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT line FROM lyric_lines WHERE lyric_id = ?1 ORDER BY position")
        .context("failed to prepare lyric lines query")?;

    let lines = stmt
        .query_map([lyric_id], |row| row.get(0))
        .context("failed to iterate lyric lines")?
        .collect::<Result<Vec<String>, _>>()
        .context("failed to collect lyric lines")?;

    Ok(lines)
}

fn fetch_moods(conn: &Connection, lyric_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT mood FROM lyric_moods WHERE lyric_id = ?1 ORDER BY position")
        .context("failed to prepare lyric moods query")?;

    let moods = stmt
        .query_map([lyric_id], |row| row.get(0))
        .context("failed to iterate lyric moods")?
        .collect::<Result<Vec<String>, _>>()
        .context("failed to collect lyric moods")?;

    Ok(moods)
}

/// Number of lyrics currently stored.
pub fn count_lyrics(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM lyrics", [], |row| row.get(0))
        .context("failed to count lyrics")
}

/// Append `records` after any existing rows, in one transaction so a failure
/// halfway leaves the store untouched.
pub fn insert_lyrics(conn: &mut Connection, records: &[LyricRecord]) -> Result<()> {
    let tx = conn
        .transaction()
        .context("failed to start lyric import")?;

    let offset: i64 = tx
        .query_row("SELECT COALESCE(MAX(position) + 1, 0) FROM lyrics", [], |row| {
            row.get(0)
        })
        .context("failed to read next lyric position")?;

    for (index, record) in records.iter().enumerate() {
        tx.execute(
            "INSERT INTO lyrics (id, position, title, artist, excerpt, era, language, length,
                                 year, gradient_from, gradient_to, spotify_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                record.id,
                offset + index as i64,
                record.title,
                record.artist,
                record.excerpt,
                record.era,
                record.language,
                record.length,
                record.year,
                record.gradient.0,
                record.gradient.1,
                record.spotify_url,
            ],
        )
        .with_context(|| format!("failed to insert lyric `{}`", record.id))?;

        for (position, line) in record.lyrics.iter().enumerate() {
            tx.execute(
                "INSERT INTO lyric_lines (lyric_id, position, line) VALUES (?1, ?2, ?3)",
                params![record.id, position as i64, line],
            )
            .with_context(|| format!("failed to insert a line of `{}`", record.id))?;
        }

        for (position, mood) in record.mood.iter().enumerate() {
            tx.execute(
                "INSERT INTO lyric_moods (lyric_id, position, mood) VALUES (?1, ?2, ?3)",
                params![record.id, position as i64, mood],
            )
            .with_context(|| format!("failed to insert a mood of `{}`", record.id))?;
        }
    }

    tx.commit().context("failed to commit lyric import")
}

/// Remove every lyric. Lines and moods follow through the cascade.
pub fn clear_lyrics(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM lyrics", [])
        .context("failed to clear lyrics")?;
    Ok(())
}

/// Load the stored anthology, seeding it with the bundled one when the store
/// is empty or when `reseed` asks for a fresh copy.
pub fn load_or_seed_lyrics(conn: &mut Connection, reseed: bool) -> Result<Vec<LyricRecord>> {
    if reseed {
        info!("clearing stored lyrics before reseeding");
        clear_lyrics(conn)?;
    }

    if count_lyrics(conn)? == 0 {
        let records = seed::anthology();
        info!(count = records.len(), "seeding lyric store with bundled anthology");
        insert_lyrics(conn, &records)?;
    }

    fetch_lyrics(conn)
}
