//! Domain models shared by the catalog, the explorer view-model and the TUI.
//! These stay plain data holders: the catalog derives vocabularies from them,
//! the explorer filters them, and the UI only ever reads them.

use std::fmt;

use serde::Deserialize;

/// Two decorative colours painted behind the spotlight header, kept as the
/// raw colour text the data source authored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gradient(pub String, pub String);

impl Gradient {
    /// Both stops as RGB triples, or `None` if either is not `#rrggbb`.
    pub fn rgb(&self) -> Option<[(u8, u8, u8); 2]> {
        Some([parse_hex_color(&self.0)?, parse_hex_color(&self.1)?])
    }
}

/// Parse a `#rrggbb` colour. Shorthand and named colours are rejected.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the anthology. Records are immutable once the catalog is
/// built; every other layer borrows them.
pub struct LyricRecord {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Short teaser shown on cards.
    pub excerpt: String,
    /// Full verse, one entry per line, in reading order.
    pub lyrics: Vec<String>,
    /// Mood tags in authored order. A record can carry several.
    pub mood: Vec<String>,
    pub era: String,
    pub language: String,
    pub length: String,
    pub year: i32,
    pub gradient: Gradient,
    #[serde(default)]
    pub spotify_url: Option<String>,
}

impl LyricRecord {
    /// Whether the record is tagged with `mood`. Exact, case-sensitive.
    pub fn has_mood(&self, mood: &str) -> bool {
        self.mood.iter().any(|tag| tag == mood)
    }

    /// The outbound link with surrounding whitespace removed, or `None` when
    /// the record has no usable link.
    pub fn link(&self) -> Option<&str> {
        self.spotify_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// `Title - Artist`, used in status messages.
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

impl fmt::Display for LyricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The four categorical dimensions a user can narrow the catalog by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Mood,
    Era,
    Language,
    Length,
}

impl Facet {
    /// Display order of the chip groups.
    pub const ALL: [Facet; 4] = [Facet::Mood, Facet::Era, Facet::Language, Facet::Length];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Mood => "Mood",
            Facet::Era => "Era",
            Facet::Language => "Language",
            Facet::Length => "Length",
        }
    }

    /// Whether `record` carries `value` on this facet. Mood is a membership
    /// test; the other facets compare the single value exactly.
    pub fn matches(self, record: &LyricRecord, value: &str) -> bool {
        match self {
            Facet::Mood => record.has_mood(value),
            Facet::Era => record.era == value,
            Facet::Language => record.language == value,
            Facet::Length => record.length == value,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active single-value selection per facet. `None` means the facet places no
/// constraint on the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub mood: Option<String>,
    pub era: Option<String>,
    pub language: Option<String>,
    pub length: Option<String>,
}

impl FilterState {
    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.slot(facet).as_deref()
    }

    fn slot(&self, facet: Facet) -> &Option<String> {
        match facet {
            Facet::Mood => &self.mood,
            Facet::Era => &self.era,
            Facet::Language => &self.language,
            Facet::Length => &self.length,
        }
    }

    pub(crate) fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::Mood => &mut self.mood,
            Facet::Era => &mut self.era,
            Facet::Language => &mut self.language,
            Facet::Length => &mut self.length,
        }
    }

    /// True when no facet is constrained.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|facet| self.get(*facet).is_none())
    }

    /// Whether `record` satisfies every active selector.
    pub fn admits(&self, record: &LyricRecord) -> bool {
        Facet::ALL.iter().all(|facet| match self.get(*facet) {
            Some(value) => facet.matches(record, value),
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_parse_strictly() {
        assert_eq!(parse_hex_color("#ff8040"), Some((255, 128, 64)));
        assert_eq!(parse_hex_color(" #FFE4E6 "), Some((255, 228, 230)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("ff8040"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn blank_links_are_treated_as_missing() {
        let mut record = crate::seed::anthology().remove(0);
        record.spotify_url = Some("   ".to_string());
        assert_eq!(record.link(), None);
        record.spotify_url = Some(" https://example.com ".to_string());
        assert_eq!(record.link(), Some("https://example.com"));
    }

    #[test]
    fn filter_state_admits_only_matching_records() {
        let record = crate::seed::anthology().remove(0);
        let mut filters = FilterState::default();
        assert!(filters.is_empty());
        assert!(filters.admits(&record));

        filters.mood = Some("Bittersweet".to_string());
        filters.language = Some("English".to_string());
        assert!(filters.admits(&record));

        filters.length = Some("Long".to_string());
        assert!(!filters.admits(&record));
        assert_eq!(filters.get(Facet::Length), Some("Long"));
    }
}
