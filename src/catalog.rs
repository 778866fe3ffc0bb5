//! The immutable catalog plus everything derived from it once at load time:
//! the facet vocabularies that feed the filter chips and the trending shortcut
//! list. Nothing here changes after construction, so the explorer and the UI
//! can borrow freely.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{Facet, LyricRecord};

/// Number of entries surfaced in the trending list.
pub const TRENDING_SIZE: usize = 3;

/// Distinct values per facet, in the order they were first seen while
/// scanning the catalog. Deliberately not sorted so chips appear in the order
/// the anthology was authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetVocabulary {
    pub moods: Vec<String>,
    pub eras: Vec<String>,
    pub languages: Vec<String>,
    pub lengths: Vec<String>,
}

impl FacetVocabulary {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Mood => &self.moods,
            Facet::Era => &self.eras,
            Facet::Language => &self.languages,
            Facet::Length => &self.lengths,
        }
    }
}

/// Scan the records once and collect the distinct value set of every facet.
pub fn facet_values(records: &[LyricRecord]) -> FacetVocabulary {
    let mut vocabulary = FacetVocabulary::default();
    let mut seen: [HashSet<&str>; 4] = Default::default();

    for record in records {
        for mood in &record.mood {
            if seen[0].insert(mood.as_str()) {
                vocabulary.moods.push(mood.clone());
            }
        }
        if seen[1].insert(record.era.as_str()) {
            vocabulary.eras.push(record.era.clone());
        }
        if seen[2].insert(record.language.as_str()) {
            vocabulary.languages.push(record.language.clone());
        }
        if seen[3].insert(record.length.as_str()) {
            vocabulary.lengths.push(record.length.clone());
        }
    }

    vocabulary
}

/// Ranking score: release year plus a small bonus for the moods the editors
/// favour.
pub fn trending_score(record: &LyricRecord) -> i64 {
    let bonus = if record.has_mood("Passionate") {
        2
    } else if record.has_mood("Dreamy") {
        1
    } else {
        0
    };
    i64::from(record.year) + bonus
}

/// Rank every record by descending score and keep the first `top_n`. Equal
/// scores keep their catalog order (`sort_by` is stable), so two records from
/// the same year never trade places between runs.
pub fn trending(records: &[LyricRecord], top_n: usize) -> Vec<&LyricRecord> {
    trending_indices(records, top_n)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

fn trending_indices(records: &[LyricRecord], top_n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..records.len()).collect();
    ranked.sort_by(|a, b| trending_score(&records[*b]).cmp(&trending_score(&records[*a])));
    ranked.truncate(top_n);
    ranked
}

/// Check the input contract the rest of the crate relies on: ids are present
/// and unique, the single-valued facets are set and mood tags are a set.
/// Display text and gradient stops are free-form.
pub fn validate_records(records: &[LyricRecord]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for record in records {
        if record.id.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: record.title.clone(),
                field: "id",
            });
        }
        if !ids.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }

        for (field, value) in [
            ("era", &record.era),
            ("language", &record.language),
            ("length", &record.length),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: record.id.clone(),
                    field,
                });
            }
        }

        let mut moods = HashSet::new();
        for mood in &record.mood {
            if !moods.insert(mood.as_str()) {
                return Err(CatalogError::DuplicateMood {
                    id: record.id.clone(),
                    mood: mood.clone(),
                });
            }
        }
    }

    Ok(())
}

/// The loaded anthology together with its derived vocabularies and trending
/// list.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LyricRecord>,
    vocabulary: FacetVocabulary,
    trending: Vec<usize>,
}

impl Catalog {
    /// Validate `records` and derive everything the browser needs up front.
    pub fn new(records: Vec<LyricRecord>) -> Result<Self, CatalogError> {
        validate_records(&records)?;
        let vocabulary = facet_values(&records);
        let trending = trending_indices(&records, TRENDING_SIZE);
        Ok(Self {
            records,
            vocabulary,
            trending,
        })
    }

    /// Every record, in authored order.
    pub fn records(&self) -> &[LyricRecord] {
        &self.records
    }

    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    pub fn trending(&self) -> impl Iterator<Item = &LyricRecord> + '_ {
        self.trending.iter().map(|index| &self.records[*index])
    }

    pub fn trending_len(&self) -> usize {
        self.trending.len()
    }

    pub fn trending_at(&self, position: usize) -> Option<&LyricRecord> {
        self.trending
            .get(position)
            .map(|index| &self.records[*index])
    }

    pub fn get(&self, id: &str) -> Option<&LyricRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Gradient;

    pub(crate) fn record(id: &str, title: &str, mood: &[&str], year: i32) -> LyricRecord {
        LyricRecord {
            id: id.to_string(),
            title: title.to_string(),
            artist: "Artist".to_string(),
            excerpt: String::new(),
            lyrics: Vec::new(),
            mood: mood.iter().map(|m| m.to_string()).collect(),
            era: "90s".to_string(),
            language: "English".to_string(),
            length: "Short".to_string(),
            year,
            gradient: Gradient("#ffe4e6".to_string(), "#e0e7ff".to_string()),
            spotify_url: None,
        }
    }

    #[test]
    fn vocabulary_keeps_first_occurrence_order() {
        let mut a = record("a", "A", &["Tender", "Dreamy"], 1990);
        a.era = "90s".into();
        let mut b = record("b", "B", &["Passionate", "Tender"], 1970);
        b.era = "70s".into();
        b.language = "Spanish".into();
        let mut c = record("c", "C", &["Dreamy"], 1995);
        c.era = "90s".into();
        c.length = "Long".into();

        let vocabulary = facet_values(&[a, b, c]);
        assert_eq!(vocabulary.moods, ["Tender", "Dreamy", "Passionate"]);
        assert_eq!(vocabulary.eras, ["90s", "70s"]);
        assert_eq!(vocabulary.languages, ["English", "Spanish"]);
        assert_eq!(vocabulary.lengths, ["Short", "Long"]);
    }

    #[test]
    fn vocabulary_covers_every_record_and_nothing_else() {
        let records = crate::seed::anthology();
        let vocabulary = facet_values(&records);

        for record in &records {
            for mood in &record.mood {
                assert!(vocabulary.moods.contains(mood));
            }
            assert!(vocabulary.eras.contains(&record.era));
            assert!(vocabulary.languages.contains(&record.language));
            assert!(vocabulary.lengths.contains(&record.length));
        }
        for facet in Facet::ALL {
            for value in vocabulary.values(facet) {
                assert!(records.iter().any(|r| facet.matches(r, value)));
            }
        }
    }

    #[test]
    fn trending_ranks_by_year_plus_mood_bonus() {
        let records = vec![
            record("old", "Old", &["Tender"], 1980),
            record("dreamy", "Dreamy", &["Dreamy"], 2000),
            record("passion", "Passion", &["Passionate", "Dreamy"], 1999),
            record("plain", "Plain", &[], 2001),
        ];
        let ids: Vec<&str> = trending(&records, 3).iter().map(|r| r.id.as_str()).collect();
        // passion 2001, dreamy 2001, plain 2001 tie; catalog order wins.
        assert_eq!(ids, ["dreamy", "passion", "plain"]);
    }

    #[test]
    fn trending_is_stable_for_equal_scores() {
        let records = vec![
            record("first", "First", &[], 2010),
            record("second", "Second", &[], 2010),
            record("third", "Third", &[], 2010),
        ];
        for _ in 0..5 {
            let ids: Vec<&str> = trending(&records, 3).iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, ["first", "second", "third"]);
        }
    }

    #[test]
    fn trending_length_is_bounded_by_catalog() {
        let records = vec![record("a", "A", &[], 2000), record("b", "B", &[], 2001)];
        assert_eq!(trending(&records, 3).len(), 2);
        assert_eq!(trending(&records, 1).len(), 1);
        assert!(trending(&[], 3).is_empty());

        let ranked = trending(&records, 3);
        assert!(ranked
            .windows(2)
            .all(|pair| trending_score(pair[0]) >= trending_score(pair[1])));
    }

    #[test]
    fn catalog_precomputes_trending_and_lookup() {
        let catalog = Catalog::new(crate::seed::anthology()).unwrap();
        assert_eq!(catalog.trending_len(), TRENDING_SIZE);
        let expected: Vec<&str> = trending(catalog.records(), TRENDING_SIZE)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let actual: Vec<&str> = catalog.trending().map(|r| r.id.as_str()).collect();
        assert_eq!(actual, expected);
        let first = &catalog.records()[0];
        assert_eq!(catalog.get(&first.id), Some(first));
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn validation_rejects_duplicate_ids() {
        let records = vec![record("a", "A", &[], 2000), record("a", "B", &[], 2001)];
        assert_eq!(
            Catalog::new(records).unwrap_err(),
            CatalogError::DuplicateId("a".to_string())
        );
    }

    #[test]
    fn validation_rejects_repeated_mood_and_missing_facets() {
        let repeated = record("b", "B", &["Tender", "Tender"], 2000);
        assert!(matches!(
            validate_records(&[repeated]),
            Err(CatalogError::DuplicateMood { .. })
        ));

        let mut eraless = record("c", "C", &[], 2000);
        eraless.era = "  ".to_string();
        assert_eq!(
            validate_records(&[eraless]),
            Err(CatalogError::MissingField {
                id: "c".to_string(),
                field: "era"
            })
        );

        let mut anonymous = record("", "Untitled", &[], 2000);
        anonymous.id.clear();
        assert!(matches!(
            validate_records(&[anonymous]),
            Err(CatalogError::MissingField { field: "id", .. })
        ));
    }

    #[test]
    fn free_form_gradients_and_blank_artist_are_accepted() {
        let mut records = Vec::new();
        for (id, stop) in [("short", "#fff"), ("named", "pink"), ("func", "rgb(255, 0, 0)")] {
            let mut entry = record(id, id, &["Tender"], 2000);
            entry.gradient.1 = stop.to_string();
            records.push(entry);
        }
        let mut anonymous = record("anon", "Anon", &[], 1999);
        anonymous.artist.clear();
        anonymous.title.clear();
        records.push(anonymous);

        let catalog = Catalog::new(records).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("named").unwrap().gradient.1, "pink");
        assert!(catalog.get("short").unwrap().gradient.rgb().is_none());
    }
}
