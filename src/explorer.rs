//! Interactive state of the browser: the search box, the four facet
//! selectors and the spotlighted record. Every mutation is followed by a pure
//! recomputation of the filtered view, so the UI never has to reason about
//! stale results.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Facet, FilterState, LyricRecord};

/// Result of filtering the catalog. Always computed, so an empty view is a
/// real answer ("nothing matches") rather than a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    records: Vec<&'a LyricRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a LyricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a LyricRecord> {
        self.records.get(index).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.records.iter().map(|record| record.id.as_str()).collect()
    }
}

/// Whether `record` contains the already-normalized `needle` anywhere a
/// reader would look: title, artist, excerpt, then each lyric line.
fn matches_search(record: &LyricRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.artist.to_lowercase().contains(needle)
        || record.excerpt.to_lowercase().contains(needle)
        || record
            .lyrics
            .iter()
            .any(|line| line.to_lowercase().contains(needle))
}

/// Keep every record that satisfies the search term and all active filters,
/// in catalog order. The term is trimmed and lowercased here, never when it is
/// stored.
pub fn compute_filtered_view<'a>(
    records: &'a [LyricRecord],
    search_term: &str,
    filters: &FilterState,
) -> FilteredView<'a> {
    let needle = search_term.trim().to_lowercase();

    if needle.is_empty() && filters.is_empty() {
        return FilteredView {
            records: records.iter().collect(),
        };
    }

    let records = records
        .iter()
        .filter(|record| needle.is_empty() || matches_search(record, &needle))
        .filter(|record| filters.admits(record))
        .collect();

    FilteredView { records }
}

/// View-model behind the browser screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    search_term: String,
    filters: FilterState,
    selected: Option<String>,
}

impl Explorer {
    /// Fresh state: no search, no filters, spotlight on the top trending
    /// record (nothing for an empty catalog).
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            search_term: String::new(),
            filters: FilterState::default(),
            selected: catalog.trending().next().map(|record| record.id.clone()),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the catalog.
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a LyricRecord> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }

    /// Replace the search text verbatim.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        debug!(term = %self.search_term, "search term changed");
    }

    /// Select `value` on `facet`, or deselect it when it is already the active
    /// value. Other facets are untouched.
    pub fn toggle_filter(&mut self, facet: Facet, value: &str) {
        let slot = self.filters.slot_mut(facet);
        if slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_string());
        }
        debug!(facet = %facet, value, active = ?self.filters.get(facet), "filter toggled");
    }

    /// Unset every facet. Search text and selection stay as they are.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        debug!("filters cleared");
    }

    /// Spotlight `record`. It does not have to be part of the current view.
    pub fn select(&mut self, record: &LyricRecord) {
        self.selected = Some(record.id.clone());
        debug!(id = %record.id, "record selected");
    }

    /// Trending shortcut: spotlight `record` and drop any in-progress search
    /// and filters so the browser starts over around it.
    pub fn select_trending(&mut self, record: &LyricRecord) {
        self.selected = Some(record.id.clone());
        self.filters = FilterState::default();
        self.search_term.clear();
        debug!(id = %record.id, "trending record selected, search and filters reset");
    }

    /// The current filtered view over `catalog`.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> FilteredView<'a> {
        compute_filtered_view(catalog.records(), &self.search_term, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::record;

    fn two_record_catalog() -> Catalog {
        let mut rain = record("1", "Rain", &["Dreamy"], 1994);
        rain.era = "90s".into();
        rain.length = "Short".into();
        let mut fire = record("2", "Fire", &["Passionate"], 1996);
        fire.era = "90s".into();
        fire.length = "Long".into();
        Catalog::new(vec![rain, fire]).unwrap()
    }

    fn lyric_catalog() -> Catalog {
        let mut first = record("a", "Harbor Lights", &["Tender"], 1982);
        first.artist = "June Alder".into();
        first.excerpt = "Wait for me where the ferries sleep".into();
        first.lyrics = vec![
            "Wait for me where the ferries sleep".into(),
            "I will carry our love across the water".into(),
        ];
        let mut second = record("b", "Midnight Orchard", &["Dreamy"], 2004);
        second.artist = "Lovelace Choir".into();
        second.excerpt = "Apples glow like lanterns".into();
        let mut third = record("c", "Ember", &["Passionate"], 2011);
        third.excerpt = "Stay until the embers".into();
        third.lyrics = vec!["No words, only the fire".into()];
        Catalog::new(vec![first, second, third]).unwrap()
    }

    #[test]
    fn starts_unfiltered_with_top_trending_selected() {
        let catalog = two_record_catalog();
        let explorer = Explorer::new(&catalog);
        assert_eq!(explorer.search_term(), "");
        assert!(explorer.filters().is_empty());
        // Fire: 1996 + 2 outranks Rain: 1994 + 1.
        assert_eq!(explorer.selected_id(), Some("2"));
        assert_eq!(explorer.view(&catalog).ids(), ["1", "2"]);
    }

    #[test]
    fn empty_catalog_has_no_selection_and_empty_view() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let explorer = Explorer::new(&catalog);
        assert!(explorer.selected(&catalog).is_none());
        assert!(explorer.view(&catalog).is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);

        explorer.toggle_filter(Facet::Mood, "Passionate");
        assert_eq!(explorer.view(&catalog).ids(), ["2"]);

        explorer.toggle_filter(Facet::Length, "Short");
        let view = explorer.view(&catalog);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn toggling_twice_restores_the_facet() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);

        explorer.toggle_filter(Facet::Era, "90s");
        assert_eq!(explorer.filters().get(Facet::Era), Some("90s"));
        explorer.toggle_filter(Facet::Era, "90s");
        assert_eq!(explorer.filters().get(Facet::Era), None);

        explorer.toggle_filter(Facet::Mood, "Dreamy");
        explorer.toggle_filter(Facet::Era, "80s");
        explorer.toggle_filter(Facet::Era, "80s");
        assert_eq!(explorer.filters().get(Facet::Mood), Some("Dreamy"));
    }

    #[test]
    fn new_value_replaces_only_its_own_facet() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);

        explorer.toggle_filter(Facet::Mood, "Dreamy");
        explorer.toggle_filter(Facet::Length, "Short");
        explorer.toggle_filter(Facet::Mood, "Passionate");

        assert_eq!(explorer.filters().get(Facet::Mood), Some("Passionate"));
        assert_eq!(explorer.filters().get(Facet::Length), Some("Short"));
    }

    #[test]
    fn clear_filters_keeps_search_and_selection() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.set_search_term("fi");
        explorer.select(&catalog.records()[0]);
        explorer.toggle_filter(Facet::Era, "90s");
        explorer.toggle_filter(Facet::Language, "English");

        explorer.clear_filters();

        assert!(explorer.filters().is_empty());
        assert_eq!(explorer.search_term(), "fi");
        assert_eq!(explorer.selected_id(), Some("1"));
    }

    #[test]
    fn search_ignores_case_and_surrounding_whitespace() {
        let catalog = lyric_catalog();
        let padded = compute_filtered_view(catalog.records(), "  LOVE  ", &FilterState::default());
        let plain = compute_filtered_view(catalog.records(), "love", &FilterState::default());
        assert_eq!(padded, plain);
        // Lyric line of "a" and artist of "b".
        assert_eq!(plain.ids(), ["a", "b"]);
    }

    #[test]
    fn search_looks_at_title_artist_excerpt_and_lines() {
        let catalog = lyric_catalog();
        let none = FilterState::default();
        let ids = |term: &str| compute_filtered_view(catalog.records(), term, &none).ids();

        assert_eq!(ids("orchard"), ["b"]);
        assert_eq!(ids("june"), ["a"]);
        assert_eq!(ids("lanterns"), ["b"]);
        assert_eq!(ids("fire"), ["c"]);
        assert!(ids("nowhere to be found").is_empty());
        assert_eq!(ids("   "), ["a", "b", "c"]);
    }

    #[test]
    fn search_term_is_stored_verbatim() {
        let catalog = lyric_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.set_search_term("  Ember ");
        assert_eq!(explorer.search_term(), "  Ember ");
        assert_eq!(explorer.view(&catalog).ids(), ["c"]);
    }

    #[test]
    fn search_and_filters_combine() {
        let catalog = lyric_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.set_search_term("love");
        explorer.toggle_filter(Facet::Mood, "Dreamy");
        assert_eq!(explorer.view(&catalog).ids(), ["b"]);
    }

    #[test]
    fn era_match_is_case_sensitive() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.toggle_filter(Facet::Era, "90S");
        assert!(explorer.view(&catalog).is_empty());
    }

    #[test]
    fn view_preserves_catalog_order_and_is_idempotent() {
        let catalog = lyric_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.set_search_term("e");
        let first = explorer.view(&catalog);
        let second = explorer.view(&catalog);
        assert_eq!(first, second);
        assert_eq!(first.ids(), ["a", "b", "c"]);
    }

    #[test]
    fn trending_click_resets_search_and_filters() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);
        let record_a = &catalog.records()[0];
        let record_b = &catalog.records()[1];

        explorer.set_search_term("fire");
        explorer.toggle_filter(Facet::Era, "90s");
        explorer.select(record_a);

        explorer.select_trending(record_b);

        assert_eq!(explorer.search_term(), "");
        assert!(explorer.filters().is_empty());
        assert_eq!(explorer.selected_id(), Some("2"));
    }

    #[test]
    fn selection_is_independent_of_the_view() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.toggle_filter(Facet::Mood, "Passionate");
        let before = explorer.view(&catalog);

        let rain = &catalog.records()[0];
        explorer.select(rain);

        assert_eq!(explorer.view(&catalog), before);
        assert!(!before.contains("1"));
        assert_eq!(explorer.selected(&catalog), Some(rain));
    }

    #[test]
    fn filtering_never_clears_the_selection() {
        let catalog = two_record_catalog();
        let mut explorer = Explorer::new(&catalog);
        explorer.select(&catalog.records()[0]);
        explorer.set_search_term("no such words");
        assert!(explorer.view(&catalog).is_empty());
        assert_eq!(explorer.selected_id(), Some("1"));
    }
}
