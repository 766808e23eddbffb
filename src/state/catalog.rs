/// The catalog owns the full artwork list, the bio index, the current
/// filter, and the derived view the gallery renders from.
///
/// Every recompute stamps a new generation. Card references minted for
/// one view carry that stamp and stop resolving the moment the view is
/// replaced, so an activation from a stale render can never reach the
/// wrong artwork.

use super::data::{Artwork, BioIndex, CatalogData};
use super::filter::{self, FilterState};

/// Reference to one card in the most recently rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkRef {
    generation: u64,
    position: usize,
}

/// In-memory artwork catalog and its filtered view
#[derive(Debug)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    bios: BioIndex,
    filter: FilterState,
    /// Indices into `artworks`, in catalog order
    filtered: Vec<usize>,
    /// Bumped on every recompute; stale refs carry an older value
    generation: u64,
    artist_options: Vec<String>,
    technique_options: Vec<String>,
}

impl Catalog {
    /// Build the catalog and compute the initial (unconstrained) view.
    ///
    /// Selector options are collected once here; the artwork set never
    /// changes for the lifetime of a session.
    pub fn new(data: CatalogData) -> Self {
        let artist_options = filter::collect_distinct(&data.artworks, |obra| obra.artist.as_str());
        let technique_options =
            filter::collect_distinct(&data.artworks, |obra| obra.technique.as_str());

        let mut catalog = Catalog {
            artworks: data.artworks,
            bios: data.bios,
            filter: FilterState::default(),
            filtered: Vec::new(),
            generation: 0,
            artist_options,
            technique_options,
        };
        catalog.recompute();
        catalog
    }

    /// Recompute the filtered view and invalidate outstanding refs
    fn recompute(&mut self) -> u64 {
        self.filtered = filter::apply(&self.artworks, &self.filter);
        self.generation += 1;
        self.generation
    }

    /// Replace the search term and recompute.
    /// Returns the generation of the new view.
    pub fn set_search_term(&mut self, term: String) -> u64 {
        self.filter.search_term = term;
        self.recompute()
    }

    /// Replace the artist constraint (empty clears it) and recompute
    pub fn set_artist(&mut self, artist: String) -> u64 {
        self.filter.selected_artist = artist;
        self.recompute()
    }

    /// Replace the technique constraint (empty clears it) and recompute
    pub fn set_technique(&mut self, technique: String) -> u64 {
        self.filter.selected_technique = technique;
        self.recompute()
    }

    /// Reset all three filter fields and recompute
    pub fn clear_filters(&mut self) -> u64 {
        self.filter.clear();
        self.recompute()
    }

    /// The current filter, read-only outside this module
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Generation of the current view
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Full catalog, in load order
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Number of artworks in the full catalog
    pub fn total(&self) -> usize {
        self.artworks.len()
    }

    /// Number of artworks in the current view
    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// True when the current filters match nothing
    pub fn is_view_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Iterate the current view in order.
    ///
    /// Yields each card's ref, its index into the full catalog (used
    /// to look up the resolved photo handle), and the artwork itself.
    pub fn visible(&self) -> impl Iterator<Item = (ArtworkRef, usize, &Artwork)> + '_ {
        let generation = self.generation;
        self.filtered.iter().enumerate().map(move |(position, &index)| {
            (
                ArtworkRef {
                    generation,
                    position,
                },
                index,
                &self.artworks[index],
            )
        })
    }

    /// Resolve a card ref back to its artwork.
    ///
    /// Returns None when the ref was minted for a previous view.
    pub fn resolve(&self, card: ArtworkRef) -> Option<&Artwork> {
        self.resolve_entry(card).map(|(_, obra)| obra)
    }

    /// Like [`Self::resolve`], but also yields the catalog index
    pub fn resolve_entry(&self, card: ArtworkRef) -> Option<(usize, &Artwork)> {
        if card.generation != self.generation {
            return None;
        }

        self.filtered
            .get(card.position)
            .map(|&index| (index, &self.artworks[index]))
    }

    /// Biography for an artist, None when the index has no entry
    pub fn bio(&self, artist: &str) -> Option<&str> {
        self.bios.get(artist).map(String::as_str)
    }

    /// Distinct artist names, sorted ascending
    pub fn artist_options(&self) -> &[String] {
        &self.artist_options
    }

    /// Distinct technique names, sorted ascending
    pub fn technique_options(&self) -> &[String] {
        &self.technique_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn obra(title: &str, artist: &str, technique: &str) -> Artwork {
        Artwork {
            title: title.to_string(),
            artist: artist.to_string(),
            technique: technique.to_string(),
            size: None,
            price: None,
            image: None,
            description: None,
        }
    }

    fn sample_catalog() -> Catalog {
        let artworks = vec![obra("Sol", "Ana", "Óleo"), obra("Lua", "Bia", "Acrílico")];
        let mut bios = BioIndex::new();
        bios.insert("Ana".to_string(), "Pintora cearense.".to_string());

        Catalog::new(CatalogData { artworks, bios })
    }

    fn visible_titles(catalog: &Catalog) -> Vec<String> {
        catalog
            .visible()
            .map(|(_, _, obra)| obra.title.clone())
            .collect()
    }

    #[test]
    fn test_initial_view_shows_the_whole_catalog() {
        let catalog = sample_catalog();
        assert_eq!(visible_titles(&catalog), vec!["Sol", "Lua"]);
        assert_eq!(catalog.visible_count(), 2);
        assert!(!catalog.is_view_empty());
    }

    #[test]
    fn test_search_then_select_then_clear() {
        let mut catalog = sample_catalog();

        catalog.set_search_term("lua".to_string());
        assert_eq!(visible_titles(&catalog), vec!["Lua"]);

        catalog.set_search_term(String::new());
        catalog.set_artist("Ana".to_string());
        assert_eq!(visible_titles(&catalog), vec!["Sol"]);

        catalog.clear_filters();
        assert_eq!(visible_titles(&catalog), vec!["Sol", "Lua"]);
        assert_eq!(catalog.filter(), &FilterState::default());
    }

    #[test]
    fn test_activation_resolves_by_view_position() {
        let artworks = vec![
            obra("A", "Um", "Óleo"),
            obra("B", "Dois", "Óleo"),
            obra("C", "Três", "Óleo"),
        ];
        let catalog = Catalog::new(CatalogData {
            artworks,
            bios: BioIndex::new(),
        });

        let cards: Vec<ArtworkRef> = catalog.visible().map(|(card, _, _)| card).collect();
        assert_eq!(catalog.resolve(cards[1]).unwrap().title, "B");
    }

    #[test]
    fn test_stale_refs_stop_resolving() {
        let mut catalog = sample_catalog();

        let (card, _, _) = catalog.visible().next().unwrap();
        assert_eq!(catalog.resolve(card).unwrap().title, "Sol");

        // Any recompute replaces the view and orphans the old ref,
        // even though position 0 still exists afterwards.
        catalog.set_search_term("lua".to_string());
        assert!(catalog.resolve(card).is_none());
    }

    #[test]
    fn test_generation_advances_on_every_recompute() {
        let mut catalog = sample_catalog();
        let first = catalog.generation();

        let second = catalog.set_search_term("sol".to_string());
        let third = catalog.clear_filters();

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_unmatched_filters_flag_the_empty_view() {
        let mut catalog = sample_catalog();
        catalog.set_search_term("nada".to_string());

        assert!(catalog.is_view_empty());
        assert_eq!(catalog.visible_count(), 0);
        assert_eq!(catalog.visible().count(), 0);
    }

    #[test]
    fn test_selector_options_are_distinct_and_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.artist_options(), ["Ana", "Bia"]);
        assert_eq!(catalog.technique_options(), ["Acrílico", "Óleo"]);
    }

    #[test]
    fn test_bio_lookup_is_exact_and_optional() {
        let catalog = sample_catalog();
        assert_eq!(catalog.bio("Ana"), Some("Pintora cearense."));
        assert_eq!(catalog.bio("Bia"), None);
        assert_eq!(catalog.bio("ana"), None);
    }
}
