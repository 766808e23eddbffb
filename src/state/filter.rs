/// Pure filtering logic for the gallery
///
/// Kept free of UI types so the predicate and the option collection
/// can be tested without spinning up the iced runtime.

use super::data::Artwork;

/// Current search text plus the two selected category values.
///
/// An empty string means "no constraint", mirroring the catalog's
/// empty-valued "all" selector options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_artist: String,
    pub selected_technique: String,
}

impl FilterState {
    /// Reset all three fields to the unconstrained state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Compute the filtered view over the full catalog.
///
/// Returns indices into `artworks`, preserving catalog order. An
/// artwork is kept when its title or artist contains the search term
/// (case-insensitive) and it matches both exact-value selectors.
/// An empty search term matches everything.
pub fn apply(artworks: &[Artwork], state: &FilterState) -> Vec<usize> {
    let term = state.search_term.to_lowercase();

    artworks
        .iter()
        .enumerate()
        .filter(|(_, obra)| {
            let matches_search = obra.title.to_lowercase().contains(&term)
                || obra.artist.to_lowercase().contains(&term);
            let matches_artist =
                state.selected_artist.is_empty() || obra.artist == state.selected_artist;
            let matches_technique =
                state.selected_technique.is_empty() || obra.technique == state.selected_technique;

            matches_search && matches_artist && matches_technique
        })
        .map(|(index, _)| index)
        .collect()
}

/// Collect the distinct values of one artwork field, sorted ascending.
///
/// Exact case-sensitive dedup. Runs once at startup to populate the
/// selector options, since the catalog never changes mid-session.
pub fn collect_distinct<F>(artworks: &[Artwork], field: F) -> Vec<String>
where
    F: Fn(&Artwork) -> &str,
{
    let mut values: Vec<String> = artworks.iter().map(|obra| field(obra).to_string()).collect();
    values.sort();
    values.dedup();
    values
}
