/// The search and filter bar above the gallery
///
/// Every input emits a message that replaces one FilterState field;
/// the selectors carry a leading "all" entry that maps back to the
/// empty (unconstrained) value.

use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::state::catalog::Catalog;
use crate::Message;

/// Leading selector entry meaning "no artist constraint"
pub const ALL_ARTISTS: &str = "Todos os Artistas";

/// Leading selector entry meaning "no technique constraint"
pub const ALL_TECHNIQUES: &str = "Todas as Técnicas";

/// Render the filter bar for the current filter state
pub fn view(catalog: &Catalog) -> Element<'_, Message> {
    let filter = catalog.filter();

    let search = text_input("Buscar por título ou artista...", &filter.search_term)
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::FillPortion(2));

    let artist = pick_list(
        with_all_entry(ALL_ARTISTS, catalog.artist_options()),
        Some(selected_entry(ALL_ARTISTS, &filter.selected_artist)),
        Message::ArtistSelected,
    )
    .padding(10)
    .width(Length::FillPortion(1));

    let technique = pick_list(
        with_all_entry(ALL_TECHNIQUES, catalog.technique_options()),
        Some(selected_entry(ALL_TECHNIQUES, &filter.selected_technique)),
        Message::TechniqueSelected,
    )
    .padding(10)
    .width(Length::FillPortion(1));

    let clear = button(text("Limpar Filtros"))
        .on_press(Message::ClearFilters)
        .padding(10);

    row![search, artist, technique, clear].spacing(12).into()
}

/// Selector options with the "all" entry first
fn with_all_entry(all: &str, values: &[String]) -> Vec<String> {
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(all.to_string());
    options.extend(values.iter().cloned());
    options
}

/// What the selector displays for the current filter value
fn selected_entry(all: &str, value: &str) -> String {
    if value.is_empty() {
        all.to_string()
    } else {
        value.to_string()
    }
}
