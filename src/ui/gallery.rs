/// The gallery canvas: a wrapped grid of artwork cards
///
/// Rebuilt from the catalog's current view on every draw; card
/// activation buttons carry the ref minted for this view, so a press
/// always resolves against the list the user is actually seeing.

use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::{ArtworkRef, Catalog};
use crate::state::data::Artwork;
use crate::Message;

/// Width of one gallery card
const CARD_WIDTH: f32 = 300.0;

/// Height of the card photo area
const CARD_PHOTO_HEIGHT: f32 = 200.0;

/// Card descriptions are clamped to roughly three lines
const CARD_DESCRIPTION_CHARS: usize = 140;

/// Render the current view as a scrollable card grid,
/// or the dedicated empty-view message when nothing matches.
pub fn view<'a>(catalog: &'a Catalog, photos: &[image::Handle]) -> Element<'a, Message> {
    if catalog.is_view_empty() {
        return no_results();
    }

    let cards: Vec<Element<Message>> = catalog
        .visible()
        .map(|(card, index, obra)| self::card(card, obra, photos[index].clone()))
        .collect();

    scrollable(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0))
        .height(Length::Fill)
        .into()
}

/// Shown while a filter recompute is settling
pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Carregando obras...").size(18))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// One artwork card
fn card<'a>(card: ArtworkRef, obra: &'a Artwork, photo: image::Handle) -> Element<'a, Message> {
    let details = column![
        text(obra.title.as_str()).size(22),
        text(obra.byline()).size(14),
        text(obra.size_price_line()).size(12),
        text(clamp(obra.describe())).size(13),
        button(text("Ver Detalhes"))
            .on_press(Message::ShowDetails(card))
            .padding(10)
            .width(Length::Fill),
    ]
    .spacing(6)
    .padding(12);

    container(
        column![
            image(photo)
                .width(Length::Fill)
                .height(Length::Fixed(CARD_PHOTO_HEIGHT))
                .content_fit(ContentFit::Cover),
            details,
        ],
    )
    .width(Length::Fixed(CARD_WIDTH))
    .style(container::rounded_box)
    .into()
}

/// Shown when the current filters match nothing
fn no_results<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Nenhuma obra encontrada").size(24),
            text("Ajuste a busca ou limpe os filtros para ver o catálogo completo.").size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Clamp card descriptions; the detail view shows the full text
fn clamp(description: String) -> String {
    if description.chars().count() <= CARD_DESCRIPTION_CHARS {
        return description;
    }

    let cut: String = description.chars().take(CARD_DESCRIPTION_CHARS).collect();
    format!("{}…", cut.trim_end())
}
