/// The detail overlay: one artwork presented over the gallery
///
/// A singleton surface; presenting another artwork rebuilds the whole
/// panel. A press on the dimmed backdrop closes it, a press inside
/// the panel does not.

use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row,
    scrollable, stack, text,
};
use iced::{Color, ContentFit, Element, Length, Theme};

use crate::state::data::Artwork;
use crate::Message;

/// Width of the detail panel
const PANEL_WIDTH: f32 = 560.0;

/// Height of the panel photo area
const PANEL_PHOTO_HEIGHT: f32 = 280.0;

/// Stack the detail panel over the gallery behind a dimmed backdrop
pub fn overlay<'a>(
    base: Element<'a, Message>,
    panel: Element<'a, Message>,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(backdrop)).on_press(Message::CloseDetails)
        )
    ]
    .into()
}

/// Render the panel for one artwork.
///
/// The bio section is omitted entirely when the artist has no entry
/// in the bio index.
pub fn view<'a>(obra: &'a Artwork, bio: Option<&'a str>, photo: image::Handle) -> Element<'a, Message> {
    let close = row![
        horizontal_space(),
        button(text("✕")).on_press(Message::CloseDetails),
    ];

    let mut details = column![
        image(photo)
            .width(Length::Fill)
            .height(Length::Fixed(PANEL_PHOTO_HEIGHT))
            .content_fit(ContentFit::Cover),
        text(obra.title.as_str()).size(28),
        text(obra.byline()).size(16),
        text(obra.size_price_line()).size(14),
        text(obra.describe()).size(14),
    ]
    .spacing(10);

    if let Some(bio) = bio {
        details = details.push(text(format!("Sobre {}", obra.artist)).size(18));
        details = details.push(text(bio).size(14));
    }

    details = details.push(
        button(text("Falar no WhatsApp"))
            .on_press(Message::ContactSeller)
            .padding(12)
            .width(Length::Fill),
    );

    container(scrollable(column![close, details].spacing(8).padding(20)))
        .width(Length::Fixed(PANEL_WIDTH))
        .max_height(680.0)
        .style(container::rounded_box)
        .into()
}

/// Dimmed backdrop behind the panel
fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
