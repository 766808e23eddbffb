use iced::widget::{column, container, image, text};
use iced::{Element, Length, Task, Theme};
use std::time::Duration;

// Declare the application modules
mod assets;
mod contact;
mod state;
mod ui;

use state::catalog::{ArtworkRef, Catalog};

/// How long the busy indicator stays up after a filter change.
/// Purely cosmetic; the recompute itself is synchronous.
const SETTLE_DELAY_MS: u64 = 300;

/// Fixed message shown when the embedded catalog cannot be loaded
const LOAD_ERROR: &str = "Erro ao carregar as obras. Reinicie o aplicativo.";

/// Main application state
struct Galeria {
    /// The artwork catalog, None when the embedded data failed to load
    catalog: Option<Catalog>,
    /// One resolved photo handle per catalog entry, in catalog order
    photos: Vec<image::Handle>,
    /// True while a filter recompute is settling
    busy: bool,
    /// Card currently presented in the detail overlay
    detail: Option<ArtworkRef>,
    /// Status message shown under the gallery
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search text edited
    SearchChanged(String),
    /// Artist selector changed (the "all" entry clears the constraint)
    ArtistSelected(String),
    /// Technique selector changed
    TechniqueSelected(String),
    /// User clicked "Limpar Filtros"
    ClearFilters,
    /// The settle delay for the given view generation elapsed
    FilterSettled(u64),
    /// User clicked "Ver Detalhes" on a card
    ShowDetails(ArtworkRef),
    /// Detail overlay dismissed (close button or backdrop press)
    CloseDetails,
    /// User clicked "Falar no WhatsApp" in the detail overlay
    ContactSeller,
}

impl Galeria {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        match state::data::load_embedded() {
            Ok(data) => {
                let catalog = Catalog::new(data);
                let photos = assets::resolve_all(catalog.artworks());

                println!("🎨 Galeria initialized with {} obras", catalog.total());

                let status = format!("Pronto. {} obras no catálogo.", catalog.total());
                let generation = catalog.generation();

                (
                    Galeria {
                        catalog: Some(catalog),
                        photos,
                        busy: true,
                        detail: None,
                        status,
                    },
                    Task::perform(settle(generation), Message::FilterSettled),
                )
            }
            Err(err) => {
                eprintln!("❌ Não foi possível carregar o catálogo: {}", err);

                (
                    Galeria {
                        catalog: None,
                        photos: Vec::new(),
                        busy: false,
                        detail: None,
                        status: String::new(),
                    },
                    Task::none(),
                )
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let Some(catalog) = &mut self.catalog else {
            return Task::none();
        };

        match message {
            Message::SearchChanged(term) => {
                let generation = catalog.set_search_term(term);
                self.begin_settle(generation)
            }
            Message::ArtistSelected(choice) => {
                let value = selector_value(ui::controls::ALL_ARTISTS, choice);
                let generation = catalog.set_artist(value);
                self.begin_settle(generation)
            }
            Message::TechniqueSelected(choice) => {
                let value = selector_value(ui::controls::ALL_TECHNIQUES, choice);
                let generation = catalog.set_technique(value);
                self.begin_settle(generation)
            }
            Message::ClearFilters => {
                let generation = catalog.clear_filters();
                self.begin_settle(generation)
            }
            Message::FilterSettled(generation) => {
                // Completions from superseded recomputes are stale; the
                // most recent recompute decides when the view appears.
                if generation == catalog.generation() {
                    self.busy = false;
                    self.status = format!(
                        "{} de {} obras exibidas.",
                        catalog.visible_count(),
                        catalog.total()
                    );
                }
                Task::none()
            }
            Message::ShowDetails(card) => {
                if catalog.resolve(card).is_some() {
                    self.detail = Some(card);
                }
                Task::none()
            }
            Message::CloseDetails => {
                self.detail = None;
                Task::none()
            }
            Message::ContactSeller => {
                if let Some(obra) = self.detail.and_then(|card| catalog.resolve(card)) {
                    let link = contact::whatsapp_link(obra);
                    if let Err(err) = webbrowser::open(&link) {
                        eprintln!("⚠️  Não foi possível abrir o WhatsApp: {}", err);
                    }
                }
                Task::none()
            }
        }
    }

    /// Enter the recomputing state and schedule its settle completion
    fn begin_settle(&mut self, generation: u64) -> Task<Message> {
        self.busy = true;
        Task::perform(settle(generation), Message::FilterSettled)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let Some(catalog) = &self.catalog else {
            return container(text(LOAD_ERROR).size(20))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let header = column![
            text("Galeria Arte Viva").size(36),
            text("Arte popular brasileira").size(16),
        ]
        .spacing(4);

        let canvas: Element<Message> = if self.busy {
            ui::gallery::loading()
        } else {
            ui::gallery::view(catalog, &self.photos)
        };

        let base: Element<Message> = column![
            header,
            ui::controls::view(catalog),
            canvas,
            text(&self.status).size(12),
        ]
        .spacing(16)
        .padding(24)
        .into();

        match self.detail.and_then(|card| catalog.resolve_entry(card)) {
            Some((index, obra)) => {
                let panel = ui::detail::view(obra, catalog.bio(&obra.artist), self.photos[index].clone());
                ui::detail::overlay(base, panel)
            }
            None => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map a selector choice onto the filter value ("all" entries clear it)
fn selector_value(all: &str, choice: String) -> String {
    if choice == all {
        String::new()
    } else {
        choice
    }
}

/// Cosmetic delay between a recompute and showing its results
async fn settle(generation: u64) -> u64 {
    tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
    generation
}

fn main() -> iced::Result {
    iced::application("Galeria Arte Viva", Galeria::update, Galeria::view)
        .theme(Galeria::theme)
        .centered()
        .run_with(Galeria::new)
}
