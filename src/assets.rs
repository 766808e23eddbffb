/// Artwork photo resolution
///
/// Photos live next to the binary and may be missing or corrupt;
/// every artwork resolves to a displayable handle exactly once, at
/// startup, falling back to the embedded placeholder. Failures are
/// logged to the console and never surfaced in the UI.

use iced::widget::image::Handle;

use crate::state::data::Artwork;

/// Embedded fallback shown whenever an artwork photo is unavailable
const PLACEHOLDER_PNG: &[u8] = include_bytes!("../assets/placeholder.png");

/// Directory artwork photos are shipped in, relative to the working directory
const IMAGE_DIR: &str = "assets/images";

/// Handle for the embedded placeholder image
pub fn placeholder() -> Handle {
    Handle::from_bytes(PLACEHOLDER_PNG)
}

/// Resolve every artwork photo once, in catalog order.
///
/// The result is indexed by catalog position, parallel to
/// `Catalog::artworks`.
pub fn resolve_all(artworks: &[Artwork]) -> Vec<Handle> {
    artworks.iter().map(resolve).collect()
}

/// Resolve one artwork photo, verifying it actually decodes
fn resolve(obra: &Artwork) -> Handle {
    let Some(name) = &obra.image else {
        return placeholder();
    };

    let path = std::path::Path::new(IMAGE_DIR).join(name);
    match std::fs::read(&path) {
        Ok(bytes) => match image::load_from_memory(&bytes) {
            Ok(_) => Handle::from_bytes(bytes),
            Err(err) => {
                eprintln!("⚠️  Imagem inválida em {}: {}", path.display(), err);
                placeholder()
            }
        },
        Err(err) => {
            eprintln!("⚠️  Imagem ausente em {}: {}", path.display(), err);
            placeholder()
        }
    }
}
