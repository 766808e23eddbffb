/// Outbound contact link for the detail view
///
/// Builds the pre-filled WhatsApp conversation URL for an artwork.
/// The destination number is fixed at build time.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::state::data::Artwork;

/// WhatsApp number of the gallery owner
const WHATSAPP_NUMBER: &str = "5585985204125";

/// Build the `wa.me` link with the interest message for one artwork.
///
/// The message interpolates the title and artist and is
/// percent-encoded into the `text` query parameter.
pub fn whatsapp_link(obra: &Artwork) -> String {
    let message = format!(
        "Olá! Tenho interesse na obra \"{}\", do artista {}. Poderia me passar mais informações?",
        obra.title, obra.artist
    );
    let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC);

    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn obra(title: &str, artist: &str) -> Artwork {
        Artwork {
            title: title.to_string(),
            artist: artist.to_string(),
            technique: "Óleo".to_string(),
            size: None,
            price: None,
            image: None,
            description: None,
        }
    }

    #[test]
    fn test_link_targets_the_fixed_number() {
        let link = whatsapp_link(&obra("Sol", "Ana"));
        assert!(link.starts_with("https://wa.me/5585985204125?text="));
    }

    #[test]
    fn test_payload_decodes_to_the_template_sentence() {
        let link = whatsapp_link(&obra("Sol", "Ana"));
        let (_, payload) = link.split_once("?text=").unwrap();

        let decoded = percent_decode_str(payload).decode_utf8().unwrap();
        assert_eq!(
            decoded,
            "Olá! Tenho interesse na obra \"Sol\", do artista Ana. Poderia me passar mais informações?"
        );
    }

    #[test]
    fn test_payload_is_url_safe() {
        // Quotes, spaces and accents must not survive encoding
        let link = whatsapp_link(&obra("Céu Azul", "João"));
        let (_, payload) = link.split_once("?text=").unwrap();

        assert!(!payload.contains(' '));
        assert!(!payload.contains('"'));
        assert!(payload.chars().all(|c| c.is_ascii()));
    }
}
