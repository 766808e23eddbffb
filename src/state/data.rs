/// Shared data structures for the catalog
///
/// These structs represent the data model that flows between
/// the embedded catalog files and the UI layer.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Shown on the size/price line when an artwork has no measurements
pub const SIZE_FALLBACK: &str = "Tamanho não informado";

/// Shown on the size/price line when an artwork has no listed price
pub const PRICE_FALLBACK: &str = "Valor sob consulta";

/// Represents a single artwork in the catalog
///
/// The wire format is the catalog's original Portuguese schema;
/// the serde renames map it onto the names used everywhere else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Title of the piece
    #[serde(rename = "titulo")]
    pub title: String,
    /// Artist name, also the key into the bio index
    #[serde(rename = "artista")]
    pub artist: String,
    /// Technique (e.g. "Óleo sobre tela")
    #[serde(rename = "tecnica")]
    pub technique: String,
    /// Physical dimensions, as display text
    #[serde(rename = "tamanho", default)]
    pub size: Option<String>,
    /// Asking price, as display text
    #[serde(rename = "valor", default)]
    pub price: Option<String>,
    /// Photo filename inside the assets directory
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
    /// Curated description; blank or absent means one is synthesized
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

impl Artwork {
    /// Description shown on cards and in the detail view.
    ///
    /// Returns the curated description verbatim when it has any
    /// non-whitespace content, otherwise a sentence generated from
    /// the artist and technique. Never empty.
    pub fn describe(&self) -> String {
        if let Some(text) = &self.description {
            if !text.trim().is_empty() {
                return text.clone();
            }
        }

        format!(
            "Esta obra de {} em {} representa com sensibilidade a cultura popular \
             brasileira. Transmite emoção, identidade e beleza visual, convidando o \
             espectador a uma imersão profunda na arte nacional.",
            self.artist, self.technique
        )
    }

    /// The "artist – technique" line shown under the title
    pub fn byline(&self) -> String {
        format!("{} – {}", self.artist, self.technique)
    }

    /// The "size | price" line, with fixed fallbacks for missing fields
    pub fn size_price_line(&self) -> String {
        format!(
            "{} | {}",
            self.size.as_deref().unwrap_or(SIZE_FALLBACK),
            self.price.as_deref().unwrap_or(PRICE_FALLBACK),
        )
    }
}

/// Static lookup from artist name to biography text
pub type BioIndex = HashMap<String, String>;

/// Everything the catalog holds, as loaded from the embedded files
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub artworks: Vec<Artwork>,
    pub bios: BioIndex,
}

/// Errors raised while loading the embedded catalog
#[derive(Debug, Error)]
pub enum DataError {
    /// The embedded JSON did not match the expected schema
    #[error("catálogo inválido: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but contains no artworks
    #[error("o catálogo de obras está vazio")]
    Empty,
}

/// The artwork catalog, embedded at compile time
const OBRAS_JSON: &str = include_str!("../../data/obras.json");

/// Artist biographies, embedded at compile time
const BIOS_JSON: &str = include_str!("../../data/bios.json");

/// Parse the embedded catalog and bio index.
///
/// Called once at startup. An error here means the build shipped
/// without usable data; the app shell turns it into the fixed
/// user-facing message instead of exiting.
pub fn load_embedded() -> Result<CatalogData, DataError> {
    parse_catalog(OBRAS_JSON, BIOS_JSON)
}

/// Parse a catalog and bio index from raw JSON
fn parse_catalog(obras: &str, bios: &str) -> Result<CatalogData, DataError> {
    let artworks: Vec<Artwork> = serde_json::from_str(obras)?;
    if artworks.is_empty() {
        return Err(DataError::Empty);
    }

    let bios: BioIndex = serde_json::from_str(bios)?;

    Ok(CatalogData { artworks, bios })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obra(description: Option<&str>) -> Artwork {
        Artwork {
            title: "Sol".to_string(),
            artist: "Ana".to_string(),
            technique: "Óleo".to_string(),
            size: None,
            price: None,
            image: None,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_describe_prefers_curated_text() {
        let art = obra(Some("Uma paisagem ao amanhecer."));
        assert_eq!(art.describe(), "Uma paisagem ao amanhecer.");
    }

    #[test]
    fn test_describe_synthesizes_when_absent() {
        let art = obra(None);
        let description = art.describe();

        assert!(!description.is_empty());
        assert!(description.contains("Ana"));
        assert!(description.contains("Óleo"));
    }

    #[test]
    fn test_describe_synthesizes_when_blank() {
        // Whitespace-only descriptions count as absent
        let art = obra(Some("   \n\t"));
        assert!(art.describe().contains("Ana"));
    }

    #[test]
    fn test_size_price_line_fallbacks() {
        let mut art = obra(None);
        assert_eq!(
            art.size_price_line(),
            "Tamanho não informado | Valor sob consulta"
        );

        art.size = Some("60x80cm".to_string());
        art.price = Some("R$ 1.800".to_string());
        assert_eq!(art.size_price_line(), "60x80cm | R$ 1.800");
    }

    #[test]
    fn test_parse_catalog_maps_portuguese_schema() {
        let obras = r#"[{"titulo":"Sol","artista":"Ana","tecnica":"Óleo","valor":"R$ 100"}]"#;
        let data = parse_catalog(obras, "{}").unwrap();

        assert_eq!(data.artworks.len(), 1);
        assert_eq!(data.artworks[0].title, "Sol");
        assert_eq!(data.artworks[0].price.as_deref(), Some("R$ 100"));
        assert_eq!(data.artworks[0].size, None);
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("not json", "{}"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_catalog_rejects_empty_catalog() {
        assert!(matches!(parse_catalog("[]", "{}"), Err(DataError::Empty)));
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let data = load_embedded().unwrap();
        assert!(!data.artworks.is_empty());
        assert!(!data.bios.is_empty());
    }
}
