//! Reference-catalog entry types.
//!
//! These mirror the JSON the card catalog API returns. The matching engine
//! only ever reads them — the catalog owns their contents.

use serde::{Deserialize, Serialize};

/// Top-level response wrapper from the card search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<CatalogCard>,
}

/// One card in the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub set: Option<CardSet>,
    /// Collector number within the set (e.g. "4", "SV049").
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub images: Option<CardImages>,
}

impl CatalogCard {
    pub fn set_name(&self) -> Option<&str> {
        self.set.as_ref().map(|s| s.name.as_str())
    }
}

/// The set a catalog card belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, rename = "printedTotal")]
    pub printed_total: Option<u32>,
    #[serde(default, rename = "releaseDate")]
    pub release_date: Option<String>,
}

/// Authoritative imagery for a catalog card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_search_response() {
        let json = r#"{
            "data": [{
                "id": "base1-4",
                "name": "Charizard",
                "number": "4",
                "rarity": "Rare Holo",
                "set": {"id": "base1", "name": "Base", "series": "Base", "printedTotal": 102},
                "images": {"small": "https://img.example/base1-4.png"}
            }]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        let card = &resp.data[0];
        assert_eq!(card.name, "Charizard");
        assert_eq!(card.set_name(), Some("Base"));
        assert_eq!(card.number.as_deref(), Some("4"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"data": [{"id": "x", "name": "Mew"}]}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data[0].set.is_none());
        assert!(resp.data[0].images.is_none());
    }
}
