//! Typed views of the two HSReplay payloads.
//!
//! The fetcher never uses these; they back the tier list only.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A named deck strategy as listed by `/api/v1/archetypes/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Archetype {
    pub id: i64,
    pub name: String,
    pub player_class: u32,
    /// Upper-case class name, e.g. "DEMONHUNTER".
    pub player_class_name: String,
    /// Site-relative archetype page, e.g. "/archetypes/123/aggro-druid".
    pub url: String,
    #[serde(default)]
    pub standard_ccp_signature_core: Option<SignatureCore>,
    #[serde(default)]
    pub wild_ccp_signature_core: Option<SignatureCore>,
}

/// Card ids that define an archetype in one format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignatureCore {
    pub as_of: String,
    pub format: u32,
    pub components: Vec<i64>,
}

/// Body of the `archetype_popularity_distribution_stats_v2` query.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckPopularityStats {
    pub render_as: String,
    pub series: Series,
    /// Timestamp of the aggregation run.
    pub as_of: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    /// Per-class metadata. Key order is the class order used for display.
    pub metadata: Map<String, Value>,
    /// Deck stats keyed by class name.
    pub data: foldhash::HashMap<String, Vec<DeckStats>>,
}

/// Aggregated results for one archetype within its class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeckStats {
    pub archetype_id: i64,
    pub total_games: u64,
    pub pct_of_class: f64,
    pub pct_of_total: f64,
    #[serde(deserialize_with = "deserialize_win_rate")]
    pub win_rate: f64,
}

/// Accepts `53.2` as well as `"53.2"`. Strings that are not numbers become NaN.
fn deserialize_win_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Proxy {
        Number(f64),
        Text(String),
    }

    Ok(match Proxy::deserialize(deserializer)? {
        Proxy::Number(rate) => rate,
        Proxy::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
    })
}

pub fn parse_archetypes(body: &[u8]) -> Result<Vec<Archetype>> {
    serde_json::from_slice(body).context("failed to parse archetype list")
}

pub fn parse_deck_popularity_stats(body: &[u8]) -> Result<DeckPopularityStats> {
    serde_json::from_slice(body).context("failed to parse deck popularity stats")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archetype_with_null_cores() {
        let body = br#"[{
            "id": 7,
            "name": "Aggro Druid",
            "player_class": 2,
            "player_class_name": "DRUID",
            "url": "/archetypes/7/aggro-druid",
            "standard_ccp_signature_core": {"as_of": "2024-01-01", "format": 2, "components": [1, 2]},
            "wild_ccp_signature_core": null
        }]"#;

        let archetypes = parse_archetypes(body).unwrap();
        assert_eq!(archetypes.len(), 1);
        assert_eq!(archetypes[0].name, "Aggro Druid");
        assert_eq!(
            archetypes[0]
                .standard_ccp_signature_core
                .as_ref()
                .map(|core| core.components.clone()),
            Some(vec![1, 2])
        );
        assert!(archetypes[0].wild_ccp_signature_core.is_none());
    }

    #[test]
    fn test_win_rate_number_or_string() {
        let body = br#"{
            "render_as": "table",
            "as_of": "2024-01-01T00:00:00",
            "series": {
                "metadata": {"MAGE": {}},
                "data": {"MAGE": [
                    {"archetype_id": 1, "total_games": 10, "pct_of_class": 1.0, "pct_of_total": 0.5, "win_rate": 51.5},
                    {"archetype_id": 2, "total_games": 10, "pct_of_class": 1.0, "pct_of_total": 0.5, "win_rate": "48.25"},
                    {"archetype_id": 3, "total_games": 10, "pct_of_class": 1.0, "pct_of_total": 0.5, "win_rate": "n/a"}
                ]}
            }
        }"#;

        let stats = parse_deck_popularity_stats(body).unwrap();
        let mage = &stats.series.data["MAGE"];
        assert_eq!(mage[0].win_rate, 51.5);
        assert_eq!(mage[1].win_rate, 48.25);
        assert!(mage[2].win_rate.is_nan());
    }

    #[test]
    fn test_metadata_keeps_class_order() {
        let body = br#"{
            "render_as": "table",
            "as_of": "now",
            "series": {
                "metadata": {"WARRIOR": {}, "DRUID": {}, "MAGE": {}},
                "data": {}
            }
        }"#;

        let stats = parse_deck_popularity_stats(body).unwrap();
        let classes: Vec<&str> = stats.series.metadata.keys().map(String::as_str).collect();
        assert_eq!(classes, ["WARRIOR", "DRUID", "MAGE"]);
    }

    #[test]
    fn test_parse_error_has_context() {
        let err = parse_archetypes(b"<html>").unwrap_err();
        assert!(err.to_string().contains("archetype list"));
    }
}
