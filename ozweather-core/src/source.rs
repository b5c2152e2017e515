use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{City, WeatherReport};
use crate::source::{bom::BomSource, open_meteo::OpenMeteoSource};

pub mod bom;
pub mod open_meteo;

/// Tag identifying which upstream a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceId {
    #[serde(rename = "BOM")]
    Bom,
    #[serde(rename = "Open-Meteo")]
    OpenMeteo,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Bom => "BOM",
            SourceId::OpenMeteo => "Open-Meteo",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One upstream capable of producing a unified report for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    fn id(&self) -> SourceId;

    async fn fetch_report(&self, city: City) -> Result<WeatherReport, WeatherError>;
}

/// Build the ordered fallback chain from config: BOM observations first when
/// an endpoint is configured, Open-Meteo always last. An unconfigured BOM
/// endpoint means the primary is skipped entirely, not attempted-and-failed.
pub fn source_chain(config: &Config) -> Vec<Box<dyn WeatherSource>> {
    let mut sources: Vec<Box<dyn WeatherSource>> = Vec::new();

    if let Some(base_url) = &config.bom_base_url {
        sources.push(Box::new(BomSource::new(base_url.clone())));
    }
    sources.push(Box::new(OpenMeteoSource::new()));

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_id_display_matches_wire_tag() {
        assert_eq!(SourceId::Bom.to_string(), "BOM");
        assert_eq!(SourceId::OpenMeteo.to_string(), "Open-Meteo");
    }

    #[test]
    fn source_id_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(SourceId::Bom).expect("serialize"),
            serde_json::json!("BOM")
        );
        assert_eq!(
            serde_json::to_value(SourceId::OpenMeteo).expect("serialize"),
            serde_json::json!("Open-Meteo")
        );
    }

    #[test]
    fn chain_without_bom_endpoint_is_fallback_only() {
        let config = Config::default();
        let chain = source_chain(&config);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].id(), SourceId::OpenMeteo);
    }

    #[test]
    fn chain_with_bom_endpoint_tries_bom_first() {
        let config = Config {
            bom_base_url: Some("http://bom.example".to_string()),
            ..Config::default()
        };
        let chain = source_chain(&config);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].id(), SourceId::Bom);
        assert_eq!(chain[1].id(), SourceId::OpenMeteo);
    }
}
