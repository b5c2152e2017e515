//! Primary source: BOM weather-station observations.
//!
//! Fetches the per-station JSON product and maps the first (latest)
//! observation onto the unified report. The endpoint base URL comes from
//! config, so it can point at bom.gov.au directly or at an internal proxy
//! mirroring its paths.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::client::FetchClient;
use crate::condition::classify_condition;
use crate::error::WeatherError;
use crate::model::{City, CurrentConditions, WeatherReport};
use crate::source::{SourceId, WeatherSource};

#[derive(Debug, Clone)]
pub struct BomSource {
    base_url: String,
    client: FetchClient,
}

impl BomSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: FetchClient::browser_like(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BomEnvelope {
    observations: BomObservations,
}

#[derive(Debug, Deserialize)]
struct BomObservations {
    data: Vec<BomObservation>,
}

/// Raw observation fields; everything but the air temperature may be null.
#[derive(Debug, Deserialize)]
struct BomObservation {
    air_temp: f64,
    apparent_t: Option<f64>,
    weather: Option<String>,
    rel_hum: Option<u8>,
    wind_dir: Option<String>,
    wind_spd_kmh: Option<f64>,
    press: Option<f64>,
    local_date_time_full: Option<String>,
}

#[async_trait]
impl WeatherSource for BomSource {
    fn id(&self) -> SourceId {
        SourceId::Bom
    }

    async fn fetch_report(&self, city: City) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/fwo/{}.json", self.base_url, city.station_path());

        let envelope: BomEnvelope = self.client.get_json(&url).await?;
        let obs = envelope
            .observations
            .data
            .into_iter()
            .next()
            .ok_or_else(|| {
                WeatherError::Parse("BOM response contained no observations".to_string())
            })?;

        let raw_condition = obs.weather.unwrap_or_else(|| "Clear".to_string());
        let (emoji, condition) = classify_condition(&raw_condition);

        let current = CurrentConditions {
            emoji,
            condition,
            temp: obs.air_temp.round() as i32,
            apparent_temp: obs.apparent_t.map(|t| t.round() as i32),
            humidity: obs.rel_hum,
            wind_speed: obs.wind_spd_kmh.unwrap_or(0.0).round() as i32,
            wind_dir: obs.wind_dir.unwrap_or_else(|| "Calm".to_string()),
            pressure: obs.press,
            time: obs
                .local_date_time_full
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        };

        Ok(WeatherReport {
            city: city.name().to_string(),
            source: SourceId::Bom,
            current,
            today: None,
            success: true,
        })
    }
}
