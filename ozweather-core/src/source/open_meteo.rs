//! Secondary source: the Open-Meteo forecast API, addressed by coordinates.
//!
//! Populates only what the forecast provides; humidity, pressure, and
//! apparent temperature stay absent so reports remain distinguishable from
//! BOM observations.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::FetchClient;
use crate::condition::{code_to_condition, compass_from_degrees};
use crate::error::WeatherError;
use crate::model::{City, CurrentConditions, TodayOutlook, WeatherReport};
use crate::source::{SourceId, WeatherSource};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    base_url: String,
    client: FetchClient,
}

impl OpenMeteoSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: FetchClient::new(),
        }
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct MeteoResponse {
    current_weather: MeteoCurrent,
    daily: Option<MeteoDaily>,
}

#[derive(Debug, Deserialize)]
struct MeteoCurrent {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    weathercode: u8,
    time: String,
}

#[derive(Debug, Deserialize)]
struct MeteoDaily {
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
}

impl MeteoDaily {
    /// First element of each daily array; `None` when the arrays are empty.
    fn today(&self) -> Option<TodayOutlook> {
        let max = self.temperature_2m_max.first()?;
        let min = self.temperature_2m_min.first()?;
        let precipitation = self.precipitation_sum.first()?;

        Some(TodayOutlook {
            min: min.round() as i32,
            max: max.round() as i32,
            precipitation: *precipitation,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    fn id(&self) -> SourceId {
        SourceId::OpenMeteo
    }

    async fn fetch_report(&self, city: City) -> Result<WeatherReport, WeatherError> {
        let (lat, lon) = city.coords();
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&daily=temperature_2m_max,temperature_2m_min,weathercode,precipitation_sum&timezone=auto",
            self.base_url, lat, lon
        );

        let parsed: MeteoResponse = self.client.get_json(&url).await?;
        let current = parsed.current_weather;

        let (condition, emoji) = code_to_condition(current.weathercode);
        let wind_dir = compass_from_degrees(current.winddirection);

        Ok(WeatherReport {
            city: city.name().to_string(),
            source: SourceId::OpenMeteo,
            current: CurrentConditions {
                emoji,
                condition: condition.to_string(),
                temp: current.temperature.round() as i32,
                apparent_temp: None,
                humidity: None,
                wind_speed: current.windspeed.round() as i32,
                wind_dir: wind_dir.to_string(),
                pressure: None,
                time: current.time,
            },
            today: parsed.daily.as_ref().and_then(MeteoDaily::today),
            success: true,
        })
    }
}
