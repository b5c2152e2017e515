use serde::Serialize;

use crate::error::WeatherError;
use crate::source::SourceId;

/// Supported cities, fixed at compile time.
///
/// Each city carries the static identifiers the sources need: a BOM
/// product/station path for the observation feed and coordinates for the
/// forecast API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Melbourne,
    Adelaide,
}

impl City {
    pub const fn all() -> &'static [City] {
        &[City::Melbourne, City::Adelaide]
    }

    /// Lowercase key used in URLs and CLI arguments.
    pub fn key(&self) -> &'static str {
        match self {
            City::Melbourne => "melbourne",
            City::Adelaide => "adelaide",
        }
    }

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            City::Melbourne => "Melbourne",
            City::Adelaide => "Adelaide",
        }
    }

    /// BOM observation product path fragment (product id / station file).
    pub fn station_path(&self) -> &'static str {
        match self {
            City::Melbourne => "IDV60901/IDV60901.95936",
            City::Adelaide => "IDS60901/IDS60901.94675",
        }
    }

    /// Coordinates for the forecast API (latitude, longitude).
    pub fn coords(&self) -> (f64, f64) {
        match self {
            City::Melbourne => (-37.8136, 144.9631),
            City::Adelaide => (-34.9285, 138.6007),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for City {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "melbourne" => Ok(City::Melbourne),
            "adelaide" => Ok(City::Adelaide),
            _ => Err(WeatherError::UnknownCity(value.to_string())),
        }
    }
}

/// Current-conditions block of the unified report.
///
/// BOM observations populate every field; Open-Meteo leaves the fields the
/// forecast API does not provide (`apparent_temp`, `humidity`, `pressure`)
/// absent, which also distinguishes the two sources on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub emoji: &'static str,
    pub condition: String,
    /// Rounded, °C.
    pub temp: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparent_temp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<u8>,
    /// Rounded, km/h.
    pub wind_speed: i32,
    pub wind_dir: String,
    /// hPa.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Observation time as reported by the source.
    pub time: String,
}

/// Today's min/max/precipitation summary, forecast sources only.
#[derive(Debug, Clone, Serialize)]
pub struct TodayOutlook {
    pub min: i32,
    pub max: i32,
    /// Precipitation sum, mm.
    pub precipitation: f64,
}

/// Normalized weather report, identical in shape regardless of source.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub source: SourceId,
    pub current: CurrentConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<TodayOutlook>,
    pub success: bool,
}

/// Per-city failure after every source has been exhausted.
#[derive(Debug, Clone, Serialize)]
pub struct FailedReport {
    pub city: String,
    pub error: String,
    pub success: bool,
}

impl FailedReport {
    pub fn new(city: City, error: String) -> Self {
        Self {
            city: city.name().to_string(),
            error,
            success: false,
        }
    }
}

/// Outcome of one city aggregation: either a populated report or a failure
/// carrying the last error message, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CityReport {
    Ready(WeatherReport),
    Failed(FailedReport),
}

impl CityReport {
    pub fn is_success(&self) -> bool {
        matches!(self, CityReport::Ready(_))
    }

    pub fn city(&self) -> &str {
        match self {
            CityReport::Ready(report) => &report.city,
            CityReport::Failed(failed) => &failed.city,
        }
    }
}
