//! The aggregator: cache check, ordered fallback over sources, fan-out for
//! multi-city requests.

use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::ReportCache;
use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{City, CityReport, FailedReport};
use crate::source::{WeatherSource, source_chain};

#[derive(Debug)]
pub struct WeatherService {
    sources: Vec<Box<dyn WeatherSource>>,
    cache: ReportCache,
}

impl WeatherService {
    pub fn new(config: &Config) -> Self {
        Self::with_sources(source_chain(config), config.cache_ttl)
    }

    /// Construct with an explicit source chain; used by tests and anywhere
    /// the default config-driven chain is not wanted.
    pub fn with_sources(sources: Vec<Box<dyn WeatherSource>>, cache_ttl: Duration) -> Self {
        Self {
            sources,
            cache: ReportCache::new(cache_ttl),
        }
    }

    /// Aggregate one city: serve from cache when fresh, otherwise walk the
    /// source chain in order until one succeeds. Only successful reports are
    /// cached; a total failure carries the last source's error message.
    pub async fn city_report(&self, city: City) -> CityReport {
        if let Some(report) = self.cache.get(city) {
            debug!(city = city.key(), "serving cached report");
            return CityReport::Ready(report);
        }

        let mut last_error: Option<WeatherError> = None;
        for source in &self.sources {
            match source.fetch_report(city).await {
                Ok(report) => {
                    self.cache.put(city, report.clone());
                    return CityReport::Ready(report);
                }
                Err(err) => {
                    warn!(
                        city = city.key(),
                        source = %source.id(),
                        error = %err,
                        "source failed, trying next"
                    );
                    last_error = Some(err);
                }
            }
        }

        let message = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "No weather sources configured".to_string());
        CityReport::Failed(FailedReport::new(city, message))
    }

    /// Fetch several cities concurrently. Results come back in request
    /// order, whatever order the fetches complete in.
    pub async fn reports(&self, cities: &[City]) -> Vec<CityReport> {
        join_all(cities.iter().map(|&city| self.city_report(city))).await
    }

    /// Resolve a string key and aggregate that city. Unknown keys fail here,
    /// before any source is consulted.
    pub async fn report_for_key(&self, key: &str) -> Result<CityReport, WeatherError> {
        let city = City::try_from(key)?;
        Ok(self.city_report(city).await)
    }
}
