//! In-memory report cache with a fixed time-to-live.
//!
//! Bounded by the city enum, so no eviction policy is needed. Staleness is
//! checked lazily on read; a stale entry stays in place until the next
//! successful fetch overwrites it.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::model::{City, WeatherReport};

/// BOM updates roughly every 30 minutes; 10 minutes keeps reads fresh enough.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Debug)]
struct CacheEntry {
    report: WeatherReport,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct ReportCache {
    ttl: Duration,
    entries: Mutex<HashMap<City, CacheEntry>>,
}

impl ReportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached report iff it is younger than the TTL.
    pub fn get(&self, city: City) -> Option<WeatherReport> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries
            .get(&city)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.report.clone())
    }

    /// Unconditionally overwrite the entry, timestamped now.
    pub fn put(&self, city: City, report: WeatherReport) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            city,
            CacheEntry {
                report,
                fetched_at: Instant::now(),
            },
        );
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentConditions;
    use crate::source::SourceId;

    fn sample_report(city: City) -> WeatherReport {
        WeatherReport {
            city: city.name().to_string(),
            source: SourceId::Bom,
            current: CurrentConditions {
                emoji: "☀️",
                condition: "Sunny".to_string(),
                temp: 21,
                apparent_temp: Some(19),
                humidity: Some(40),
                wind_speed: 15,
                wind_dir: "SSW".to_string(),
                pressure: Some(1018.2),
                time: "20260825120000".to_string(),
            },
            today: None,
            success: true,
        }
    }

    #[test]
    fn put_then_get_returns_the_report() {
        let cache = ReportCache::new(Duration::from_secs(60));
        cache.put(City::Melbourne, sample_report(City::Melbourne));

        let cached = cache.get(City::Melbourne).expect("entry should be fresh");
        assert_eq!(cached.city, "Melbourne");
        assert_eq!(cached.current.temp, 21);
    }

    #[test]
    fn get_misses_for_other_cities() {
        let cache = ReportCache::new(Duration::from_secs(60));
        cache.put(City::Melbourne, sample_report(City::Melbourne));

        assert!(cache.get(City::Adelaide).is_none());
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache = ReportCache::new(Duration::ZERO);
        cache.put(City::Melbourne, sample_report(City::Melbourne));

        assert!(cache.get(City::Melbourne).is_none());
    }

    #[test]
    fn put_overwrites_existing_entry() {
        let cache = ReportCache::new(Duration::from_secs(60));
        cache.put(City::Melbourne, sample_report(City::Melbourne));

        let mut updated = sample_report(City::Melbourne);
        updated.current.temp = 30;
        cache.put(City::Melbourne, updated);

        let cached = cache.get(City::Melbourne).expect("entry should be fresh");
        assert_eq!(cached.current.temp, 30);
    }
}
