//! Pure mapping functions normalizing raw weather fields.
//!
//! Three lookups live here: WMO weather codes (Open-Meteo), compass labels
//! from wind-direction degrees, and keyword classification of the free-text
//! condition strings BOM observations carry.

/// 16-point compass rose, clockwise from North.
const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Keyword groups checked in order; the first group with a matching keyword
/// wins, so "Clearing shower" classifies as clear rather than rain.
const CONDITION_GROUPS: &[(&[&str], &str)] = &[
    (&["clear", "sunny"], "☀️"),
    (&["cloud"], "☁️"),
    (&["rain", "shower"], "🌧️"),
    (&["storm"], "⛈️"),
    (&["fog"], "🌫️"),
    (&["snow"], "🌨️"),
];

/// Map a WMO weather code to a (description, emoji) pair.
///
/// Total: codes outside the table map to the "Unknown" default.
pub fn code_to_condition(code: u8) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 => ("Foggy", "🌫️"),
        48 => ("Depositing rime fog", "🌫️"),
        51 => ("Light drizzle", "🌦️"),
        53 => ("Moderate drizzle", "🌦️"),
        55 => ("Dense drizzle", "🌧️"),
        61 => ("Slight rain", "🌧️"),
        63 => ("Moderate rain", "🌧️"),
        65 => ("Heavy rain", "🌧️"),
        71 => ("Slight snow", "🌨️"),
        73 => ("Moderate snow", "🌨️"),
        75 => ("Heavy snow", "🌨️"),
        77 => ("Snow grains", "🌨️"),
        80 => ("Slight rain showers", "🌦️"),
        81 => ("Moderate rain showers", "🌧️"),
        82 => ("Violent rain showers", "⛈️"),
        85 => ("Slight snow showers", "🌨️"),
        86 => ("Heavy snow showers", "🌨️"),
        95 => ("Thunderstorm", "⛈️"),
        96 => ("Thunderstorm with slight hail", "⛈️"),
        99 => ("Thunderstorm with heavy hail", "⛈️"),
        _ => ("Unknown", "🌡️"),
    }
}

/// Convert wind-direction degrees to a 16-point compass label.
///
/// Degrees outside 0..360 (including negatives) wrap around.
pub fn compass_from_degrees(degrees: f64) -> &'static str {
    let index = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS[index]
}

/// Classify a free-text condition string into an (emoji, text) pair.
///
/// Matching is case-insensitive and the original text is preserved; an empty
/// input falls back to "Clear" with the generic thermometer emoji.
pub fn classify_condition(text: &str) -> (&'static str, String) {
    let lower = text.to_lowercase();
    for (keywords, emoji) in CONDITION_GROUPS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return (emoji, text.to_string());
        }
    }

    let text = if text.is_empty() { "Clear" } else { text };
    ("🌡️", text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_documented_pairs() {
        assert_eq!(code_to_condition(0), ("Clear sky", "☀️"));
        assert_eq!(code_to_condition(2), ("Partly cloudy", "⛅"));
        assert_eq!(code_to_condition(63), ("Moderate rain", "🌧️"));
        assert_eq!(code_to_condition(95), ("Thunderstorm", "⛈️"));
        assert_eq!(code_to_condition(99), ("Thunderstorm with heavy hail", "⛈️"));
    }

    #[test]
    fn unknown_codes_map_to_default_pair() {
        for code in [4, 42, 100, 255] {
            assert_eq!(code_to_condition(code), ("Unknown", "🌡️"));
        }
    }

    #[test]
    fn compass_cardinal_points() {
        assert_eq!(compass_from_degrees(0.0), "N");
        assert_eq!(compass_from_degrees(90.0), "E");
        assert_eq!(compass_from_degrees(180.0), "S");
        assert_eq!(compass_from_degrees(270.0), "W");
    }

    #[test]
    fn compass_wraps_at_360_and_beyond() {
        assert_eq!(compass_from_degrees(360.0), "N");
        assert_eq!(compass_from_degrees(365.0), "N");
        assert_eq!(compass_from_degrees(720.0), "N");
    }

    #[test]
    fn compass_handles_negative_degrees() {
        assert_eq!(compass_from_degrees(-22.5), "NNW");
        assert_eq!(compass_from_degrees(-90.0), "W");
    }

    #[test]
    fn compass_rounds_to_nearest_point() {
        // 202 / 22.5 ≈ 8.98, rounds to index 9.
        assert_eq!(compass_from_degrees(202.0), "SSW");
        assert_eq!(compass_from_degrees(202.5), "SSW");
    }

    #[test]
    fn classify_matches_cloud_group_case_insensitively() {
        assert_eq!(classify_condition("Partly Cloudy"), ("☁️", "Partly Cloudy".to_string()));
        assert_eq!(classify_condition("PARTLY CLOUDY"), ("☁️", "PARTLY CLOUDY".to_string()));
    }

    #[test]
    fn classify_checks_clear_before_rain() {
        // "Clearing shower" contains keywords from two groups; the earlier
        // group must win.
        let (emoji, _) = classify_condition("Clearing shower");
        assert_eq!(emoji, "☀️");
    }

    #[test]
    fn classify_covers_remaining_groups() {
        assert_eq!(classify_condition("Light rain").0, "🌧️");
        assert_eq!(classify_condition("Thunderstorms").0, "⛈️");
        assert_eq!(classify_condition("Fog patches").0, "🌫️");
        assert_eq!(classify_condition("Snowfall").0, "🌨️");
    }

    #[test]
    fn classify_checks_rain_before_snow() {
        // "shower" sits in the rain group, which precedes snow.
        assert_eq!(classify_condition("Snow showers").0, "🌧️");
    }

    #[test]
    fn classify_keeps_unmatched_text_with_default_emoji() {
        assert_eq!(classify_condition("Haze"), ("🌡️", "Haze".to_string()));
    }

    #[test]
    fn classify_empty_input_defaults_to_clear() {
        assert_eq!(classify_condition(""), ("🌡️", "Clear".to_string()));
    }
}
