use clap::Parser;

use ozweather_core::{City, CityReport, Config, WeatherReport, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "ozweather", version, about = "Weather for Australian cities")]
pub struct Cli {
    /// City keys to report on, e.g. "melbourne" or "adelaide".
    /// Defaults to every supported city.
    pub cities: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let cities: Vec<City> = if self.cities.is_empty() {
            City::all().to_vec()
        } else {
            self.cities
                .iter()
                .map(|key| City::try_from(key.as_str()))
                .collect::<Result<_, _>>()?
        };

        let config = Config::from_env()?;
        let service = WeatherService::new(&config);

        println!("Fetching weather data...\n");
        let reports = service.reports(&cities).await;

        for report in &reports {
            match report {
                CityReport::Ready(report) => print_report(report),
                CityReport::Failed(failed) => {
                    println!("**{}**: ⚠️ {}\n", failed.city, failed.error);
                }
            }
        }

        Ok(())
    }
}

fn print_report(report: &WeatherReport) {
    let current = &report.current;

    println!("**{}**", report.city);

    let feels_like = current
        .apparent_temp
        .map(|t| format!(" (feels like {t}°C)"))
        .unwrap_or_default();
    println!("{} {}, {}°C{}", current.emoji, current.condition, current.temp, feels_like);

    if let Some(today) = &report.today {
        let rain = if today.precipitation > 0.0 {
            format!(" • {}mm rain", today.precipitation)
        } else {
            String::new()
        };
        println!("Today: {}°C–{}°C{}", today.min, today.max, rain);
    }

    match current.humidity {
        Some(humidity) => println!(
            "Humidity {humidity}% • Wind {} {} km/h",
            current.wind_dir, current.wind_speed
        ),
        None => println!("Wind: {} {} km/h", current.wind_dir, current.wind_speed),
    }

    println!("_Source: {}_\n", report.source);
}
