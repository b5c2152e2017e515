use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::Value;

use ozweather_core::{City, CityReport, WeatherService};

#[derive(Clone)]
pub struct AppState {
    service: Arc<WeatherService>,
}

pub fn create_router(service: Arc<WeatherService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/", get(describe))
        .route("/weather/both", get(weather_both))
        .route("/weather/{city}", get(weather_city))
        .with_state(state)
}

#[derive(Serialize)]
struct Descriptor {
    service: &'static str,
    endpoints: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

async fn describe() -> Json<Descriptor> {
    let mut endpoints: Vec<String> = City::all()
        .iter()
        .map(|city| format!("/weather/{}", city.key()))
        .collect();
    endpoints.push("/weather/both".to_string());

    Json(Descriptor {
        service: "ozweather proxy",
        endpoints,
    })
}

async fn weather_city(State(state): State<AppState>, Path(city): Path<String>) -> Response {
    match state.service.report_for_key(&city).await {
        Ok(CityReport::Ready(report)) => Json(report).into_response(),
        Ok(CityReport::Failed(failed)) => error_response(StatusCode::BAD_REQUEST, failed.error),
        Err(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
    }
}

async fn weather_both(State(state): State<AppState>) -> Response {
    let reports = state.service.reports(City::all()).await;

    let mut body = serde_json::Map::new();
    for (city, report) in City::all().iter().zip(reports) {
        match report {
            CityReport::Ready(report) => {
                let value = serde_json::to_value(&report).unwrap_or(Value::Null);
                body.insert(city.key().to_string(), value);
            }
            CityReport::Failed(failed) => {
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, failed.error);
            }
        }
    }

    Json(Value::Object(body)).into_response()
}
