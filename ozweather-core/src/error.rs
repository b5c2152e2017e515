use thiserror::Error;

/// Failure modes shared by every weather source.
///
/// Adapter failures other than [`WeatherError::UnknownCity`] are recoverable:
/// the aggregator converts them into a fallback attempt on the next source.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Unknown city: {0}. Supported cities: melbourne, adelaide.")]
    UnknownCity(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream request failed with status {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),
}
