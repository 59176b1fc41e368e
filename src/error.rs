use reqwest::StatusCode;
use thiserror::Error;

/// Why a request failed. Callers of `HeroService` never see this; the variant
/// only shapes the message written to the log sink.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Http failure response for {url}: {status}")]
    Status { url: String, status: StatusCode },

    #[error("Http failure during parsing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Http failure while encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}
