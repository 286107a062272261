use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("motion sensor permission denied")]
    PermissionDenied,
    #[error("motion sensor unavailable: {0}")]
    SensorUnavailable(String),
    #[error("roll reporting unavailable: {0}")]
    ReportingUnavailable(String),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
    #[error("failed to load asset {0}")]
    AssetLoadFailure(String),
}
