use thiserror::Error;

/// Failures surfaced by the platform-free motion logic.
///
/// None of these reach the page visitor; the web binding logs them and falls
/// back to defaults.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("invalid motion config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("invalid motion config: {0}")]
    InvalidConfig(String),

    #[error("unknown easing curve `{0}`")]
    UnknownEasing(String),
}

pub type Result<T> = std::result::Result<T, MotionError>;
