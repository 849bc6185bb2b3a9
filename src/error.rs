use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("No timeline stored for match {0}")]
    TimelineNotFound(String),

    #[error("Player not found in any stored match: {0}")]
    PlayerNotFound(String),
}
