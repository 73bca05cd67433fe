#[derive(Debug, thiserror::Error)]
pub enum SawError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

impl From<serde_yaml::Error> for SawError {
    fn from(err: serde_yaml::Error) -> Self {
        SawError::Config(err.to_string())
    }
}
