use thiserror::Error;

#[derive(Debug, Error)]
pub enum LuachError {
    #[error("year must be between 5000 and 6000, got {year}")]
    InvalidRange { year: i32 },

    #[error("unknown Hebrew month name: {0}")]
    UnknownMonth(String),

    #[error("calendar conversion failed: {0}")]
    Calendar(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("home directory not found: set HOME environment variable or pass --config")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LuachError>;
