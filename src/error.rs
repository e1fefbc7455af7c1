use thiserror::Error;

pub type GuideResult<T> = Result<T, GuideError>;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid listener: {0}")]
    InvalidListener(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
