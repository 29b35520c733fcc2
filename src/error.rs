use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to bind chart engine to surface: {0}")]
    EngineBind(String),

    #[error("invalid option document: {0}")]
    InvalidOption(String),
}
