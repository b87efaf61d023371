use thiserror::Error;

#[derive(Error, Debug)]
pub enum StopwatchError {
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
