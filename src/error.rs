use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayStationError {
    #[error("Invalid coin: {0}")]
    IllegalCoin(u32),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Event error: {0}")]
    EventError(String),
}

pub type Result<T> = std::result::Result<T, PayStationError>;
