use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitcatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text is not valid UTF-8")]
    NotUtf8,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("Unknown CSV dialect: {0}")]
    UnknownDialect(String),

    #[error("No transaction with id {0}")]
    UnknownTransaction(usize),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, SplitcatError>;
