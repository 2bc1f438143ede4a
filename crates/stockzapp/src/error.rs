use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockzError {
    /// Form input rejected; carries the messages in display order.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Row not found: {0}")]
    UnknownRow(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockzError>;
