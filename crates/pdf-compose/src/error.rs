use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Failed to decode PNG: {0}")]
    PngError(String),

    #[error("PDF operation failed: {0}")]
    OperationError(String),
}
