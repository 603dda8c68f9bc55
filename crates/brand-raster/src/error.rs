use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to read image: {0}")]
    ReadError(String),

    #[error("Failed to write image: {0}")]
    WriteError(String),

    #[error("Failed to parse font: {0}")]
    FontError(String),
}
