use pdf_compose::ComposeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to load font: {0}")]
    FontError(String),

    #[error("Failed to render document: {0}")]
    RenderError(String),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}
