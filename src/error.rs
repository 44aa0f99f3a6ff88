use billet_layout::{DateError, LayoutError};
use billet_render_core::RenderError;
use thiserror::Error;

/// Errors produced while turning an invoice into a PDF file.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read invoice data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DateError> for PipelineError {
    fn from(e: DateError) -> Self {
        PipelineError::Layout(LayoutError::Date(e))
    }
}

impl PipelineError {
    /// The date error behind this failure, if the invoice date could not be reformatted.
    pub fn date_error(&self) -> Option<&DateError> {
        match self {
            PipelineError::Layout(LayoutError::Date(e)) => Some(e),
            _ => None,
        }
    }

    pub fn is_malformed_date(&self) -> bool {
        self.date_error().is_some()
    }

    /// True when the failure came from the output sink rather than the invoice.
    pub fn is_io(&self) -> bool {
        matches!(self, PipelineError::Io(_) | PipelineError::Render(RenderError::Io(_)))
    }
}
