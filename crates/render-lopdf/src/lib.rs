//! Invoice PDF renderer using lopdf.
//!
//! Text is drawn with the standard Type1 Helvetica faces, which every PDF
//! viewer provides, so no font data is embedded in the output.

mod helpers;
mod renderer;
mod writer;

pub use helpers::PageContext;
pub use renderer::LopdfRenderer;
pub use writer::PdfDocumentWriter;
