//! Renders invoices into single-page PDF documents.
//!
//! The heavy lifting lives in the member crates: `billet-layout` places
//! every piece of text, `billet-render-lopdf` writes the PDF. This crate
//! ties them together and owns the output file.

pub mod error;
pub mod generator;

pub use billet_layout::{format_date, DateError, InvoiceLayout, LayoutError};
pub use billet_render_core::{DocumentRenderer, RenderError};
pub use billet_types::{Invoice, LineItem, PageSize, Party};
pub use error::PipelineError;
pub use generator::{render, render_to_writer, InvoiceGenerator, RenderSummary};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads an invoice from a JSON file.
pub fn load_invoice<P: AsRef<Path>>(path: P) -> Result<Invoice, PipelineError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
