#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use billet::{Invoice, InvoiceGenerator, PipelineError, RenderSummary};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Load a PDF written to disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Every string drawn on the first page, in drawing order
    pub fn strings(&self) -> Vec<String> {
        pdf_assertions::drawn_text(&self.doc, 1).into_iter().map(|t| t.text).collect()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render an invoice in memory with the default layout
pub fn generate_pdf(invoice: &Invoice) -> Result<(GeneratedPdf, RenderSummary), PipelineError> {
    generate_pdf_with(&InvoiceGenerator::default(), invoice)
}

/// Render an invoice in memory with a configured generator
pub fn generate_pdf_with(
    generator: &InvoiceGenerator,
    invoice: &Invoice,
) -> Result<(GeneratedPdf, RenderSummary), PipelineError> {
    let (cursor, summary) = generator.render_to_writer(invoice, Cursor::new(Vec::new()))?;
    let pdf = GeneratedPdf::from_bytes(cursor.into_inner())
        .map_err(|e| PipelineError::Io(std::io::Error::other(e.to_string())))?;
    Ok((pdf, summary))
}
