use crate::error::PipelineError;
use billet_layout::{layout_invoice, InvoiceLayout, LaidOutPage};
use billet_render_core::{paint_page, DocumentRenderer};
use billet_render_lopdf::LopdfRenderer;
use billet_types::{Invoice, PageSize};
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Sum of the unrounded line amounts, in input order.
    pub grand_total: f64,
    /// Number of line items drawn in the table.
    pub rows: usize,
    /// Rows whose baseline fell below the bottom of the page.
    pub overflowed_rows: usize,
    pub bytes_written: u64,
}

impl RenderSummary {
    fn from_page(page: &LaidOutPage, rows: usize, bytes_written: u64) -> Self {
        Self {
            grand_total: page.totals.grand_total,
            rows,
            overflowed_rows: page.overflowed_rows,
            bytes_written,
        }
    }
}

/// Renders invoices onto a single page using a fixed [`InvoiceLayout`].
///
/// Each call owns its renderer and its output; a generator can be shared
/// between threads and reused for any number of invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoiceGenerator {
    layout: InvoiceLayout,
}

impl InvoiceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: InvoiceLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.layout = self.layout.with_page_size(page_size);
        self
    }

    pub fn layout(&self) -> &InvoiceLayout {
        &self.layout
    }

    /// Renders `invoice` into `writer` and hands the writer back once the
    /// document is complete.
    pub fn render_to_writer<W: Write + Seek + Send>(
        &self,
        invoice: &Invoice,
        writer: W,
    ) -> Result<(W, RenderSummary), PipelineError> {
        let page = layout_invoice(invoice, &self.layout)?;
        let (writer, bytes_written) = paint_document(invoice, &page, writer)?;
        Ok((writer, RenderSummary::from_page(&page, invoice.products.len(), bytes_written)))
    }

    /// Renders `invoice` into a new PDF file at `destination`.
    ///
    /// The document is written to a temporary file next to `destination` and
    /// moved into place only once it is complete. On error nothing is left at
    /// `destination` and any existing file there is untouched.
    pub fn render<P: AsRef<Path>>(&self, invoice: &Invoice, destination: P) -> Result<RenderSummary, PipelineError> {
        let destination = destination.as_ref();
        let page = layout_invoice(invoice, &self.layout)?;

        let directory = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if destination.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("destination {} is a directory", destination.display()),
            )
            .into());
        }

        let temp_file = NamedTempFile::new_in(directory)?;
        let bytes_written = persist_written(temp_file, destination, |writer| paint_document(invoice, &page, writer))?;

        let summary = RenderSummary::from_page(&page, invoice.products.len(), bytes_written);
        log::info!(
            "Rendered invoice '{}' to {} ({} rows, {} bytes)",
            invoice.invoice_number,
            destination.display(),
            summary.rows,
            summary.bytes_written
        );
        Ok(summary)
    }
}

fn paint_document<W: Write + Seek + Send>(
    invoice: &Invoice,
    page: &LaidOutPage,
    mut writer: W,
) -> Result<(W, u64), PipelineError> {
    let start = writer.stream_position()?;

    let mut renderer = Box::new(LopdfRenderer::new());
    renderer.begin_document(writer)?;
    renderer.set_title(&invoice.invoice_number);
    paint_page(renderer.as_mut(), page)?;
    let mut writer = renderer.finish()?;

    let end = writer.stream_position()?;
    log::debug!("Finished document for invoice '{}' ({} bytes)", invoice.invoice_number, end - start);
    Ok((writer, end - start))
}

/// Fills `temp_file` through `write`, syncs it and renames it onto
/// `destination`. A failed write, flush or sync drops the temp file, which
/// removes it from disk.
fn persist_written<F>(temp_file: NamedTempFile, destination: &Path, write: F) -> Result<u64, PipelineError>
where
    F: FnOnce(BufWriter<NamedTempFile>) -> Result<(BufWriter<NamedTempFile>, u64), PipelineError>,
{
    let (writer, bytes_written) = write(BufWriter::new(temp_file))?;
    let temp_file = writer.into_inner().map_err(|e| e.into_error())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(destination).map_err(|e| e.error)?;
    Ok(bytes_written)
}

/// Renders `invoice` to `destination` with the default A4 layout.
pub fn render<P: AsRef<Path>>(invoice: &Invoice, destination: P) -> Result<RenderSummary, PipelineError> {
    InvoiceGenerator::default().render(invoice, destination)
}

/// Renders `invoice` into `writer` with the default A4 layout.
pub fn render_to_writer<W: Write + Seek + Send>(
    invoice: &Invoice,
    writer: W,
) -> Result<(W, RenderSummary), PipelineError> {
    InvoiceGenerator::default().render_to_writer(invoice, writer)
}
