use billet::{load_invoice, InvoiceGenerator, PageSize, PipelineError};
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Render an invoice JSON file into a single-page PDF.
#[derive(Parser, Debug)]
#[command(name = "billet", version, about, long_about = None)]
struct Args {
    /// Invoice data file (JSON)
    data: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Page size: a4, letter or legal
    #[arg(long, default_value = "a4")]
    page_size: PageSize,
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "billet=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    log::info!("Loading invoice data from {}", args.data.display());
    let invoice = load_invoice(&args.data)?;

    let summary = InvoiceGenerator::new()
        .with_page_size(args.page_size)
        .render(&invoice, &args.output)?;

    if summary.overflowed_rows > 0 {
        eprintln!(
            "Warning: {} of {} rows fell below the bottom of the page",
            summary.overflowed_rows, summary.rows
        );
    }
    println!(
        "Generated {} (grand total {:.2})",
        args.output.display(),
        summary.grand_total
    );
    Ok(())
}
