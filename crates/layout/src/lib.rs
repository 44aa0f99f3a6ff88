//! Invoice layout for a single fixed-coordinate page.
//!
//! The layout pass turns an [`Invoice`](billet_types::Invoice) into a list of
//! [`PositionedText`] entries in PDF user space. It knows nothing about the
//! drawing backend, so everything here can be tested without producing a PDF.

use thiserror::Error;

pub mod amounts;
pub mod config;
pub mod date;
pub mod engine;
pub mod output;

pub use self::amounts::{format_money, format_percentage, InvoiceTotals, LineAmount};
pub use self::config::{InvoiceLayout, LayoutStyles, PartyLabels, TableColumn};
pub use self::date::{format_date, DateError};
pub use self::engine::layout_invoice;
pub use self::output::{LaidOutPage, PositionedText};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error(transparent)]
    Date(#[from] DateError),
}
