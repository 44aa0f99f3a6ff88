//! Tax and amount arithmetic for invoice lines.
//!
//! All values stay in `f64` until display. The grand total is the running sum
//! of unrounded line amounts, so it can differ from the sum of the two-decimal
//! figures printed in the Amount column.

use billet_types::LineItem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAmount {
    /// `quantity * rate`
    pub base: f64,
    /// `base * tax% / 100`
    pub tax: f64,
    /// `base + tax`
    pub amount: f64,
}

impl LineAmount {
    pub fn compute(item: &LineItem) -> Self {
        let base = f64::from(item.quantity) * item.rate_per_unit;
        let tax = base * item.tax_percentage / 100.0;
        Self {
            base,
            tax,
            amount: base + tax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceTotals {
    pub lines: Vec<LineAmount>,
    pub grand_total: f64,
}

impl InvoiceTotals {
    pub fn compute(products: &[LineItem]) -> Self {
        let mut totals = Self::default();
        for item in products {
            totals.push(LineAmount::compute(item));
        }
        totals
    }

    /// Appends a line and folds its amount into the grand total.
    pub fn push(&mut self, line: LineAmount) {
        self.grand_total += line.amount;
        self.lines.push(line);
    }
}

pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}
