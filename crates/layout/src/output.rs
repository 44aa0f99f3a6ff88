//! Output types from the layout pass.

use crate::amounts::InvoiceTotals;
use billet_types::{Point, TextStyle};

/// A run of text anchored at its baseline origin in PDF user space.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    pub position: Point,
    pub text: String,
    pub style: TextStyle,
}

/// A fully laid out invoice page, ready for a drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub width: f32,
    pub height: f32,
    /// Drawing order matches the top-down layout order.
    pub elements: Vec<PositionedText>,
    pub totals: InvoiceTotals,
    /// Item rows whose baseline fell below the bottom edge. They are still
    /// emitted but are not visible on the page.
    pub overflowed_rows: usize,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.text.as_str())
    }

    /// All elements sharing the given baseline, left to right.
    pub fn row_at(&self, y: f32) -> Vec<&PositionedText> {
        let mut row: Vec<_> = self
            .elements
            .iter()
            .filter(|e| (e.position.y - y).abs() < 0.01)
            .collect();
        row.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        row
    }

    pub fn find(&self, text: &str) -> Option<&PositionedText> {
        self.elements.iter().find(|e| e.text == text)
    }
}
