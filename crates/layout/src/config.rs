use crate::LayoutError;
use billet_types::{PageSize, TextStyle};

/// A column of the item table: its header label and left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub header: &'static str,
    pub x: f32,
}

impl TableColumn {
    pub const fn new(header: &'static str, x: f32) -> Self {
        Self { header, x }
    }
}

/// Label prefixes for the four party detail rows, drawn in this order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartyLabels {
    pub name: &'static str,
    pub address: &'static str,
    pub tax_id: &'static str,
    pub phone: &'static str,
}

impl Default for PartyLabels {
    fn default() -> Self {
        Self {
            name: "Name",
            address: "Address",
            tax_id: "GST Number",
            phone: "Phone Number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyles {
    /// Invoice number and date lines.
    pub header: TextStyle,
    /// "Seller Details" / "Buyer Details".
    pub section: TextStyle,
    pub detail: TextStyle,
    pub table_header: TextStyle,
    pub table_row: TextStyle,
    pub grand_total: TextStyle,
}

impl Default for LayoutStyles {
    fn default() -> Self {
        Self {
            header: TextStyle::bold(12.0),
            section: TextStyle::bold(10.0),
            detail: TextStyle::regular(9.0),
            table_header: TextStyle::bold(9.0),
            table_row: TextStyle::regular(9.0),
            grand_total: TextStyle::bold(10.0),
        }
    }
}

/// The fixed-coordinate invoice layout.
///
/// All distances are in points. The cursor starts `top_margin` below the top
/// edge at `left` and only ever moves down; every `*_step` / `*_gap` is the
/// amount it descends after the named block.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    pub page_size: PageSize,
    pub left: f32,
    pub top_margin: f32,

    pub number_label: &'static str,
    pub date_label: &'static str,
    pub seller_heading: &'static str,
    pub buyer_heading: &'static str,
    pub party_labels: PartyLabels,
    pub grand_total_label: &'static str,

    /// After the invoice number line.
    pub number_step: f32,
    /// After the invoice date line.
    pub date_gap: f32,
    /// After the section headings.
    pub heading_step: f32,
    /// Between party detail rows.
    pub detail_step: f32,
    /// After the last party detail row, replacing `detail_step`.
    pub details_gap: f32,
    /// After the table header and after each item row.
    pub row_step: f32,
    /// Between the last item row and the grand total line.
    pub total_gap: f32,

    /// x of the buyer column; the seller column sits at `left`.
    pub buyer_x: f32,
    /// Index, Product, Qty, Rate, Tax %, Amount.
    pub columns: [TableColumn; 6],
    pub grand_total_label_x: f32,
    pub grand_total_value_x: f32,

    pub styles: LayoutStyles,
}

impl Default for InvoiceLayout {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            left: 50.0,
            top_margin: 50.0,

            number_label: "Invoice Number",
            date_label: "Invoice Date",
            seller_heading: "Seller Details",
            buyer_heading: "Buyer Details",
            party_labels: PartyLabels::default(),
            grand_total_label: "Grand Total:",

            number_step: 20.0,
            date_gap: 40.0,
            heading_step: 15.0,
            detail_step: 15.0,
            details_gap: 30.0,
            row_step: 15.0,
            total_gap: 20.0,

            buyer_x: 300.0,
            columns: [
                TableColumn::new("S.No", 50.0),
                TableColumn::new("Product", 100.0),
                TableColumn::new("Qty", 250.0),
                TableColumn::new("Rate", 300.0),
                TableColumn::new("Tax %", 360.0),
                TableColumn::new("Amount", 430.0),
            ],
            grand_total_label_x: 300.0,
            grand_total_value_x: 430.0,

            styles: LayoutStyles::default(),
        }
    }
}

impl InvoiceLayout {
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks that the page has a usable size and that the origin and every
    /// fixed column lie on it.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size.dimensions_pt();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size {}x{} must be finite and positive",
                width, height
            )));
        }
        if !(0.0..height).contains(&self.top_margin) {
            return Err(LayoutError::InvalidGeometry(format!(
                "top margin {} lies outside page height {}",
                self.top_margin, height
            )));
        }

        let fixed_x = [
            ("left inset", self.left),
            ("buyer column", self.buyer_x),
            ("grand total label", self.grand_total_label_x),
            ("grand total value", self.grand_total_value_x),
        ];
        let column_x = self.columns.iter().map(|c| (c.header, c.x));
        for (what, x) in fixed_x.into_iter().chain(column_x) {
            if !(0.0..width).contains(&x) {
                return Err(LayoutError::InvalidGeometry(format!(
                    "{} at x={} lies outside page width {}",
                    what, x, width
                )));
            }
        }
        Ok(())
    }
}
