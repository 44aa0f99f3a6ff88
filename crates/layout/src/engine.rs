use crate::amounts::{format_money, format_percentage, InvoiceTotals, LineAmount};
use crate::config::InvoiceLayout;
use crate::date::format_date;
use crate::output::{LaidOutPage, PositionedText};
use crate::LayoutError;
use billet_types::{Invoice, Point, TextStyle};

/// Accumulates positioned text while a cursor walks down the page.
struct PageBuilder {
    y: f32,
    elements: Vec<PositionedText>,
}

impl PageBuilder {
    fn new(start_y: f32) -> Self {
        Self {
            y: start_y,
            elements: Vec::new(),
        }
    }

    fn text(&mut self, x: f32, text: impl Into<String>, style: TextStyle) {
        self.elements.push(PositionedText {
            position: Point::new(x, self.y),
            text: text.into(),
            style,
        });
    }

    fn advance(&mut self, by: f32) {
        self.y -= by;
    }
}

/// Lays out one invoice on a single page.
///
/// There is no pagination: item rows that run past the bottom edge are still
/// placed (at negative y) and counted in [`LaidOutPage::overflowed_rows`].
pub fn layout_invoice(invoice: &Invoice, layout: &InvoiceLayout) -> Result<LaidOutPage, LayoutError> {
    layout.validate()?;
    let formatted_date = format_date(&invoice.invoice_date)?;

    let (width, height) = layout.page_size.dimensions_pt();
    let styles = &layout.styles;
    let mut page = PageBuilder::new(height - layout.top_margin);

    page.text(
        layout.left,
        format!("{}: {}", layout.number_label, invoice.invoice_number),
        styles.header,
    );
    page.advance(layout.number_step);
    page.text(layout.left, format!("{}: {}", layout.date_label, formatted_date), styles.header);
    page.advance(layout.date_gap);

    page.text(layout.left, layout.seller_heading, styles.section);
    page.text(layout.buyer_x, layout.buyer_heading, styles.section);
    page.advance(layout.heading_step);

    let labels = &layout.party_labels;
    let (seller, buyer) = (&invoice.seller, &invoice.buyer);
    let detail_rows = [
        (labels.name, &seller.name, &buyer.name),
        (labels.address, &seller.address, &buyer.address),
        (labels.tax_id, &seller.gst_number, &buyer.gst_number),
        (labels.phone, &seller.phone_number, &buyer.phone_number),
    ];
    let last_detail = detail_rows.len() - 1;
    for (i, (label, seller_value, buyer_value)) in detail_rows.into_iter().enumerate() {
        page.text(layout.left, format!("{}: {}", label, seller_value), styles.detail);
        page.text(layout.buyer_x, format!("{}: {}", label, buyer_value), styles.detail);
        page.advance(if i == last_detail { layout.details_gap } else { layout.detail_step });
    }

    for column in &layout.columns {
        page.text(column.x, column.header, styles.table_header);
    }
    page.advance(layout.row_step);

    let mut totals = InvoiceTotals::default();
    let mut overflowed_rows = 0;
    for (index, item) in invoice.products.iter().enumerate() {
        let line = LineAmount::compute(item);
        totals.push(line);

        if page.y < 0.0 {
            overflowed_rows += 1;
        }
        let cells = [
            (index + 1).to_string(),
            item.product_name.clone(),
            item.quantity.to_string(),
            format_money(item.rate_per_unit),
            format_percentage(item.tax_percentage),
            format_money(line.amount),
        ];
        for (column, cell) in layout.columns.iter().zip(cells) {
            page.text(column.x, cell, styles.table_row);
        }
        page.advance(layout.row_step);
    }

    if overflowed_rows > 0 {
        log::warn!(
            "Invoice '{}': {} of {} item rows fall below the page bottom and will not be visible",
            invoice.invoice_number,
            overflowed_rows,
            invoice.products.len()
        );
    }

    page.advance(layout.total_gap);
    page.text(layout.grand_total_label_x, layout.grand_total_label, styles.grand_total);
    page.text(
        layout.grand_total_value_x,
        format_money(totals.grand_total),
        styles.grand_total,
    );

    log::debug!(
        "Laid out invoice '{}': {} elements, {} items, grand total {:.2}",
        invoice.invoice_number,
        page.elements.len(),
        invoice.products.len(),
        totals.grand_total
    );

    Ok(LaidOutPage {
        width,
        height,
        elements: page.elements,
        totals,
        overflowed_rows,
    })
}
