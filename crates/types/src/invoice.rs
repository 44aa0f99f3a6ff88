use serde::{Deserialize, Serialize};

/// A seller or buyer on an invoice.
///
/// Field names match the JSON wire format accepted by the service and CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    /// Tax-registration identifier.
    pub gst_number: String,
    pub phone_number: String,
}

/// One product row of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    pub quantity: u32,
    pub rate_per_unit: f64,
    /// Percentage in the 0-100 range. Not enforced.
    pub tax_percentage: f64,
}

impl LineItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, rate_per_unit: f64, tax_percentage: f64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            rate_per_unit,
            tax_percentage,
        }
    }
}

/// The top-level record describing one billing document.
///
/// Products are rendered in the order given; nothing sorts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    /// Expected in `YYYY-MM-DD` form.
    pub invoice_date: String,
    pub seller: Party,
    pub buyer: Party,
    pub products: Vec<LineItem>,
}
