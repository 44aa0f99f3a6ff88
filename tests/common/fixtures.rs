use billet::{Invoice, LineItem, Party};

pub fn seller() -> Party {
    Party {
        name: "Acme Traders".into(),
        address: "12 Market Road, Pune".into(),
        gst_number: "27AAPFU0939F1ZV".into(),
        phone_number: "+91 20 5555 0101".into(),
    }
}

pub fn buyer() -> Party {
    Party {
        name: "Globex Retail".into(),
        address: "4 Harbour Street, Mumbai".into(),
        gst_number: "27AACCG1234K1Z5".into(),
        phone_number: "+91 22 5555 0199".into(),
    }
}

/// Two products, grand total 305.00
pub fn inv_001() -> Invoice {
    Invoice {
        invoice_number: "INV-001".into(),
        invoice_date: "2024-01-15".into(),
        seller: seller(),
        buyer: buyer(),
        products: vec![
            LineItem::new("Widget", 2, 50.0, 5.0),
            LineItem::new("Gadget", 1, 200.0, 0.0),
        ],
    }
}

pub fn invoice_with_products(products: Vec<LineItem>) -> Invoice {
    Invoice {
        invoice_number: "INV-100".into(),
        invoice_date: "2024-03-07".into(),
        seller: seller(),
        buyer: buyer(),
        products,
    }
}

/// Enough identical rows that the table runs off the bottom of an A4 page
pub fn long_invoice(rows: u32) -> Invoice {
    invoice_with_products(
        (1..=rows)
            .map(|i| LineItem::new(format!("Item {}", i), 1, 1.0, 0.0))
            .collect(),
    )
}

/// The INV-001 invoice as it arrives over the wire
pub fn inv_001_json() -> &'static str {
    r#"{
        "invoice_number": "INV-001",
        "invoice_date": "2024-01-15",
        "seller": {
            "name": "Acme Traders",
            "address": "12 Market Road, Pune",
            "gst_number": "27AAPFU0939F1ZV",
            "phone_number": "+91 20 5555 0101"
        },
        "buyer": {
            "name": "Globex Retail",
            "address": "4 Harbour Street, Mumbai",
            "gst_number": "27AACCG1234K1Z5",
            "phone_number": "+91 22 5555 0199"
        },
        "products": [
            { "product_name": "Widget", "quantity": 2, "rate_per_unit": 50.0, "tax_percentage": 5.0 },
            { "product_name": "Gadget", "quantity": 1, "rate_per_unit": 200.0, "tax_percentage": 0.0 }
        ]
    }"#
}
