pub mod generate;
pub mod health;

pub use generate::generate_invoice;
pub use health::health_check;
