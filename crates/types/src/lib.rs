pub mod font;
pub mod geometry;
pub mod invoice;

pub use font::{FontWeight, TextStyle};
pub use geometry::{PageSize, Point};
pub use invoice::{Invoice, LineItem, Party};
