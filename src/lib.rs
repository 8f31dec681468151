pub mod error;
pub mod invoice;
pub mod reader;
pub mod render;

pub use error::{InvoiceError, Result, RowError};
pub use invoice::{Detail, Invoice, InvoiceCollection, InvoiceStatus};
pub use render::render;
