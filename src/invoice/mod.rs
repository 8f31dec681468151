mod collection;
mod detail;
mod fields;
mod header;

pub use collection::InvoiceCollection;
pub use detail::Detail;
pub use fields::{
    Field, DETAIL_FIELDS, DETAIL_TAG, HEADER_TAG, INVOICE_FIELDS,
};
pub use header::{Invoice, InvoiceStatus};
