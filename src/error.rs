use std::path::PathBuf;
use thiserror::Error;

/// Problems with a single row of an invoice file.
#[derive(Error, Debug, PartialEq)]
pub enum RowError {
    #[error("DecodeError: bytes are not valid Big5: {bytes}")]
    Decode { bytes: String },

    #[error("UnknownRowKindError: unknown row type '{0}'")]
    UnknownRowKind(String),

    #[error("InvalidRowKindError: expected row type '{expected}', found '{found}'")]
    InvalidRowKind {
        expected: &'static str,
        found: String,
    },

    #[error("FieldCountError: {kind} row needs {expected} fields, found {found}: {row}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
        row: String,
    },

    #[error("DateFormatError: {field} '{value}' is not a YYYYMMDD date")]
    DateFormat { field: &'static str, value: String },

    #[error("NumberFormatError: {field} '{value}' is not a number")]
    NumberFormat { field: &'static str, value: String },

    #[error("InvalidStatusError: invoice status '{0}' is not 開立 or 作廢")]
    InvalidStatus(String),

    #[error("NoCurrentInvoiceError: detail without invoice: {0}")]
    NoCurrentInvoice(String),

    #[error("MismatchedInvoiceError: invoice {invoice} received detail for {detail}")]
    MismatchedInvoice { invoice: String, detail: String },
}

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: RowError,
    },

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<InvoiceError>,
    },
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
