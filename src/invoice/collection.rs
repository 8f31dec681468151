use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::detail::Detail;
use super::fields::{DETAIL_TAG, HEADER_TAG};
use super::header::Invoice;
use crate::error::{InvoiceError, Result, RowError};
use crate::reader::{Row, RowReader};

/// All invoices read from one export file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceCollection {
    source_name: String,
    invoices: Vec<Invoice>,
}

impl InvoiceCollection {
    /// Parse a Big5 export file.
    ///
    /// The file is closed on return, whether parsing succeeded or not. Any
    /// failure discards the invoices read so far.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wrap = |source: InvoiceError| InvoiceError::File {
            path: path.to_path_buf(),
            source: Box::new(source),
        };

        let file = File::open(path).map_err(|e| wrap(e.into()))?;
        Self::from_reader(path.display().to_string(), BufReader::new(file)).map_err(wrap)
    }

    /// Parse rows from any buffered byte source.
    pub fn from_reader<R: BufRead>(source_name: impl Into<String>, reader: R) -> Result<Self> {
        let mut collection = Self {
            source_name: source_name.into(),
            invoices: Vec::new(),
        };

        for row in RowReader::new(reader) {
            let row = row?;
            collection.push_row(&row).map_err(|source| InvoiceError::Row {
                line: row.line,
                source,
            })?;
        }

        info!(
            source = %collection.source_name,
            invoices = collection.invoices.len(),
            details = collection.invoices.iter().map(|i| i.details().len()).sum::<usize>(),
            "parsed invoice file"
        );
        Ok(collection)
    }

    fn push_row(&mut self, row: &Row) -> std::result::Result<(), RowError> {
        match row.tag() {
            HEADER_TAG => {
                let invoice = Invoice::from_row(&row.fields)?;
                debug!(line = row.line, number = %invoice.number, "invoice");
                self.invoices.push(invoice);
            }
            DETAIL_TAG => {
                let invoice = self
                    .invoices
                    .last_mut()
                    .ok_or_else(|| RowError::NoCurrentInvoice(row.raw()))?;
                let detail = Detail::from_row(&row.fields)?;
                debug!(line = row.line, number = %detail.invoice_number, "detail");
                invoice.add_detail(detail)?;
            }
            other => return Err(RowError::UnknownRowKind(other.to_string())),
        }
        Ok(())
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
