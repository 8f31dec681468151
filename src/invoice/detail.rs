use super::fields::{parse_number, unpack, DETAIL_FIELDS, DETAIL_TAG};
use crate::error::RowError;

/// One line item of an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    /// Number of the invoice this item belongs to.
    pub invoice_number: String,
    pub amount: f64,
    pub description: String,
}

impl Detail {
    /// Build a line item from a `D|...` row.
    pub fn from_row(fields: &[String]) -> Result<Self, RowError> {
        let [invoice_number, amount, description] = unpack(fields, DETAIL_TAG, &DETAIL_FIELDS)?;

        Ok(Self {
            invoice_number: invoice_number.clone(),
            amount: parse_number(&DETAIL_FIELDS[1], amount)?,
            description: description.clone(),
        })
    }
}
