use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::detail::Detail;
use super::fields::{parse_number, unpack, HEADER_TAG, INVOICE_FIELDS};
use crate::error::RowError;

/// Date layout used by the export, e.g. `20230115`.
const DATE_FORMAT: &str = "%Y%m%d";

/// Parses a `YYYYMMDD` date; exactly eight ASCII digits are required.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whether an invoice is in force or has been cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    /// 開立
    Issued,
    /// 作廢
    Voided,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Issued => "開立",
            InvoiceStatus::Voided => "作廢",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "開立" => Ok(InvoiceStatus::Issued),
            "作廢" => Ok(InvoiceStatus::Voided),
            other => Err(RowError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice header and the line items attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub status: InvoiceStatus,
    pub number: String,
    pub date: NaiveDate,
    pub seller_id: i128,
    pub seller_name: String,
    pub card_name: String,
    pub card_id: i128,
    pub amount: f64,
    details: Vec<Detail>,
}

impl Invoice {
    /// Build an invoice from an `M|...` row.
    ///
    /// Date and numeric fields are coerced before the status is checked, so a
    /// row with both a bad amount and a bad status reports the amount.
    pub fn from_row(fields: &[String]) -> Result<Self, RowError> {
        let [status, number, date, seller_id, seller_name, card_name, card_id, amount] =
            unpack(fields, HEADER_TAG, &INVOICE_FIELDS)?;

        let date = parse_date(date).ok_or_else(|| RowError::DateFormat {
            field: INVOICE_FIELDS[2].key,
            value: date.clone(),
        })?;
        let seller_id = parse_number(&INVOICE_FIELDS[3], seller_id)?;
        let card_id = parse_number(&INVOICE_FIELDS[6], card_id)?;
        let amount = parse_number(&INVOICE_FIELDS[7], amount)?;
        let status = status.parse()?;

        Ok(Self {
            status,
            number: number.clone(),
            date,
            seller_id,
            seller_name: seller_name.clone(),
            card_name: card_name.clone(),
            card_id,
            amount,
            details: Vec::new(),
        })
    }

    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Attach a line item; its invoice number must match this invoice.
    pub fn add_detail(&mut self, detail: Detail) -> Result<(), RowError> {
        if detail.invoice_number != self.number {
            return Err(RowError::MismatchedInvoice {
                invoice: self.number.clone(),
                detail: detail.invoice_number,
            });
        }
        self.details.push(detail);
        Ok(())
    }

    /// Display values, aligned with `INVOICE_FIELDS`.
    pub fn field_values(&self) -> [String; 8] {
        [
            self.status.to_string(),
            self.number.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.seller_id.to_string(),
            self.seller_name.clone(),
            self.card_name.clone(),
            self.card_id.to_string(),
            format!("{:?}", self.amount),
        ]
    }
}
