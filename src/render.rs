//! Indented plain-text rendering of parsed invoices.

use std::fmt;

use crate::invoice::{Detail, Invoice, InvoiceCollection, DETAIL_FIELDS, INVOICE_FIELDS};

/// One indentation level.
pub const INDENT: &str = "    ";

/// Prefix every line of `text` with `levels` indents. Empty lines stay empty.
pub fn indent(text: &str, levels: usize) -> String {
    let prefix = INDENT.repeat(levels);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a whole collection, newline-terminated.
pub fn render(collection: &InvoiceCollection) -> String {
    format!("{collection}\n")
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [_, amount, description] = &DETAIL_FIELDS;
        writeln!(f, "{}：{}", description.label, self.description)?;
        write!(f, "{}：{:?}", amount.label, self.amount)
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "發票 {}", self.number)?;
        for (field, value) in INVOICE_FIELDS.iter().zip(self.field_values()) {
            writeln!(f, "{INDENT}{}：{value}", field.label)?;
        }
        write!(f, "{INDENT}明細（共 {} 項明細）", self.details().len())?;
        for detail in self.details() {
            write!(f, "\n{}", indent(&detail.to_string(), 2))?;
        }
        Ok(())
    }
}

impl fmt::Display for InvoiceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "發票彙整 {}（共 {} 張發票）",
            self.source_name(),
            self.len()
        )?;
        for invoice in self.invoices() {
            write!(f, "\n{}", indent(&invoice.to_string(), 1))?;
        }
        Ok(())
    }
}
