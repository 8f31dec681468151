use crate::error::RowError;

/// A record field: its key (used in error messages) and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> Field {
    Field { key, label }
}

/// Row tag introducing an invoice header.
pub const HEADER_TAG: &str = "M";

/// Row tag introducing a line item.
pub const DETAIL_TAG: &str = "D";

/// Invoice header fields, in file and display order.
pub const INVOICE_FIELDS: [Field; 8] = [
    field("invoice_status", "發票狀態"),
    field("invoice_number", "發票號碼"),
    field("invoice_date", "發票日期"),
    field("seller_id", "商店統編"),
    field("seller_name", "商店店名"),
    field("card_name", "載具名稱"),
    field("card_id", "載具號碼"),
    field("amount", "總金額　"),
];

/// Detail fields, in file order. Details render description first, then amount.
pub const DETAIL_FIELDS: [Field; 3] = [
    field("invoice_number", "發票號碼"),
    field("amount", "＄"),
    field("description", "名稱"),
];

/// Checks the tag and field count of a row and returns the fields after the tag.
pub(crate) fn unpack<'a, const N: usize>(
    fields: &'a [String],
    tag: &'static str,
    schema: &[Field; N],
) -> Result<&'a [String; N], RowError> {
    let found = fields.first().map(String::as_str).unwrap_or("");
    if found != tag {
        return Err(RowError::InvalidRowKind {
            expected: tag,
            found: found.to_string(),
        });
    }
    fields[1..].try_into().map_err(|_| RowError::FieldCount {
        kind: tag,
        expected: schema.len() + 1,
        found: fields.len(),
        row: fields.join("|"),
    })
}

/// Parses a numeric field, ignoring surrounding whitespace.
pub(crate) fn parse_number<T: std::str::FromStr>(
    field: &Field,
    value: &str,
) -> Result<T, RowError> {
    value
        .trim()
        .parse()
        .map_err(|_| RowError::NumberFormat {
            field: field.key,
            value: value.to_string(),
        })
}
