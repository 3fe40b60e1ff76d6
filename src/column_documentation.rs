use crate::types::{ColumnMeta, IndexMeta};

pub fn rule_line() -> String {
    format!(
        "# {}+{}+{}+{}+{}+{}",
        "-".repeat(30),
        "-".repeat(21),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(12),
        "-".repeat(20)
    )
}

pub fn heading_line() -> String {
    format!(
        "# {:<30}| {:<20}| NULL? | KEY | DEFAULT | EXTRA",
        "COLUMN_NAME", "DATA_TYPE"
    )
}

/// `PRI`, `UNI`, `MUL` or empty. Among several covering indexes the last one
/// reported decides.
pub fn key_role(column: &ColumnMeta, indexes: &[IndexMeta]) -> &'static str {
    if column.is_primary_key {
        return "PRI";
    }

    indexes
        .iter()
        .filter(|index: &&IndexMeta| index.covers(&column.column_name))
        .last()
        .map_or("", |index: &IndexMeta| if index.unique { "UNI" } else { "MUL" })
}

pub fn column_line(column: &ColumnMeta, indexes: &[IndexMeta]) -> String {
    let default_value = column.default_value.as_deref().unwrap_or("");
    let extra = if column.auto_increment { "auto_increment" } else { "" };

    format!(
        "# {:<30}| {:<20}| {:<9}| {:<9}| {:<11}| {}",
        column.column_name,
        column.column_type,
        column.allow_null,
        key_role(column, indexes),
        default_value,
        extra
    )
}

/// The bordered column table placed at the top of every model.
pub fn render_column_table(columns: &[ColumnMeta], indexes: &[IndexMeta]) -> Vec<String> {
    let rows = columns
        .iter()
        .map(|column: &ColumnMeta| column_line(column, indexes));

    [rule_line(), heading_line(), rule_line()]
        .into_iter()
        .chain(rows)
        .chain([rule_line()])
        .collect()
}
