#[derive(Clone, Debug, PartialEq)]
pub struct ForeignKeyMeta {
    pub columns: Vec<String>, // local columns, in key order
    pub ref_table: String,
}

impl ForeignKeyMeta {
    pub fn new(columns: &[&str], ref_table: &str) -> Self {
        Self {
            columns: columns.iter().map(|column: &&str| column.to_string()).collect(),
            ref_table: ref_table.into(),
        }
    }

    pub fn references(self: &Self, table_name: &str) -> bool {
        self.ref_table.eq(table_name)
    }

    pub fn is_composite(self: &Self) -> bool {
        self.columns.len() > 1
    }

    /// The single-column name that needs no explicit key in an association.
    pub fn conventional_column(self: &Self) -> String {
        format!("{}_id", self.ref_table)
    }
}
