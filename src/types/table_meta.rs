use super::column_meta::ColumnMeta;
use super::foreign_key_meta::ForeignKeyMeta;
use super::index_meta::IndexMeta;

#[derive(Clone, Debug, PartialEq)]
pub struct TableMeta {
    pub table_name: String,
    pub columns: Vec<ColumnMeta>,
    pub indexes: Vec<IndexMeta>,
    pub foreign_keys: Vec<ForeignKeyMeta>,
}

impl TableMeta {
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnMeta) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: IndexMeta) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKeyMeta) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }
}
