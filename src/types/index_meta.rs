#[derive(Clone, Debug, PartialEq)]
pub struct IndexMeta {
    pub index_name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexMeta {
    pub fn new(index_name: &str, columns: &[&str], unique: bool) -> Self {
        Self {
            index_name: index_name.into(),
            columns: columns.iter().map(|column: &&str| column.to_string()).collect(),
            unique,
        }
    }

    pub fn covers(self: &Self, column_name: &str) -> bool {
        self.columns.iter().any(|column: &String| column.eq(column_name))
    }
}
