#[derive(Clone, Debug, PartialEq)]
pub struct ColumnMeta {
    pub column_name: String,
    pub column_type: String, // declared db type, verbatim
    pub allow_null: bool,
    pub is_primary_key: bool,
    pub default_value: Option<String>,
    pub auto_increment: bool,
}

impl ColumnMeta {
    pub fn new(column_name: &str, column_type: &str) -> Self {
        Self {
            column_name: column_name.into(),
            column_type: column_type.into(),
            allow_null: true,
            is_primary_key: false,
            default_value: None,
            auto_increment: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.allow_null = false;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// A column the storage engine does not fill in on its own.
    pub fn is_required(self: &Self) -> bool {
        !self.allow_null && !self.is_primary_key
    }
}
