use crate::naming::{to_string_literal, to_symbol_list};
use crate::types::{ColumnMeta, IndexMeta};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationRules {
    pub required: Vec<String>,
    pub unique: Vec<String>,
}

/// Not-null, non-primary-key columns in column order, and every column of
/// every unique index in index order. A column under two unique indexes is
/// listed twice.
pub fn derive_validation_rules(columns: &[ColumnMeta], indexes: &[IndexMeta]) -> ValidationRules {
    let required: Vec<String> = columns
        .iter()
        .filter(|column: &&ColumnMeta| column.is_required())
        .map(|column: &ColumnMeta| column.column_name.clone())
        .collect();

    let unique: Vec<String> = indexes
        .iter()
        .filter(|index: &&IndexMeta| index.unique)
        .flat_map(|index: &IndexMeta| index.columns.iter().cloned())
        .collect();

    ValidationRules { required, unique }
}

impl ValidationRules {
    pub fn render(self: &Self, empty_value_message: Option<&str>) -> Vec<String> {
        let mut lines: Vec<String> = vec![" # Not nullable cols".into(), " def validate".into()];

        if !self.required.is_empty() {
            let message = empty_value_message
                .map(|message: &str| format!(", :message=>{}", to_string_literal(message)))
                .unwrap_or_default();

            lines.push(format!(" validates_presence {}{}", to_symbol_list(&self.required), message));
        }

        if !self.unique.is_empty() {
            lines.push(format!(" validates_unique {}", to_symbol_list(&self.unique)));
        }

        lines.push(" end".into());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_keys_are_never_required() {
        let columns = vec![
            ColumnMeta::new("id", "INTEGER").primary_key(),
            ColumnMeta::new("name", "TEXT").not_null(),
            ColumnMeta::new("note", "TEXT"),
        ];

        let rules = derive_validation_rules(&columns, &[]);

        assert_eq!(rules.required, vec!["name".to_string()]);
        assert!(rules.unique.is_empty());
    }

    #[test]
    fn unique_columns_follow_index_order() {
        let indexes = vec![
            IndexMeta::new("by_email", &["email"], true),
            IndexMeta::new("by_name", &["name"], false),
            IndexMeta::new("by_pair", &["a", "b"], true),
            IndexMeta::new("by_email_again", &["email"], true),
        ];

        let rules = derive_validation_rules(&[], &indexes);

        assert_eq!(rules.unique, vec!["email", "a", "b", "email"]);
    }

    #[test]
    fn render_skips_empty_rules() {
        let rules = ValidationRules::default();

        assert_eq!(rules.render(None), vec![" # Not nullable cols", " def validate", " end"]);
    }

    #[test]
    fn render_with_message() {
        let rules = ValidationRules {
            required: vec!["email".into(), "name".into()],
            unique: vec!["email".into()],
        };

        assert_eq!(
            rules.render(Some("cannot be empty")),
            vec![
                " # Not nullable cols",
                " def validate",
                " validates_presence [:email, :name], :message=>\"cannot be empty\"",
                " validates_unique [:email]",
                " end",
            ]
        );
        assert_eq!(rules.render(None)[2], " validates_presence [:email, :name]");
    }
}
