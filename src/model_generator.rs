use crate::associations::{resolve_associations, Association, ReverseForeignKeys};
use crate::column_documentation::render_column_table;
use crate::config::GeneratorConfig;
use crate::header::GenerationStamp;
use crate::naming::{to_single_quoted, to_symbol, to_type_name};
use crate::types::TableMeta;
use crate::validation_rules::derive_validation_rules;
use tracing::debug;

pub fn generate_model(
    table: &TableMeta,
    reverse: &ReverseForeignKeys,
    config: &GeneratorConfig,
    stamp: &GenerationStamp,
) -> String {
    let type_name = to_type_name(&table.table_name);
    let associations = resolve_associations(table, reverse);
    let rules = derive_validation_rules(&table.columns, &table.indexes);

    debug!(
        table = %table.table_name,
        many_to_one = associations.many_to_one.len(),
        one_to_many = associations.one_to_many.len(),
        required = ?rules.required,
        unique = ?rules.unique,
        "derived model"
    );

    let mut lines: Vec<String> = stamp.header(&format!("model for '{}' table", table.table_name));

    lines.extend(render_column_table(&table.columns, &table.indexes));
    lines.push("#".into());
    lines.push(format!(
        "class {} < Sequel::Model({})",
        type_name,
        to_symbol(&table.table_name)
    ));
    lines.push(String::new());

    lines.push(" # Plugins".into());
    lines.extend(
        config
            .plugins
            .iter()
            .map(|plugin: &String| format!(" plugin {}", to_symbol(plugin))),
    );
    lines.push(String::new());

    lines.push(" # Referential integrity".into());
    lines.extend(
        associations
            .many_to_one
            .iter()
            .chain(associations.one_to_many.iter())
            .map(Association::render),
    );
    lines.push(String::new());

    lines.extend(rules.render(config.empty_value_message.as_deref()));
    lines.push("end".into());

    lines.join("\n") + "\n"
}

/// The file that requires every model, in schema order.
pub fn generate_aggregator(
    tables: &[TableMeta],
    config: &GeneratorConfig,
    stamp: &GenerationStamp,
) -> String {
    let mut lines: Vec<String> = stamp.header("include file to access all models");

    lines.push("require 'sequel'".into());
    lines.push(format!("require_relative {}", to_single_quoted(&config.connection_include)));
    lines.push("# MODELS".into());
    lines.extend(
        tables
            .iter()
            .map(|table: &TableMeta| format!("require_relative {}", to_single_quoted(&table.table_name))),
    );

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnMeta, ForeignKeyMeta, IndexMeta};

    fn stamp() -> GenerationStamp {
        GenerationStamp {
            timestamp: "2024-05-01 09:30:00 +0000".into(),
            program: "sequel-models".into(),
        }
    }

    fn blog() -> Vec<TableMeta> {
        vec![
            TableMeta::new("users")
                .column(ColumnMeta::new("id", "INTEGER").primary_key().auto_increment())
                .column(ColumnMeta::new("email", "TEXT").not_null())
                .column(ColumnMeta::new("name", "TEXT").not_null())
                .index(IndexMeta::new("sqlite_autoindex_users_1", &["email"], true)),
            TableMeta::new("posts")
                .column(ColumnMeta::new("id", "INTEGER").primary_key().auto_increment())
                .column(ColumnMeta::new("user_id", "INTEGER").not_null())
                .column(ColumnMeta::new("title", "TEXT").not_null())
                .foreign_key(ForeignKeyMeta::new(&["user_id"], "users")),
        ]
    }

    #[test]
    fn users_model() {
        let tables = blog();
        let reverse = ReverseForeignKeys::build(&tables);

        let model = generate_model(&tables[0], &reverse, &GeneratorConfig::default(), &stamp());

        let expected = [
            "#coding: utf-8",
            "#",
            "# model for 'users' table",
            "# generated 2024-05-01 09:30:00 +0000 by sequel-models",
            "#",
            "# ------------------------------+---------------------+----------+----------+------------+--------------------",
            "# COLUMN_NAME                   | DATA_TYPE           | NULL? | KEY | DEFAULT | EXTRA",
            "# ------------------------------+---------------------+----------+----------+------------+--------------------",
            "# id                            | INTEGER             | false    | PRI      |            | auto_increment",
            "# email                         | TEXT                | false    | UNI      |            | ",
            "# name                          | TEXT                | false    |          |            | ",
            "# ------------------------------+---------------------+----------+----------+------------+--------------------",
            "#",
            "class Users < Sequel::Model(:users)",
            "",
            " # Plugins",
            " plugin :validation_helpers",
            " plugin :json_serializer",
            "",
            " # Referential integrity",
            " one_to_many :posts, :key=>:user_id",
            "",
            " # Not nullable cols",
            " def validate",
            " validates_presence [:email, :name]",
            " validates_unique [:email]",
            " end",
            "end",
            "",
        ]
        .join("\n");

        assert_eq!(model, expected);
    }

    #[test]
    fn posts_model_sections() {
        let tables = blog();
        let reverse = ReverseForeignKeys::build(&tables);

        let model = generate_model(&tables[1], &reverse, &GeneratorConfig::default(), &stamp());

        assert!(model.contains("class Posts < Sequel::Model(:posts)\n"));
        assert!(model.contains(" # Referential integrity\n many_to_one :users, :key=>:user_id\n\n"));
        assert!(model.contains(" validates_presence [:user_id, :title]\n"));
        assert!(!model.contains("validates_unique"));
        assert!(!model.contains("one_to_many"));
    }

    #[test]
    fn plugins_come_from_config() {
        let tables = blog();
        let reverse = ReverseForeignKeys::build(&tables);
        let config = GeneratorConfig {
            plugins: vec!["timestamps".into()],
            ..GeneratorConfig::default()
        };

        let model = generate_model(&tables[1], &reverse, &config, &stamp());

        assert!(model.contains(" # Plugins\n plugin :timestamps\n\n"));
        assert!(!model.contains("json_serializer"));
    }

    #[test]
    fn aggregator_lists_tables_in_order() {
        let aggregator = generate_aggregator(&blog(), &GeneratorConfig::default(), &stamp());

        assert!(aggregator.starts_with("#coding: utf-8\n#\n# include file to access all models\n"));
        assert!(aggregator.ends_with(
            "require 'sequel'\nrequire_relative 'db_connect'\n# MODELS\nrequire_relative 'users'\nrequire_relative 'posts'\n"
        ));
    }

    #[test]
    fn aggregator_escapes_quotes_in_names() {
        let config = GeneratorConfig {
            connection_include: "db's_connect".into(),
            ..GeneratorConfig::default()
        };

        let aggregator = generate_aggregator(&[TableMeta::new("o'brien")], &config, &stamp());

        assert!(aggregator.contains("require_relative 'db\\'s_connect'\n"));
        assert!(aggregator.ends_with("require_relative 'o\\'brien'\n"));
    }
}
