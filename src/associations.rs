use crate::naming::{to_symbol, to_symbol_list};
use crate::types::{ForeignKeyMeta, TableMeta};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssociationKind {
    ManyToOne,
    OneToMany,
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationKind::ManyToOne => f.write_str("many_to_one"),
            AssociationKind::OneToMany => f.write_str("one_to_many"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyReference {
    /// Column is named `<referenced_table>_id`.
    Implicit,
    Column(String),
    Composite(Vec<String>),
}

impl KeyReference {
    pub fn for_foreign_key(fk: &ForeignKeyMeta) -> Self {
        if fk.is_composite() {
            return KeyReference::Composite(fk.columns.clone());
        }

        match fk.columns.first() {
            Some(column) if column.ne(&fk.conventional_column()) => {
                KeyReference::Column(column.clone())
            }
            _ => KeyReference::Implicit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Association {
    pub kind: AssociationKind,
    pub table_name: String, // the other side of the relation
    pub key: KeyReference,
}

impl Association {
    pub fn render(self: &Self) -> String {
        let key = match &self.key {
            KeyReference::Implicit => String::new(),
            KeyReference::Column(column) => format!(", :key=>{}", to_symbol(column)),
            KeyReference::Composite(columns) => format!(", :key=>{}", to_symbol_list(columns)),
        };

        format!(" {} {}{}", self.kind, to_symbol(&self.table_name), key)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct TableAssociations {
    pub many_to_one: Vec<Association>,
    pub one_to_many: Vec<Association>,
}

/// Foreign keys grouped by the table they point at, each paired with the
/// table that declares it. Built once per run.
pub struct ReverseForeignKeys<'a> {
    by_ref_table: HashMap<&'a str, Vec<(&'a TableMeta, &'a ForeignKeyMeta)>>,
}

impl<'a> ReverseForeignKeys<'a> {
    pub fn build(tables: &'a [TableMeta]) -> Self {
        let mut by_ref_table: HashMap<&'a str, Vec<(&'a TableMeta, &'a ForeignKeyMeta)>> =
            HashMap::new();

        for table in tables {
            for fk in &table.foreign_keys {
                by_ref_table
                    .entry(fk.ref_table.as_str())
                    .or_default()
                    .push((table, fk));
            }
        }

        Self { by_ref_table }
    }

    pub fn referencing(self: &Self, table_name: &str) -> &[(&'a TableMeta, &'a ForeignKeyMeta)] {
        self.by_ref_table
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub fn resolve_associations(target: &TableMeta, reverse: &ReverseForeignKeys) -> TableAssociations {
    let many_to_one: Vec<Association> = target
        .foreign_keys
        .iter()
        .map(|fk: &ForeignKeyMeta| Association {
            kind: AssociationKind::ManyToOne,
            table_name: fk.ref_table.clone(),
            key: KeyReference::for_foreign_key(fk),
        })
        .collect();

    let one_to_many: Vec<Association> = reverse
        .referencing(&target.table_name)
        .iter()
        .map(|(source, fk): &(&TableMeta, &ForeignKeyMeta)| Association {
            kind: AssociationKind::OneToMany,
            table_name: source.table_name.clone(),
            key: KeyReference::for_foreign_key(fk),
        })
        .collect();

    TableAssociations {
        many_to_one,
        one_to_many,
    }
}
