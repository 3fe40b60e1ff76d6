use crate::error::Result;
use crate::types::{ColumnMeta, ForeignKeyMeta, IndexMeta, TableMeta};
use sea_query::{Alias, Expr, Order, Query, SqliteQueryBuilder};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;

/// Reads table, column, index and foreign key metadata out of a SQLite
/// database through its `pragma_*` table-valued functions.
pub struct SqliteSchemaReader {
    pool: SqlitePool,
}

impl SqliteSchemaReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url).await?;

        Ok(Self::new(pool))
    }

    /// User tables in creation order.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let query = Query::select()
            .column(Alias::new("name"))
            .from(Alias::new("sqlite_master"))
            .and_where(Expr::col(Alias::new("type")).eq("table"))
            .and_where(Expr::col(Alias::new("name")).not_like("sqlite_%"))
            .order_by(Alias::new("rowid"), Order::Asc)
            .to_string(SqliteQueryBuilder);

        let rows: Vec<SqliteRow> = sqlx::query(&query).fetch_all(&self.pool).await?;

        let tables = rows
            .iter()
            .map(|row: &SqliteRow| row.try_get::<String, _>("name"))
            .collect::<std::result::Result<Vec<String>, sqlx::Error>>()?;

        Ok(tables)
    }

    pub async fn get_columns(&self, table_name: &str) -> Result<Vec<ColumnMeta>> {
        let rows: Vec<SqliteRow> = sqlx::query(
            r#"SELECT "name", "type", "notnull", "dflt_value", "pk" FROM pragma_table_info(?1) ORDER BY "cid""#,
        )
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        let primary_key_count = rows
            .iter()
            .map(|row: &SqliteRow| row.try_get::<i64, _>("pk"))
            .collect::<std::result::Result<Vec<i64>, sqlx::Error>>()?
            .into_iter()
            .filter(|pk: &i64| *pk > 0)
            .count();

        let mut columns: Vec<ColumnMeta> = Vec::with_capacity(rows.len());

        for row in rows.iter() {
            let column_type: String = row.try_get("type")?;
            let is_primary_key = row.try_get::<i64, _>("pk")? > 0;

            // a lone INTEGER primary key aliases the rowid
            let auto_increment =
                is_primary_key && primary_key_count == 1 && column_type.eq_ignore_ascii_case("integer");

            columns.push(ColumnMeta {
                column_name: row.try_get("name")?,
                column_type,
                allow_null: row.try_get::<i64, _>("notnull")? == 0,
                is_primary_key,
                default_value: row.try_get("dflt_value")?,
                auto_increment,
            });
        }

        Ok(columns)
    }

    /// Indexes as SQLite reports them, minus the ones backing a primary key.
    pub async fn get_indexes(&self, table_name: &str) -> Result<Vec<IndexMeta>> {
        let rows: Vec<SqliteRow> = sqlx::query(
            r#"SELECT "name", "unique", "origin" FROM pragma_index_list(?1) ORDER BY "seq""#,
        )
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        let mut indexes: Vec<IndexMeta> = Vec::new();

        for row in rows.iter() {
            let origin: String = row.try_get("origin")?;
            if origin == "pk" {
                continue;
            }

            let index_name: String = row.try_get("name")?;

            let columns = sqlx::query(
                r#"SELECT "name" FROM pragma_index_info(?1) ORDER BY "seqno""#,
            )
            .bind(&index_name)
            .fetch_all(&self.pool)
            .await?
            .iter()
            // expression columns have no name
            .filter_map(|row: &SqliteRow| row.try_get::<Option<String>, _>("name").transpose())
            .collect::<std::result::Result<Vec<String>, sqlx::Error>>()?;

            indexes.push(IndexMeta {
                index_name,
                columns,
                unique: row.try_get::<i64, _>("unique")? != 0,
            });
        }

        Ok(indexes)
    }

    /// One entry per constraint; composite keys keep their column order.
    pub async fn get_foreign_keys(&self, table_name: &str) -> Result<Vec<ForeignKeyMeta>> {
        let rows: Vec<SqliteRow> = sqlx::query(
            r#"SELECT "id", "table", "from" FROM pragma_foreign_key_list(?1) ORDER BY "id", "seq""#,
        )
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        let mut foreign_keys: Vec<(i64, ForeignKeyMeta)> = Vec::new();

        for row in rows.iter() {
            let id: i64 = row.try_get("id")?;
            let column: String = row.try_get("from")?;

            if let Some((_, fk)) = foreign_keys.last_mut().filter(|(last_id, _)| *last_id == id) {
                fk.columns.push(column);
                continue;
            }

            foreign_keys.push((
                id,
                ForeignKeyMeta {
                    columns: vec![column],
                    ref_table: row.try_get("table")?,
                },
            ));
        }

        Ok(foreign_keys.into_iter().map(|(_, fk)| fk).collect())
    }

    pub async fn get_table(&self, table_name: &str) -> Result<TableMeta> {
        Ok(TableMeta {
            table_name: table_name.into(),
            columns: self.get_columns(table_name).await?,
            indexes: self.get_indexes(table_name).await?,
            foreign_keys: self.get_foreign_keys(table_name).await?,
        })
    }
}

/// Snapshot of the whole schema. Nothing is generated from a partial read.
pub async fn get_database_schema(reader: &SqliteSchemaReader) -> Result<Vec<TableMeta>> {
    let mut tables: Vec<TableMeta> = Vec::new();

    for table_name in reader.list_tables().await? {
        let table = reader.get_table(&table_name).await?;

        debug!(
            table = %table.table_name,
            columns = table.columns.len(),
            indexes = table.indexes.len(),
            foreign_keys = table.foreign_keys.len(),
            "discovered table"
        );

        tables.push(table);
    }

    Ok(tables)
}
