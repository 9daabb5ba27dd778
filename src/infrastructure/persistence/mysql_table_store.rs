use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use sqlx::mysql::{MySql, MySqlPool, MySqlRow};
use sqlx::{Column, Executor, QueryBuilder, Row, Statement, TypeInfo, ValueRef};
use tracing::instrument;

use crate::application::ports::{BulkLoadRequest, TableStore, TableStoreError};
use crate::domain::{CsvFormat, TableData};

/// Backtick-quotes a possibly schema-qualified table name.
pub fn quote_identifier(name: &str) -> String {
    name.split('.')
        .map(|part| format!("`{}`", part.replace('`', "``")))
        .collect::<Vec<_>>()
        .join(".")
}

pub struct MySqlTableStore {
    pool: MySqlPool,
    allowed_files: RwLock<HashSet<PathBuf>>,
    insert_batch_size: usize,
}

impl MySqlTableStore {
    pub fn new(pool: MySqlPool, insert_batch_size: usize) -> Self {
        Self {
            pool,
            allowed_files: RwLock::new(HashSet::new()),
            insert_batch_size: insert_batch_size.max(1),
        }
    }

    fn is_allowed(&self, path: &Path) -> bool {
        self.allowed_files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }
}

#[async_trait]
impl TableStore for MySqlTableStore {
    #[instrument(skip(self))]
    async fn fetch_table(&self, table: &str) -> Result<TableData, TableStoreError> {
        let sql = format!("SELECT * FROM {}", quote_identifier(table));

        let statement = (&self.pool)
            .prepare(&sql)
            .await
            .map_err(|e| TableStoreError::QueryFailed(e.to_string()))?;

        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let rows = statement
            .query()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TableStoreError::QueryFailed(e.to_string()))?;

        let rows = rows
            .iter()
            .map(|row| {
                (0..columns.len())
                    .map(|index| cell_to_string(row, index))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TableStoreError::QueryFailed(e.to_string()))?;

        Ok(TableData::new(columns, rows))
    }

    fn allow_local_file(&self, path: &Path) {
        self.allowed_files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf());
    }

    #[instrument(skip(self, request), fields(table = %request.table, path = %request.path.display()))]
    async fn bulk_load(&self, request: &BulkLoadRequest) -> Result<u64, TableStoreError> {
        if !self.is_allowed(&request.path) {
            return Err(TableStoreError::FileNotAllowed(
                request.path.display().to_string(),
            ));
        }

        let path = request.path.clone();
        let format = request.format;
        let records = tokio::task::spawn_blocking(move || read_records(&path, format))
            .await
            .map_err(|e| TableStoreError::SourceRead(e.to_string()))??;

        let table = quote_identifier(&request.table);
        let width = records.iter().map(Vec::len).max().unwrap_or(0);
        let mut inserted = 0u64;

        // IGNORE matches LOAD DATA LOCAL: duplicate keys are skipped and
        // empty numeric fields are coerced instead of failing the load.
        for batch in records.chunks(rows_per_batch(self.insert_batch_size, width)) {
            let mut builder: QueryBuilder<MySql> =
                QueryBuilder::new(format!("INSERT IGNORE INTO {table} "));
            builder.push_values(batch, |mut values, record| {
                for field in record {
                    values.push_bind(field.clone());
                }
            });

            let result = builder
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| TableStoreError::QueryFailed(e.to_string()))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

/// Placeholder limit of a MySQL prepared statement.
const MAX_PLACEHOLDERS: usize = 65_535;

/// Rows per `INSERT`, bounded so `rows * width` stays within the placeholder limit.
fn rows_per_batch(insert_batch_size: usize, width: usize) -> usize {
    insert_batch_size.min(MAX_PLACEHOLDERS / width.max(1)).max(1)
}

fn read_records(path: &Path, format: CsvFormat) -> Result<Vec<Vec<String>>, TableStoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(format.has_header)
        .delimiter(format.delimiter)
        .quote(format.quote)
        .from_path(path)
        .map_err(|e| TableStoreError::SourceRead(e.to_string()))?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| TableStoreError::SourceRead(e.to_string()))
        })
        .collect()
}

/// Renders one cell as text. NULL becomes the empty string.
fn cell_to_string(row: &MySqlRow, index: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(String::new());
    }
    let type_name = raw.type_info().name().to_string();

    let text = match type_name.as_str() {
        "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get_unchecked::<i64, _>(index)?.to_string()
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" | "BIT" | "YEAR" => row.try_get_unchecked::<u64, _>(index)?.to_string(),
        "FLOAT" => row.try_get_unchecked::<f32, _>(index)?.to_string(),
        "DOUBLE" => row.try_get_unchecked::<f64, _>(index)?.to_string(),
        "DATE" => row
            .try_get_unchecked::<chrono::NaiveDate, _>(index)?
            .to_string(),
        "TIME" => row
            .try_get_unchecked::<chrono::NaiveTime, _>(index)?
            .to_string(),
        "DATETIME" | "TIMESTAMP" => row
            .try_get_unchecked::<chrono::NaiveDateTime, _>(index)?
            .to_string(),
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" | "GEOMETRY" => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        _ => row.try_get_unchecked::<String, _>(index)?,
    };
    Ok(text)
}
