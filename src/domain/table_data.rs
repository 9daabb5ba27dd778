/// A fully materialized table: column names plus rows rendered as text.
/// SQL `NULL` is carried as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }
}
