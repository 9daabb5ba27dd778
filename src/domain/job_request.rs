use serde::Deserialize;

/// Body of `POST /dump`.
///
/// `start` and `total` are accepted for compatibility with existing callers
/// and logged, but the executor always dumps the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DumpRequest {
    #[serde(default, alias = "table")]
    pub table: String,
    #[serde(default, alias = "start")]
    pub start: i64,
    #[serde(default, alias = "total")]
    pub total: i64,
}

/// Body of `POST /import`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportRequest {
    #[serde(default, alias = "table")]
    pub table: String,
    #[serde(default, alias = "file")]
    pub file: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JobRequestError {
    #[error("table name is required")]
    MissingTable,
    #[error("file name is required")]
    MissingFile,
}

impl DumpRequest {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), JobRequestError> {
        if self.table.trim().is_empty() {
            return Err(JobRequestError::MissingTable);
        }
        Ok(())
    }
}

impl ImportRequest {
    pub fn new(table: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            file: file.into(),
        }
    }

    pub fn validate(&self) -> Result<(), JobRequestError> {
        if self.table.trim().is_empty() {
            return Err(JobRequestError::MissingTable);
        }
        if self.file.trim().is_empty() {
            return Err(JobRequestError::MissingFile);
        }
        Ok(())
    }
}
