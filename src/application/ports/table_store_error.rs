#[derive(Debug, thiserror::Error)]
pub enum TableStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("local file not allowed: {0}")]
    FileNotAllowed(String),
    #[error("reading source file failed: {0}")]
    SourceRead(String),
}
