mod table_file_writer;
mod table_store;
mod table_store_error;

pub use table_file_writer::{TableFileError, TableFileWriter};
pub use table_store::{BulkLoadRequest, TableStore};
pub use table_store_error::TableStoreError;
