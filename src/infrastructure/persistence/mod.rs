mod mock_table_store;
mod mysql_pool;
mod mysql_table_store;

pub use mock_table_store::MockTableStore;
pub use mysql_pool::create_pool;
pub use mysql_table_store::{MySqlTableStore, quote_identifier};
