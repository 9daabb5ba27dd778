mod csv_file_writer;
mod mock_table_file_writer;

pub use csv_file_writer::CsvFileWriter;
pub use mock_table_file_writer::MockTableFileWriter;
