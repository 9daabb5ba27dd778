mod csv_format;
mod direction_status;
mod job_direction;
mod job_request;
mod short_duration;
mod table_data;

pub use csv_format::CsvFormat;
pub use direction_status::DirectionStatus;
pub use job_direction::JobDirection;
pub use job_request::{DumpRequest, ImportRequest, JobRequestError};
pub use short_duration::short_duration;
pub use table_data::TableData;
