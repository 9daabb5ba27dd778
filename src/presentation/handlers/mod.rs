mod dump;
mod health;
mod import;
mod job_result;
mod status;

pub use dump::dump_handler;
pub use health::health_handler;
pub use import::import_handler;
pub use job_result::JobResult;
pub use status::status_handler;
