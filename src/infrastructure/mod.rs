pub mod csv;
pub mod observability;
pub mod persistence;
