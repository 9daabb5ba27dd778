//! Moves whole tables between MySQL and CSV files, either as a one-shot
//! command-line transfer or as background jobs started over HTTP and polled
//! through `/status`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
