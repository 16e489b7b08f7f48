/// Module containing environment configuration helpers
pub mod config;
/// Module containing Lima (UTC-5) timestamp handling
pub mod lima_time;
/// Module containing logging utilities
pub mod logger;

pub use lima_time::*;
pub use logger::*;
