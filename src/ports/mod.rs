//! Port traits implemented by [`crate::adapters`].

pub mod config_port;
pub mod record_format;
pub mod report_port;
