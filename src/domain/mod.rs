//! Core domain types and logic.

pub mod analyser;
pub mod collection;
pub mod config_validation;
pub mod error;
pub mod job;
pub mod record;
pub mod source_format;
