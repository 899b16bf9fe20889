//! Concrete adapter implementations for ports.

pub mod csv_format;
pub mod field_parse;
pub mod file_config_adapter;
pub mod file_loader;
pub mod text_report_adapter;
pub mod triplet_format;
