//! Application layer module
//!
//! This module orchestrates the domain and infrastructure layers: the
//! streaming export driver and the CSV sink it feeds.

pub mod csv_export;
pub mod player_stream;

pub use csv_export::{CsvExporter, ExportError};
pub use player_stream::player_stream;
