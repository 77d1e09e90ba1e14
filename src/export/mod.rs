pub mod json;
pub mod tsv;

pub use crate::error::ExportError;
pub use json::{export_json, write_json};
pub use tsv::{export_tsv, write_tsv};
