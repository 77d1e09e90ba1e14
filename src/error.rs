//! Error types for Bar Packer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading recipe sheets, event sheets or event files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The sheet could not be read as CSV.
    #[error("invalid sheet: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// The event document is not valid JSON for an event.
    #[error("invalid event JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting a packing list.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write TSV data.
    #[error("TSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Faults found while calculating a packing list.
///
/// These never reach callers of [`crate::engine::compute_packing_list`],
/// which degrades them to an empty list.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("event data is missing")]
    MissingEvent,

    #[error("recipe '{recipe}' has a malformed ingredient '{ingredient}': {reason}")]
    MalformedIngredient {
        recipe: String,
        ingredient: String,
        reason: String,
    },
}

/// Errors from applying an assistant command to a session.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("headcount must be a non-negative number, got {value}")]
    InvalidHeadcount { value: f64 },

    #[error("unknown event field '{field}'")]
    UnknownField { field: String },

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },

    #[error("recipe name must not be empty")]
    EmptyRecipeName,
}
