use crate::error::ExportError;
use crate::model::PackingList;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(list: &PackingList, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_json(list, BufWriter::new(file))
}

/// Pretty JSON with the camelCase field names the dashboard reads.
pub fn write_json<W: Write>(list: &PackingList, mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, list)?;
    out.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })
}
