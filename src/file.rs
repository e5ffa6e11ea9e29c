// src/file.rs
//
// Exporter: records → CSV file. Header row first, then one row per record
// with `sno` numbered 1.. in output order. Existing files are truncated.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{SEP, write_row};
use crate::error::ExportError;
use crate::record::{Record, header_row};

/// Write `records` to `path`. Returns the path written to.
pub fn export(records: &[Record], path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    write_row(&mut out, &header_row(), SEP).map_err(io_err)?;
    for (i, rec) in records.iter().enumerate() {
        let mut row = rec.to_row();
        if let Some(last) = row.last_mut() {
            *last = (i + 1).to_string();
        }
        write_row(&mut out, &row, SEP).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    logf!("Export: wrote {} record(s) → {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sno_follows_output_order_and_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("b.csv");

        let many: Vec<Record> = ["A", "B", "C"].iter().map(|n| Record::new(*n)).collect();
        export(&many, &path).unwrap();
        export(&many[..1], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "second export must overwrite, not append");
        assert!(lines[0].starts_with("dataset_id,task,subtask,"));
        assert!(lines[1].starts_with("A,"));
        assert!(lines[1].ends_with(",1"));
    }

    #[test]
    fn refuses_file_as_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = export(&[Record::new("A")], &blocker.join("out.csv")).unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory(_)));
    }
}
