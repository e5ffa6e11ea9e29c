// src/store.rs
//
// Loader: CSV snapshot → records. Columns are mapped by header name, so
// column order in the file doesn't matter and unknown columns are ignored.

use std::{fs, path::{Path, PathBuf}};

use crate::csv::{SEP, parse_rows};
use crate::error::LoadError;
use crate::record::{Field, Record};

/// A loaded snapshot plus where it came from.
#[derive(Clone, Debug)]
pub struct DataSet {
    pub path: PathBuf,
    pub records: Vec<Record>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.records.len() }
}

pub fn load(path: &Path) -> Result<Vec<Record>, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    parse_records(&text).map_err(|msg| LoadError::Header { path: path.to_path_buf(), msg })
}

/// Try each candidate in order; first one that loads wins.
pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<DataSet, LoadError> {
    let mut tried = Vec::with_capacity(candidates.len());

    for c in candidates {
        let p = c.as_ref();
        match load(p) {
            Ok(records) => {
                logf!("Load: {} record(s) from {}", records.len(), p.display());
                return Ok(DataSet { path: p.to_path_buf(), records });
            }
            Err(e) => {
                logd!("Load: candidate failed: {}", e);
                tried.push(p.display().to_string());
            }
        }
    }

    Err(LoadError::NoCandidate { tried: tried.join(", ") })
}

/// Header-mapped parse. Err(msg) when the header is absent or lacks
/// `dataset_id`, or a quoted field is never closed.
pub fn parse_records(text: &str) -> Result<Vec<Record>, String> {
    let mut rows = parse_rows(text, SEP)?.into_iter();
    let header = rows.next().ok_or_else(|| s!("empty file (no header row)"))?;

    let mapping: Vec<Option<Field>> = header.iter().map(|h| Field::from_name(h)).collect();
    if !mapping.contains(&Some(Field::DatasetId)) {
        return Err(format!("header has no dataset_id column (found: {})", header.join(",")));
    }

    let mut out = Vec::new();
    for row in rows {
        let mut rec = Record::default();
        for (cell, field) in row.into_iter().zip(mapping.iter()) {
            if let Some(f) = field {
                rec.set(*f, cell);
            }
        }
        if rec.dataset_id.trim().is_empty() {
            continue;
        }
        out.push(rec);
    }
    Ok(out)
}
