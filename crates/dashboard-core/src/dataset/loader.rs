//! Loading datasets from delimited text.

use super::Dataset;
use crate::error::DatasetError;
use crate::value::Value;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Options for reading delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first record holds column names.
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

impl Dataset {
    /// Load a dataset from a delimited-text file.
    pub fn from_csv_path(
        path: impl AsRef<Path>,
        options: &CsvOptions,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_csv_reader(file, options)?;
        debug!(
            path = %path.display(),
            rows = dataset.num_rows(),
            columns = dataset.num_columns(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load a dataset from any reader of delimited text.
    pub fn from_csv_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut header: Option<Vec<String>> = if options.has_header {
            Some(dedupe_names(reader.headers()?.iter()))
        } else {
            None
        };

        let mut rows: Vec<Vec<Value>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            if header.is_none() {
                header = Some((0..record.len()).map(|i| format!("column_{}", i)).collect());
            }
            rows.push(record.iter().map(Value::infer).collect());
        }

        Self::from_rows(header.unwrap_or_default(), rows)
    }
}

/// Rename repeated column names to `name.1`, `name.2`, ... so every column
/// stays addressable. Suffixes skip names already taken.
fn dedupe_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.to_string();
        if taken.contains(&candidate) {
            let count = counts.entry(name).or_insert(0);
            loop {
                *count += 1;
                candidate = format!("{}.{}", name, count);
                if !taken.contains(&candidate) {
                    break;
                }
            }
        }
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
