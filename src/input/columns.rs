use std::path::Path;

use crate::input::InputError;

/// Cells read as missing, matching the NA spellings common in CSV exports.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_na(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new(record: &csv::StringRecord) -> Self {
        let names = record
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let name = if i == 0 {
                    name.trim_start_matches('\u{feff}')
                } else {
                    name
                };
                name.trim().to_string()
            })
            .collect();
        Self { names }
    }

    pub fn find(&self, column: &str) -> Option<usize> {
        self.names.iter().position(|n| n == column)
    }

    pub fn require(&self, column: &'static str, path: &Path) -> Result<usize, InputError> {
        self.find(column).ok_or_else(|| InputError::MissingColumn {
            path: path.display().to_string(),
            column,
        })
    }

    pub fn optional(&self, column: &'static str, path: &Path) -> Option<usize> {
        let idx = self.find(column);
        if idx.is_none() {
            tracing::warn!(
                column,
                path = %path.display(),
                "optional column absent; treating every value as missing"
            );
        }
        idx
    }
}

pub fn text_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let value = record.get(idx?)?;
    if is_na(value) {
        None
    } else {
        Some(value.to_string())
    }
}

pub struct NumericColumn<'a> {
    pub path: &'a Path,
    pub column: &'static str,
    pub idx: usize,
}

impl NumericColumn<'_> {
    pub fn parse(&self, record: &csv::StringRecord) -> Result<Option<f64>, InputError> {
        let raw = record.get(self.idx).unwrap_or("");
        let value = raw.trim();
        if is_na(value) {
            return Ok(None);
        }
        match value.parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(None),
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(InputError::DataFormat {
                path: self.path.display().to_string(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                column: self.column,
                value: raw.to_string(),
            }),
        }
    }
}
