// ============================================================
// Layer 4 — CSV Dataset Loader
// ============================================================
// Reads the whole labelled CSV file in a single call, splits it
// into lines and hands them to the line parser.
//
// File layout:
//   Text,IsSpam                          ← header, always skipped
//   "Buy one, get one free!",1
//   Meeting scheduled for tomorrow,0
//   ...
//
// Both `\n` and `\r\n` line endings are accepted. A final newline
// does not produce an extra empty record.

use std::{fs, path::PathBuf};

use crate::data::csv_line::parse_records;
use crate::domain::error::DatasetError;
use crate::domain::record::{ClassCounts, Record};
use crate::domain::traits::RecordSource;

/// Loads labelled records from a two-column CSV file.
/// Implements the RecordSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<Record>, DatasetError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = parse_str(&contents)?;

        let counts = ClassCounts::of(&records);
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        tracing::debug!("{} spam, {} not spam", counts.spam, counts.not_spam);

        Ok(records)
    }
}

/// Parse the full text of a CSV file, header included.
pub fn parse_str(contents: &str) -> Result<Vec<Record>, DatasetError> {
    let lines: Vec<&str> = contents.lines().collect();
    parse_records(&lines)
}

/// A RecordSource over records already in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
}

#[cfg(test)]
impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
impl RecordSource for InMemorySource {
    fn load_all(&self) -> Result<Vec<Record>, DatasetError> {
        Ok(self.records.clone())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_loads_sample_file() {
        let f = write_csv(
            "Text,IsSpam\n\
             \"Buy one, get one free!\",1\n\
             \"Meeting scheduled for tomorrow at 2 PM\",0\n",
        );
        let records = CsvLoader::new(f.path()).load_all().unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("Buy one, get one free!", true),
                Record::new("Meeting scheduled for tomorrow at 2 PM", false),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let f = write_csv("Text,IsSpam\r\nwin big,true\r\nsee you,FALSE\r\n");
        let records = CsvLoader::new(f.path()).load_all().unwrap();
        assert_eq!(
            records,
            vec![Record::new("win big", true), Record::new("see you", false)]
        );
    }

    #[test]
    fn test_header_only_file() {
        let f = write_csv("Text,IsSpam\n");
        assert!(CsvLoader::new(f.path()).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file() {
        let f = write_csv("");
        assert!(CsvLoader::new(f.path()).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv"))
            .load_all()
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert_eq!(err.kind(), crate::domain::error::ErrorKind::Io);
    }

    #[test]
    fn test_bad_line_aborts_load() {
        let f = write_csv("Text,IsSpam\nok,1\nthree,fields,here\nok again,0\n");
        let err = CsvLoader::new(f.path()).load_all().unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let f = write_csv("Text,IsSpam\n\"a, b\",1\nc,0\nc,0\n");
        let loader = CsvLoader::new(f.path());
        assert_eq!(loader.load_all().unwrap(), loader.load_all().unwrap());
    }

    #[test]
    fn test_in_memory_source() {
        let src = InMemorySource::new(vec![Record::new("x", true)]);
        assert_eq!(src.load_all().unwrap().len(), 1);
    }
}
