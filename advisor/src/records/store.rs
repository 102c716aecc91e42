//! Append-only CSV record store.
//!
//! Each append serializes the full row in memory first and then issues a
//! single write, so a failing write never leaves half a row behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::{PersistenceError, PersistenceResult};
use super::record::StudentRecord;

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first if the file is new.
    pub fn append(&self, record: &StudentRecord) -> PersistenceResult<()> {
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(Vec::new());
        writer.serialize(record)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| PersistenceError::from_io(&self.path, e.into_error()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PersistenceError::from_io(&self.path, e))?;
        file.write_all(&bytes)
            .and_then(|_| file.flush())
            .map_err(|e| PersistenceError::from_io(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            name = %record.name,
            top = %record.top_career_match,
            "Saved student record"
        );
        Ok(())
    }

    /// Every saved row, oldest first. A store that does not exist yet is
    /// empty.
    pub fn read_all(&self) -> PersistenceResult<Vec<StudentRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| self.classify_csv(e))?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<StudentRecord>, _>>()?;
        Ok(records)
    }

    pub fn count(&self) -> PersistenceResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Copy the accumulated store to `dest`. Returns the bytes copied.
    pub fn export(&self, dest: impl AsRef<Path>) -> PersistenceResult<u64> {
        let dest = dest.as_ref();
        if !self.path.exists() {
            return Err(PersistenceError::NoRecords {
                path: self.path.clone(),
            });
        }
        let bytes = fs::copy(&self.path, dest).map_err(|e| PersistenceError::from_io(dest, e))?;
        tracing::info!(
            from = %self.path.display(),
            to = %dest.display(),
            bytes,
            "Exported student records"
        );
        Ok(bytes)
    }

    fn classify_csv(&self, err: csv::Error) -> PersistenceError {
        if !err.is_io_error() {
            return PersistenceError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => PersistenceError::from_io(&self.path, io),
            other => PersistenceError::from_io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Background, StudentProfile};
    use tempfile::tempdir;

    fn record(name: &str) -> StudentRecord {
        let profile = StudentProfile {
            name: name.into(),
            age: Some(18),
            background: Background::Commerce,
            ..Default::default()
        };
        StudentRecord::new(&profile, None)
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("Ana")).unwrap();
        store.append(&record("Bo")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Timestamp,Name,Age,Gender,Background"));
        assert_eq!(content.matches("Timestamp").count(), 1);
    }

    #[test]
    fn test_read_back() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        let saved = record("Ana, Jr.");
        store.append(&saved).unwrap();
        let rows = store.read_all().unwrap();
        assert_eq!(rows, vec![saved]);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_missing_store_reads_empty() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("none.csv"));
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_export_copies_all_rows() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("Ana")).unwrap();
        store.append(&record("Bo")).unwrap();
        let dest = dir.path().join("export.csv");
        let bytes = store.export(&dest).unwrap();
        assert!(bytes > 0);
        assert_eq!(RecordStore::new(&dest).count().unwrap(), 2);
    }

    #[test]
    fn test_export_without_records() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        let err = store.export(dir.path().join("out.csv")).unwrap_err();
        assert!(matches!(err, PersistenceError::NoRecords { .. }));
    }

    #[test]
    fn test_unwritable_location_reports_error_and_keeps_rows() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("Ana")).unwrap();

        // A directory where the file should be cannot be appended to.
        let blocked = RecordStore::new(dir.path());
        assert!(blocked.append(&record("Bo")).is_err());
        assert_eq!(store.count().unwrap(), 1);
    }
}
