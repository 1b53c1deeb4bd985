//! # JSON Student Repository
//!
//! File-based storage for the full student record set using a single JSON
//! document `students.json` in the data directory.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "jane.doe@university.com": {
//!     "id": "123456",
//!     "name": "Jane Doe",
//!     "email": "jane.doe@university.com",
//!     "password": "Janedoe123",
//!     "created_at": "2025-01-21T19:30:00Z",
//!     "subjects": [
//!       { "id": "042", "mark": 88, "grade": "HD" }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Features
//!
//! - Whole-map persistence: every mutation is load, edit in memory, save
//! - Atomic file writes with temp files
//! - A missing file auto-initializes to an empty persisted map

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::student::Student;
use crate::storage::traits::StudentStore;

/// JSON-backed student repository holding the whole record set in one file.
#[derive(Clone)]
pub struct StudentRepository {
    connection: Arc<JsonConnection>,
}

impl StudentRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Load the record file, creating an empty one if it doesn't exist.
    fn load_or_create(&self) -> Result<BTreeMap<String, Student>> {
        let path = self.connection.students_file_path();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let records: BTreeMap<String, Student> = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            debug!("Loaded {} student records from {:?}", records.len(), path);
            Ok(records)
        } else {
            let records = BTreeMap::new();
            self.write_records(&records)?;
            info!("Initialized empty student record file at {:?}", path);
            Ok(records)
        }
    }

    /// Serialize the record set and atomically replace the live file.
    fn write_records(&self, records: &BTreeMap<String, Student>) -> Result<()> {
        let path = self.connection.students_file_path();
        let content = serde_json::to_string_pretty(records)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to replace {}", path.display()))?;

        Ok(())
    }
}

impl StudentStore for StudentRepository {
    fn load(&self) -> Result<BTreeMap<String, Student>> {
        self.load_or_create()
    }

    fn save(&self, records: &BTreeMap<String, Student>) -> Result<()> {
        self.write_records(records)?;
        debug!("Saved {} student records", records.len());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.write_records(&BTreeMap::new())?;
        info!("Cleared all student records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (StudentRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (StudentRepository::new(Arc::new(connection)), temp_dir)
    }

    fn sample_student(id: &str, email: &str) -> Student {
        Student::new(
            id.to_string(),
            "Sample Student".to_string(),
            email.to_string(),
            "Sample123".to_string(),
        )
    }

    #[test]
    fn test_missing_file_initializes_empty() {
        let (repo, temp_dir) = setup_test_repo();

        let records = repo.load().expect("load should auto-initialize");
        assert!(records.is_empty());
        assert!(temp_dir.path().join("students.json").exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut records = BTreeMap::new();
        let student = sample_student("123456", "jane.doe@university.com");
        records.insert(student.email.clone(), student);
        repo.save(&records).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, records);

        // save(load()) is idempotent
        repo.save(&loaded).unwrap();
        assert_eq!(repo.load().unwrap(), loaded);
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let (repo, temp_dir) = setup_test_repo();

        let mut records = BTreeMap::new();
        let student = sample_student("654321", "john.smith@university.com");
        records.insert(student.email.clone(), student);
        repo.save(&records).unwrap();

        assert!(temp_dir.path().join("students.json").exists());
        assert!(!temp_dir.path().join("students.tmp").exists());
    }

    #[test]
    fn test_clear_empties_the_store() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut records = BTreeMap::new();
        let student = sample_student("111111", "a.b@university.com");
        records.insert(student.email.clone(), student);
        repo.save(&records).unwrap();

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
