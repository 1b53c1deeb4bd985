use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the data directory holding the student record file.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given base directory, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// Honours the `STUDENT_RECORDS_DIR` environment variable, falling back
    /// to `~/.student-records`.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("STUDENT_RECORDS_DIR") {
            info!("Using data directory from STUDENT_RECORDS_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir).join(".student-records");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the single JSON document holding every student record.
    pub fn students_file_path(&self) -> PathBuf {
        self.base_directory.join("students.json")
    }
}
