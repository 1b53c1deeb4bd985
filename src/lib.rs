//! # Student Records
//!
//! Persistence-and-business-rule core for managing student academic
//! records: identity, credentials, subject enrollment, and grade
//! computation, backed by durable file storage. This crate:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to the domain services
//! - Persists the full record set as a single JSON document, keyed by email

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::json::JsonConnection;

/// Main backend struct that wires all services over one data directory.
pub struct Backend {
    pub student_service: domain::StudentService,
    pub subject_service: domain::SubjectService,
    pub admin_service: domain::AdminService,
}

impl Backend {
    /// Create a backend over the default data directory.
    pub fn new() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Ok(Self::with_connection(connection))
    }

    /// Create a backend over an explicit connection.
    pub fn with_connection(connection: Arc<JsonConnection>) -> Self {
        Backend {
            student_service: domain::StudentService::new(connection.clone()),
            subject_service: domain::SubjectService::new(connection.clone()),
            admin_service: domain::AdminService::new(connection),
        }
    }
}
