use log::{info, warn};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::generator::{RandomGenerator, RecordGenerator};
use crate::domain::models::student::Student;
use crate::domain::validation::{is_valid_email, is_valid_password};
use crate::storage::json::{JsonConnection, StudentRepository};
use crate::storage::traits::StudentStore;

/// Maximum draws before giving up on finding an unused student id.
///
/// The id space is 10^6 and the expected record count is tiny next to it,
/// so a collision streak this long never happens in practice; the cap just
/// keeps the loop provably finite.
const MAX_ID_ATTEMPTS: usize = 10_000;

/// Service for registering, authenticating and updating students.
pub struct StudentService {
    repository: StudentRepository,
    generator: Arc<dyn RecordGenerator>,
}

impl StudentService {
    /// Create a service with the production random generator.
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self::with_generator(connection, Arc::new(RandomGenerator))
    }

    /// Create a service with an explicit id/mark generator.
    pub fn with_generator(
        connection: Arc<JsonConnection>,
        generator: Arc<dyn RecordGenerator>,
    ) -> Self {
        Self {
            repository: StudentRepository::new(connection),
            generator,
        }
    }

    /// Register a new student.
    ///
    /// Format checks run before any store access. The email must not
    /// already key a record; on success the student is persisted with a
    /// fresh globally-unique id and zero subjects.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Student, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::InvalidEmailFormat);
        }
        if !is_valid_password(password) {
            return Err(DomainError::InvalidPasswordFormat);
        }

        let mut records = self.repository.load()?;
        if records.contains_key(email) {
            warn!("Registration rejected, email already in use: {}", email);
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        let id = self.generate_student_id(&records)?;
        let student = Student::new(
            id,
            name.to_string(),
            email.to_string(),
            password.to_string(),
        );
        records.insert(student.email.clone(), student.clone());
        self.repository.save(&records)?;

        info!("Registered student {} with id {}", student.email, student.id);
        Ok(student)
    }

    /// Authenticate a student by email and password.
    ///
    /// Format checks take precedence over existence and credential checks;
    /// the password comparison is an exact case-sensitive match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Student, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::InvalidEmailFormat);
        }
        if !is_valid_password(password) {
            return Err(DomainError::InvalidPasswordFormat);
        }

        let records = self.repository.load()?;
        let student = records
            .get(email)
            .ok_or_else(|| DomainError::StudentNotFound(email.to_string()))?;

        if student.password != password {
            warn!("Password mismatch for {}", email);
            return Err(DomainError::InvalidCredentials);
        }

        info!("Authenticated student {}", email);
        Ok(student.clone())
    }

    /// Change a student's password and persist the record under its
    /// existing email key.
    pub fn change_password(
        &self,
        student: &mut Student,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if !is_valid_password(new_password) {
            return Err(DomainError::InvalidPasswordFormat);
        }

        student.password = new_password.to_string();
        let mut records = self.repository.load()?;
        records.insert(student.email.clone(), student.clone());
        self.repository.save(&records)?;

        info!("Updated password for {}", student.email);
        Ok(())
    }

    /// Draw 6-digit ids until one misses the current id set.
    fn generate_student_id(
        &self,
        records: &BTreeMap<String, Student>,
    ) -> Result<String, DomainError> {
        let existing: HashSet<&str> = records.values().map(|s| s.id.as_str()).collect();

        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.generator.student_id();
            if !existing.contains(candidate.as_str()) {
                return Ok(candidate);
            }
        }

        Err(DomainError::Storage(anyhow::anyhow!(
            "exhausted {} attempts generating a unique student id",
            MAX_ID_ATTEMPTS
        )))
    }
}
