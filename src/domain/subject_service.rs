use log::{info, warn};
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::generator::{RandomGenerator, RecordGenerator};
use crate::domain::models::student::{Student, MAX_SUBJECTS};
use crate::domain::models::subject::Subject;
use crate::storage::json::{JsonConnection, StudentRepository};
use crate::storage::traits::StudentStore;

/// Maximum draws before giving up on finding an unused subject id.
const MAX_ID_ATTEMPTS: usize = 1_000;

/// Service for enrolling students in subjects, dropping them, and listing
/// current enrollments.
pub struct SubjectService {
    repository: StudentRepository,
    generator: Arc<dyn RecordGenerator>,
}

impl SubjectService {
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

    /// Enroll the student in a freshly generated subject.
    ///
    /// The subject id is unique among the student's current subjects only,
    /// not globally. Fails once the student already carries 4 subjects,
    /// before anything is persisted.
    pub fn enroll(&self, student: &mut Student) -> Result<Subject, DomainError> {
        if student.subjects.len() >= MAX_SUBJECTS {
            warn!(
                "Enrollment rejected for {}: already at {} subjects",
                student.email, MAX_SUBJECTS
            );
            return Err(DomainError::CapacityExceeded);
        }

        let id = self.generate_subject_id(student)?;
        let subject = Subject::new(id, self.generator.mark());
        student.subjects.push(subject.clone());
        self.persist(student)?;

        info!(
            "Enrolled {} in subject {} ({}/{})",
            student.email,
            subject.id,
            student.subjects.len(),
            MAX_SUBJECTS
        );
        Ok(subject)
    }

    /// Drop an enrolled subject by id.
    pub fn drop_subject(
        &self,
        student: &mut Student,
        subject_id: &str,
    ) -> Result<(), DomainError> {
        if !student.has_subject(subject_id) {
            return Err(DomainError::SubjectNotFound(subject_id.to_string()));
        }

        student.subjects.retain(|s| s.id != subject_id);
        self.persist(student)?;

        info!("Dropped subject {} for {}", subject_id, student.email);
        Ok(())
    }

    /// Enrolled subjects in enrollment order. Read-only; no store access.
    pub fn list<'a>(&self, student: &'a Student) -> &'a [Subject] {
        &student.subjects
    }

    fn persist(&self, student: &Student) -> Result<(), DomainError> {
        let mut records = self.repository.load()?;
        records.insert(student.email.clone(), student.clone());
        self.repository.save(&records)?;
        Ok(())
    }

    /// Draw 3-digit ids until one misses the student's current subjects.
    fn generate_subject_id(&self, student: &Student) -> Result<String, DomainError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.generator.subject_id();
            if !student.has_subject(&candidate) {
                return Ok(candidate);
            }
        }

        Err(DomainError::Storage(anyhow::anyhow!(
            "exhausted {} attempts generating a unique subject id",
            MAX_ID_ATTEMPTS
        )))
    }
}
