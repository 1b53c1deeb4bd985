use thiserror::Error;

/// Failure modes of the core services.
///
/// Format errors are detected before any store access and never mutate
/// state. `DuplicateEmail` and `CapacityExceeded` are detected after a
/// load but before any save, so no partial mutation is ever persisted.
/// `Storage` wraps an I/O fault during load/save; it aborts the operation
/// in progress and is never retried internally.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid email format, expected firstname.lastname@university.com")]
    InvalidEmailFormat,

    #[error("invalid password format: must start with an uppercase letter, contain at least five letters, and end with three or more digits")]
    InvalidPasswordFormat,

    #[error("a student is already registered under {0}")]
    DuplicateEmail(String),

    #[error("student does not exist: {0}")]
    StudentNotFound(String),

    #[error("subject {0} not found")]
    SubjectNotFound(String),

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("students are allowed to enrol in 4 subjects only")]
    CapacityExceeded,

    #[error("storage failure: {0}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for DomainError {
    fn from(err: anyhow::Error) -> Self {
        DomainError::Storage(err)
    }
}
