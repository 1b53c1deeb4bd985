//! Domain layer: entities, credential validation, and the three rule
//! engines operating on the record store.

pub mod admin_service;
pub mod errors;
pub mod generator;
pub mod models;
pub mod student_service;
pub mod subject_service;
pub mod validation;

pub use admin_service::AdminService;
pub use errors::DomainError;
pub use generator::{RandomGenerator, RecordGenerator};
pub use student_service::StudentService;
pub use subject_service::SubjectService;
