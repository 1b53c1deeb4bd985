pub mod student;
pub mod subject;

pub use student::{Student, MAX_SUBJECTS};
pub use subject::{Grade, Subject};
