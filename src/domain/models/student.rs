use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::subject::Subject;

/// Maximum number of subjects a student may be enrolled in at once.
pub const MAX_SUBJECTS: usize = 4;

/// Domain model representing a registered student.
///
/// The email doubles as the record store's primary key and is immutable
/// after registration. Subjects are kept in enrollment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub subjects: Vec<Subject>,
}

impl Student {
    /// Create a freshly registered student with no subjects.
    pub fn new(id: String, name: String, email: String, password: String) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at: Utc::now(),
            subjects: Vec::new(),
        }
    }

    /// Unweighted mean of all enrolled subject marks; 0 with no subjects.
    pub fn average_mark(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        let total: u32 = self.subjects.iter().map(|s| s.mark).sum();
        total as f64 / self.subjects.len() as f64
    }

    /// A student passes on an average mark of 50 or more.
    pub fn is_passing(&self) -> bool {
        self.average_mark() >= 50.0
    }

    pub fn has_subject(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s.id == subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with_marks(marks: &[u32]) -> Student {
        let mut student = Student::new(
            "123456".to_string(),
            "Test Student".to_string(),
            "test.student@university.com".to_string(),
            "Testpass123".to_string(),
        );
        for (i, mark) in marks.iter().enumerate() {
            student
                .subjects
                .push(Subject::new(format!("{:03}", i + 1), *mark));
        }
        student
    }

    #[test]
    fn test_average_mark_with_no_subjects_is_zero() {
        let student = student_with_marks(&[]);
        assert_eq!(student.average_mark(), 0.0);
        assert!(!student.is_passing());
    }

    #[test]
    fn test_average_mark_is_unweighted_mean() {
        let student = student_with_marks(&[40, 60, 80]);
        assert_eq!(student.average_mark(), 60.0);
    }

    #[test]
    fn test_average_of_exactly_fifty_passes() {
        let student = student_with_marks(&[40, 60]);
        assert_eq!(student.average_mark(), 50.0);
        assert!(student.is_passing());
    }

    #[test]
    fn test_has_subject() {
        let student = student_with_marks(&[70]);
        assert!(student.has_subject("001"));
        assert!(!student.has_subject("999"));
    }
}
