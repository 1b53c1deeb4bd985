use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grades in the university grading system, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Z,
    P,
    C,
    D,
    HD,
}

impl Grade {
    /// All grades in reporting order (best first).
    pub const ALL: [Grade; 5] = [Grade::HD, Grade::D, Grade::C, Grade::P, Grade::Z];

    /// Map a mark to its letter grade.
    ///
    /// Accepts fractional marks so that class averages grade exactly the
    /// same way single-subject marks do.
    pub fn from_mark(mark: f64) -> Self {
        if mark < 50.0 {
            Grade::Z
        } else if mark < 65.0 {
            Grade::P
        } else if mark < 75.0 {
            Grade::C
        } else if mark < 85.0 {
            Grade::D
        } else {
            Grade::HD
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Z => "Z",
            Grade::P => "P",
            Grade::C => "C",
            Grade::D => "D",
            Grade::HD => "HD",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject enrollment: a 3-digit id, the awarded mark, and the grade
/// derived from that mark.
///
/// Subjects are created whole at enrollment time and are immutable
/// afterwards; the grade is never stored independently of a valid mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub mark: u32,
    pub grade: Grade,
}

impl Subject {
    /// Build a subject from an id and mark; the grade is always derived.
    pub fn new(id: String, mark: u32) -> Self {
        let grade = Grade::from_mark(mark as f64);
        Self { id, mark, grade }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_mark(49.9), Grade::Z);
        assert_eq!(Grade::from_mark(50.0), Grade::P);
        assert_eq!(Grade::from_mark(64.9), Grade::P);
        assert_eq!(Grade::from_mark(65.0), Grade::C);
        assert_eq!(Grade::from_mark(74.9), Grade::C);
        assert_eq!(Grade::from_mark(75.0), Grade::D);
        assert_eq!(Grade::from_mark(84.9), Grade::D);
        assert_eq!(Grade::from_mark(85.0), Grade::HD);
        assert_eq!(Grade::from_mark(100.0), Grade::HD);
        assert_eq!(Grade::from_mark(0.0), Grade::Z);
    }

    #[test]
    fn test_subject_derives_grade_from_mark() {
        let subject = Subject::new("042".to_string(), 88);
        assert_eq!(subject.grade, Grade::HD);

        let subject = Subject::new("043".to_string(), 25);
        assert_eq!(subject.grade, Grade::Z);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        let json = serde_json::to_string(&Grade::HD).unwrap();
        assert_eq!(json, "\"HD\"");
        let back: Grade = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(back, Grade::P);
    }
}
