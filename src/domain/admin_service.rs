use log::{info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::models::subject::Grade;
use crate::storage::json::{JsonConnection, StudentRepository};
use crate::storage::traits::StudentStore;

/// Row in the all-students listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub name: String,
    pub id: String,
    pub email: String,
}

/// Row in the grade-grouping report.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeGroupEntry {
    pub name: String,
    pub id: String,
    pub grade: Grade,
    pub average_mark: f64,
}

/// Row in the pass/fail partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionEntry {
    pub name: String,
    pub id: String,
    pub average_mark: f64,
}

/// Service for cross-record administration: listing, grade grouping,
/// pass/fail partitioning, removal and bulk clear.
pub struct AdminService {
    repository: StudentRepository,
}

impl AdminService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            repository: StudentRepository::new(connection),
        }
    }

    /// Every registered student, in store key order (ascending email).
    pub fn list_all(&self) -> Result<Vec<StudentSummary>, DomainError> {
        let records = self.repository.load()?;
        Ok(records
            .values()
            .map(|student| StudentSummary {
                name: student.name.clone(),
                id: student.id.clone(),
                email: student.email.clone(),
            })
            .collect())
    }

    /// Group students by the grade of their average mark.
    ///
    /// All five grades are present as keys even when empty. The bucket is
    /// recomputed from the average; the per-subject grades stored on each
    /// record play no part here.
    pub fn group_by_grade(&self) -> Result<BTreeMap<Grade, Vec<GradeGroupEntry>>, DomainError> {
        let records = self.repository.load()?;

        let mut groups: BTreeMap<Grade, Vec<GradeGroupEntry>> =
            Grade::ALL.iter().map(|g| (*g, Vec::new())).collect();

        for student in records.values() {
            let average_mark = student.average_mark();
            let grade = Grade::from_mark(average_mark);
            groups.entry(grade).or_default().push(GradeGroupEntry {
                name: student.name.clone(),
                id: student.id.clone(),
                grade,
                average_mark,
            });
        }

        Ok(groups)
    }

    /// Partition all students into (passed, failed) by average mark >= 50.
    ///
    /// Students with zero subjects average 0 and fail.
    pub fn partition_pass_fail(
        &self,
    ) -> Result<(Vec<PartitionEntry>, Vec<PartitionEntry>), DomainError> {
        let records = self.repository.load()?;

        let mut passed = Vec::new();
        let mut failed = Vec::new();
        for student in records.values() {
            let entry = PartitionEntry {
                name: student.name.clone(),
                id: student.id.clone(),
                average_mark: student.average_mark(),
            };
            if student.is_passing() {
                passed.push(entry);
            } else {
                failed.push(entry);
            }
        }

        Ok((passed, failed))
    }

    /// Remove a student by id.
    ///
    /// Ids are not the store key, so this scans the full record set.
    /// Returns false, leaving the store untouched, when no student carries
    /// the id.
    pub fn remove_student(&self, student_id: &str) -> Result<bool, DomainError> {
        let mut records = self.repository.load()?;

        let email = records
            .values()
            .find(|student| student.id == student_id)
            .map(|student| student.email.clone());

        match email {
            Some(email) => {
                records.remove(&email);
                self.repository.save(&records)?;
                info!("Removed student {} ({})", student_id, email);
                Ok(true)
            }
            None => {
                warn!("No student with id {} to remove", student_id);
                Ok(false)
            }
        }
    }

    /// Delete every student record.
    pub fn clear_all(&self) -> Result<(), DomainError> {
        self.repository.clear()?;
        info!("Cleared all student data");
        Ok(())
    }
}
