//! # Storage Traits
//!
//! Storage abstraction for the student record store, allowing different
//! backends to be used interchangeably by the domain layer.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::domain::models::student::Student;

/// Interface for the durable student record store.
///
/// The store holds the entire record set as a single mapping from email to
/// student. Every mutation in the system is a full load, an in-memory
/// edit, then a full save; there is no partial-update API.
pub trait StudentStore: Send + Sync {
    /// Load the entire record set, keyed by email.
    ///
    /// A missing backing file is initialized to an empty persisted map
    /// rather than treated as an error.
    fn load(&self) -> Result<BTreeMap<String, Student>>;

    /// Replace the entire persisted record set.
    ///
    /// The write must be atomic from a reader's perspective: a reader never
    /// observes a partially written set.
    fn save(&self, records: &BTreeMap<String, Student>) -> Result<()>;

    /// Remove every record, equivalent to saving an empty map.
    fn clear(&self) -> Result<()>;
}
