//! Source of generated identifiers and marks.
//!
//! Id and mark generation is a side effect of entity construction in this
//! system, so it sits behind a trait: the services take any
//! `RecordGenerator`, and tests substitute deterministic sequences for the
//! production RNG.

use rand::Rng;

pub trait RecordGenerator: Send + Sync {
    /// Zero-padded 6-digit student id candidate.
    fn student_id(&self) -> String;

    /// Zero-padded 3-digit subject id candidate.
    fn subject_id(&self) -> String;

    /// Subject mark in [25, 100].
    fn mark(&self) -> u32;
}

/// Production generator backed by the thread-local RNG.
#[derive(Clone, Copy, Default)]
pub struct RandomGenerator;

impl RecordGenerator for RandomGenerator {
    fn student_id(&self) -> String {
        format!("{:06}", rand::thread_rng().gen_range(1..=999_999))
    }

    fn subject_id(&self) -> String {
        format!("{:03}", rand::thread_rng().gen_range(1..=999))
    }

    fn mark(&self) -> u32 {
        rand::thread_rng().gen_range(25..=100)
    }
}
