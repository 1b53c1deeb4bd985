//! # JSON Storage Module
//!
//! File-based storage implementation for the student record store. The
//! entire record set lives in one JSON document, keyed by email, and every
//! write replaces the whole document through a temp-file rename.

pub mod connection;
pub mod student_repository;

pub use connection::JsonConnection;
pub use student_repository::StudentRepository;
