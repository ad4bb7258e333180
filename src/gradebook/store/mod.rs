//! # Storage Layer
//!
//! Student records live behind the [`RecordStore`] trait so the command layer never
//! touches a concrete collection. The only backend is [`memory::InMemoryStore`]:
//! records exist for the lifetime of the process and are never written anywhere.
//!
//! Stores are keyed by student name. Implementations must keep names unique and
//! preserve insertion order when listing.

use crate::error::Result;
use crate::model::Student;

pub mod memory;

/// Abstract interface for student record storage.
pub trait RecordStore {
    /// Insert a new student. Fails with `DuplicateStudent` if the name is taken.
    fn insert_student(&mut self, student: Student) -> Result<()>;

    /// Remove a student and all of their grades, returning the removed record.
    fn remove_student(&mut self, name: &str) -> Result<Student>;

    fn get_student(&self, name: &str) -> Option<&Student>;

    fn get_student_mut(&mut self, name: &str) -> Option<&mut Student>;

    /// All students in insertion order
    fn list_students(&self) -> &[Student];
}
