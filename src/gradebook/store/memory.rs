use super::RecordStore;
use crate::error::{GradebookError, Result};
use crate::model::Student;

/// In-memory student list. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| s.name == name)
    }
}

impl RecordStore for InMemoryStore {
    fn insert_student(&mut self, student: Student) -> Result<()> {
        if self.position(&student.name).is_some() {
            return Err(GradebookError::DuplicateStudent(student.name));
        }
        self.students.push(student);
        Ok(())
    }

    fn remove_student(&mut self, name: &str) -> Result<Student> {
        let idx = self
            .position(name)
            .ok_or_else(|| GradebookError::StudentNotFound(name.to_string()))?;
        Ok(self.students.remove(idx))
    }

    fn get_student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }

    fn get_student_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.name == name)
    }

    fn list_students(&self) -> &[Student] {
        &self.students
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Grade, Rating};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, name: &str) -> Self {
            self.store.insert_student(Student::new(name)).unwrap();
            self
        }

        pub fn with_graded_student(mut self, name: &str, grades: &[(&str, Rating)]) -> Self {
            let mut student = Student::new(name);
            student.grades = grades
                .iter()
                .map(|(subject, rating)| Grade::new(*subject, *rating))
                .collect();
            self.store.insert_student(student).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Rating;

    #[test]
    fn insert_and_get() {
        let mut store = InMemoryStore::new();
        store.insert_student(Student::new("Alice")).unwrap();

        let alice = store.get_student("Alice").unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(alice.grades.is_empty());
        assert!(store.get_student("alice").is_none());
    }

    #[test]
    fn insert_duplicate_fails_and_keeps_one_record() {
        let mut store = StoreFixture::new().with_student("Alice").store;

        let err = store.insert_student(Student::new("Alice")).unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateStudent(ref n) if n == "Alice"));
        assert_eq!(store.list_students().len(), 1);
    }

    #[test]
    fn remove_returns_record_with_grades() {
        let mut store = StoreFixture::new()
            .with_graded_student("Alice", &[("Math", Rating::A)])
            .store;

        let removed = store.remove_student("Alice").unwrap();
        assert_eq!(removed.grades.len(), 1);
        assert!(store.list_students().is_empty());
    }

    #[test]
    fn remove_missing_fails() {
        let mut store = InMemoryStore::new();
        let err = store.remove_student("Ghost").unwrap_err();
        assert!(matches!(err, GradebookError::StudentNotFound(ref n) if n == "Ghost"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = StoreFixture::new()
            .with_student("Charlie")
            .with_student("Alice")
            .with_student("Bob")
            .store;
        store.remove_student("Alice").unwrap();

        let names: Vec<&str> = store
            .list_students()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Charlie", "Bob"]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut store = StoreFixture::new().with_student("Alice").store;
        store
            .get_student_mut("Alice")
            .unwrap()
            .grades
            .push(crate::model::Grade::new("Art", Rating::B));

        assert_eq!(store.get_student("Alice").unwrap().grades.len(), 1);
    }
}
