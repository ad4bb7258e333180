use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::info;

pub fn run<S: RecordStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let removed = store.remove_student(name)?;
    info!(student = name, grades = removed.grades.len(), "student removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed student {}", name)));
    Ok(result.with_affected_students(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_student;
    use crate::error::GradebookError;
    use crate::model::Rating;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_whole_record() {
        let mut store = StoreFixture::new()
            .with_graded_student("Alice", &[("Math", Rating::A), ("Art", Rating::B)])
            .with_student("Bob")
            .store;

        let result = run(&mut store, "Alice").unwrap();
        assert_eq!(result.affected_students[0].grades.len(), 2);
        assert!(store.get_student("Alice").is_none());
        assert!(store.get_student("Bob").is_some());
    }

    #[test]
    fn missing_student_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Ghost").unwrap_err();
        assert!(matches!(err, GradebookError::StudentNotFound(_)));
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut store = StoreFixture::new()
            .with_graded_student("Bob", &[("Math", Rating::C)])
            .store;
        let before = store.list_students().to_vec();

        for name in ["Alice", "x", "Student42", "ABCdef0123"] {
            add_student::run(&mut store, name).unwrap();
            run(&mut store, name).unwrap();
            assert_eq!(store.list_students(), before.as_slice());
        }
    }
}
