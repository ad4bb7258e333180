use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::RecordStore;
use tracing::info;

pub fn run<S: RecordStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let student = Student::new(name);
    store.insert_student(student.clone())?;
    info!(student = name, "student added");

    let mut result = CmdResult::default().with_affected_students(vec![student]);
    result.add_message(CmdMessage::success(format!("Added student {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradebookError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_student_without_grades() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Alice").unwrap();

        assert_eq!(result.affected_students.len(), 1);
        assert_eq!(result.messages[0].content, "Added student Alice");
        assert!(store.get_student("Alice").unwrap().grades.is_empty());
    }

    #[test]
    fn duplicate_is_reported_and_not_added() {
        let mut store = StoreFixture::new().with_student("Alice").store;

        let err = run(&mut store, "Alice").unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateStudent(_)));
        assert_eq!(store.list_students().len(), 1);
    }
}
