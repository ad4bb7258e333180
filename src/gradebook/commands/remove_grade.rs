use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::{debug, info};

/// Removes the first grade for `subject`. A missing student, an empty grade list, or
/// no matching subject leaves the store untouched and is not an error.
pub fn run<S: RecordStore>(store: &mut S, name: &str, subject: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let removed = store.get_student_mut(name).and_then(|student| {
        let idx = student.grades.iter().position(|g| g.subject == subject)?;
        Some(student.grades.remove(idx))
    });

    match removed {
        Some(grade) => {
            info!(student = name, subject, "grade removed");
            result.add_message(CmdMessage::success(format!(
                "Removed {} grade for {}",
                subject, name
            )));
            Ok(result.with_affected_grades(vec![grade]))
        }
        None => {
            debug!(student = name, subject, "no grade to remove");
            result.add_message(CmdMessage::info(format!(
                "No {} grade for {}, nothing removed",
                subject, name
            )));
            Ok(result)
        }
    }
}
