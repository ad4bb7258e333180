use crate::commands::{CmdMessage, CmdResult};
use crate::config::DuplicateSubjects;
use crate::error::{GradebookError, Result};
use crate::model::Grade;
use crate::store::RecordStore;
use tracing::info;

pub fn run<S: RecordStore>(
    store: &mut S,
    name: &str,
    grade: Grade,
    duplicates: DuplicateSubjects,
) -> Result<CmdResult> {
    let student = store
        .get_student_mut(name)
        .ok_or_else(|| GradebookError::StudentNotFound(name.to_string()))?;

    let existing = match duplicates {
        DuplicateSubjects::Append => None,
        DuplicateSubjects::Replace => student
            .grades
            .iter()
            .position(|g| g.subject == grade.subject),
    };

    let verb = match existing {
        Some(idx) => {
            student.grades[idx] = grade.clone();
            "Updated"
        }
        None => {
            student.grades.push(grade.clone());
            "Added"
        }
    };
    info!(student = name, subject = %grade.subject, "grade {}", verb.to_lowercase());

    let rating = grade.rating.map(|r| r.label()).unwrap_or("-");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} grade for {}: {} {}",
        verb, name, grade.subject, rating
    )));
    Ok(result.with_affected_grades(vec![grade]))
}
