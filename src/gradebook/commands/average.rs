use crate::commands::{CmdResult, GradeReport};
use crate::config::DRatings;
use crate::error::{GradebookError, Result};
use crate::model::Grade;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, name: &str, d_ratings: DRatings) -> Result<CmdResult> {
    let student = store
        .get_student(name)
        .ok_or_else(|| GradebookError::StudentNotFound(name.to_string()))?;

    let average = average_points(&student.grades, d_ratings)
        .ok_or_else(|| GradebookError::NoGrades(name.to_string()))?;

    let report = GradeReport {
        student: student.name.clone(),
        grades: student.grades.clone(),
        average: format_average(average),
    };
    Ok(CmdResult::default().with_report(report))
}

/// Mean grade points over every grade, unscored ones included in the count as 0.
/// `None` for an empty slice.
fn average_points(grades: &[Grade], d_ratings: DRatings) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    // Folding from +0.0: an empty f64 sum is -0.0, which would print as "-0.00"
    let sum = grades
        .iter()
        .map(|g| g.rating.and_then(|r| r.points(d_ratings)).unwrap_or(0.0))
        .fold(0.0, |acc, points| acc + points);
    Some(sum / grades.len() as f64)
}

/// Two decimals. Exact binary ties round half to even (0.125 -> "0.12").
fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}
