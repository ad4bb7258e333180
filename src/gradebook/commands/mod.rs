use crate::model::{Grade, Student};

pub mod add_grade;
pub mod add_student;
pub mod average;
pub mod remove_grade;
pub mod remove_student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A student's grades together with their formatted grade-point average.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub student: String,
    pub grades: Vec<Grade>,
    /// Always two decimal places, e.g. `"4.25"`
    pub average: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub affected_grades: Vec<Grade>,
    pub report: Option<GradeReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_affected_grades(mut self, grades: Vec<Grade>) -> Self {
        self.affected_grades = grades;
        self
    }

    pub fn with_report(mut self, report: GradeReport) -> Self {
        self.report = Some(report);
        self
    }
}
