use crate::error::GradebookError;
use std::fmt;
use std::str::FromStr;

/// Top-level menu selections. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddStudent,
    RemoveStudent,
    AddGrade,
    RemoveGrade,
    ViewAverage,
    Exit,
}

pub const MENU_PROMPT: &str = "Choose an option:";
pub const MENU_OPTIONS: &str =
    "1: Add student, 2: Remove student, 3: Add grade, 4: Remove grade, 5: View average, X: Exit";

impl MenuCommand {
    pub fn key(self) -> &'static str {
        match self {
            MenuCommand::AddStudent => "1",
            MenuCommand::RemoveStudent => "2",
            MenuCommand::AddGrade => "3",
            MenuCommand::RemoveGrade => "4",
            MenuCommand::ViewAverage => "5",
            MenuCommand::Exit => "X",
        }
    }

    /// The line printed before reading this command's arguments.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            MenuCommand::AddStudent => Some("Enter the name of the student to add"),
            MenuCommand::RemoveStudent => Some("Enter the name of the student to remove"),
            MenuCommand::AddGrade => Some(
                "Enter student name, subject and grade (A+, A, F, ...) separated by spaces",
            ),
            MenuCommand::RemoveGrade => {
                Some("Enter student name and subject separated by spaces")
            }
            MenuCommand::ViewAverage => Some("Enter the name of the student"),
            MenuCommand::Exit => None,
        }
    }
}

impl FromStr for MenuCommand {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuCommand::AddStudent),
            "2" => Ok(MenuCommand::RemoveStudent),
            "3" => Ok(MenuCommand::AddGrade),
            "4" => Ok(MenuCommand::RemoveGrade),
            "5" => Ok(MenuCommand::ViewAverage),
            "X" => Ok(MenuCommand::Exit),
            other => Err(GradebookError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
