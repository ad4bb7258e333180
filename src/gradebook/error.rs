use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("Invalid {field} '{value}': only letters and digits are allowed")]
    InvalidToken { field: &'static str, value: String },

    #[error("Expected {expected} values separated by single spaces, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },

    #[error("Unknown rating '{0}' (expected one of A+, A, B+, B, C+, C, D+, D, F)")]
    UnknownRating(String),

    #[error("Student {0} already exists")]
    DuplicateStudent(String),

    #[error("Student {0} not found")]
    StudentNotFound(String),

    #[error("Student {0} has no grades")]
    NoGrades(String),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl GradebookError {
    /// User-input failures that are reported at the prompt; everything else aborts the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GradebookError::Io(_) | GradebookError::Serialization(_) | GradebookError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;
