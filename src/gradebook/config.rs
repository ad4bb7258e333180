use crate::error::{GradebookError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the menu does with a selection outside `1`-`5`/`X`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCommand {
    /// Print an error and end the session
    #[default]
    Exit,
    /// Print an error and show the menu again
    Reprompt,
}

/// How a grade for a subject the student already has is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateSubjects {
    /// Keep both grades
    #[default]
    Append,
    /// Overwrite the first grade with the same subject
    Replace,
}

/// Whether D+ and D carry grade points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DRatings {
    /// D+ and D add nothing to the sum but still count as grades
    #[default]
    Unscored,
    /// D+ = 1.5, D = 1.0
    Scored,
}

/// Behavior policies for a gradebook session, optionally read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GradebookConfig {
    #[serde(default)]
    pub on_unknown_command: UnknownCommand,

    #[serde(default)]
    pub duplicate_subjects: DuplicateSubjects,

    #[serde(default)]
    pub d_ratings: DRatings,
}

impl GradebookConfig {
    /// Load config from `path`, or return defaults when no path is given.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            GradebookError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: GradebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        on_unknown_command: Option<UnknownCommand>,
        duplicate_subjects: Option<DuplicateSubjects>,
        d_ratings: Option<DRatings>,
    ) -> Self {
        if let Some(v) = on_unknown_command {
            self.on_unknown_command = v;
        }
        if let Some(v) = duplicate_subjects {
            self.duplicate_subjects = v;
        }
        if let Some(v) = d_ratings {
            self.d_ratings = v;
        }
        self
    }
}
