use clap::{ArgAction, Parser};
use gradebook::config::{DRatings, DuplicateSubjects, UnknownCommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradebook", version)]
#[command(about = "Interactive in-memory student grade book", long_about = None)]
pub struct Cli {
    /// JSON config file with behavior policies
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do when the menu selection is not recognized
    #[arg(long, value_enum)]
    pub on_unknown_command: Option<UnknownCommand>,

    /// How to store a grade for a subject the student already has
    #[arg(long, value_enum)]
    pub duplicate_subjects: Option<DuplicateSubjects>,

    /// Whether D+ and D carry grade points
    #[arg(long, value_enum)]
    pub d_ratings: Option<DRatings>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_policies_unset() {
        let cli = Cli::try_parse_from(["gradebook"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.on_unknown_command.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_policy_flags() {
        let cli = Cli::try_parse_from([
            "gradebook",
            "--on-unknown-command",
            "reprompt",
            "--duplicate-subjects",
            "replace",
            "--d-ratings",
            "scored",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.on_unknown_command, Some(UnknownCommand::Reprompt));
        assert_eq!(cli.duplicate_subjects, Some(DuplicateSubjects::Replace));
        assert_eq!(cli.d_ratings, Some(DRatings::Scored));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_policy_value() {
        assert!(Cli::try_parse_from(["gradebook", "--d-ratings", "half"]).is_err());
    }
}
