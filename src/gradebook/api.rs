//! # API Facade
//!
//! A thin layer over the command modules. It is the single entry point for gradebook
//! operations regardless of how input arrives.
//!
//! The facade:
//! - **Validates raw text**: names and subjects must be tokens, ratings must parse
//! - **Dispatches** to the matching `commands::*::run`
//! - **Applies config policies** (duplicate subjects, D rating scoring)
//!
//! It does no I/O and no formatting beyond what commands put into their messages.
//!
//! `GradebookApi<S: RecordStore>` is generic over the storage backend so tests can
//! construct it around a pre-populated fixture store.

use crate::commands;
use crate::config::GradebookConfig;
use crate::error::Result;
use crate::model::{Grade, Student};
use crate::store::RecordStore;
use crate::validation::{parse_rating, validate_token};

pub struct GradebookApi<S: RecordStore> {
    store: S,
    config: GradebookConfig,
}

impl<S: RecordStore> GradebookApi<S> {
    pub fn new(store: S, config: GradebookConfig) -> Self {
        Self { store, config }
    }

    pub fn add_student(&mut self, name: &str) -> Result<commands::CmdResult> {
        validate_token("name", name)?;
        commands::add_student::run(&mut self.store, name)
    }

    pub fn remove_student(&mut self, name: &str) -> Result<commands::CmdResult> {
        validate_token("name", name)?;
        commands::remove_student::run(&mut self.store, name)
    }

    pub fn add_grade(
        &mut self,
        name: &str,
        subject: &str,
        rating: &str,
    ) -> Result<commands::CmdResult> {
        validate_token("name", name)?;
        validate_token("subject", subject)?;
        let rating = parse_rating(rating)?;
        commands::add_grade::run(
            &mut self.store,
            name,
            Grade::new(subject, rating),
            self.config.duplicate_subjects,
        )
    }

    pub fn remove_grade(&mut self, name: &str, subject: &str) -> Result<commands::CmdResult> {
        validate_token("name", name)?;
        validate_token("subject", subject)?;
        commands::remove_grade::run(&mut self.store, name, subject)
    }

    pub fn average(&self, name: &str) -> Result<commands::CmdResult> {
        validate_token("name", name)?;
        commands::average::run(&self.store, name, self.config.d_ratings)
    }

    pub fn students(&self) -> &[Student] {
        self.store.list_students()
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, GradeReport, MessageLevel};
