//! # Command Loop
//!
//! [`Session`] drives the interactive menu: print the menu, read a selection, read that
//! command's arguments, call the API, render the outcome, repeat.
//!
//! Every step returns a [`Flow`] to the loop instead of restarting it, so bad input
//! never grows the call stack. User-input errors are printed and the loop carries on;
//! I/O errors end the session and propagate to the caller.
//!
//! The session is generic over any `BufRead`/`Write` pair: `main` hands it locked
//! stdin/stdout, tests hand it a `Cursor` and a `Vec<u8>`.

use crate::api::{CmdMessage, CmdResult, GradeReport, GradebookApi, MessageLevel};
use crate::config::UnknownCommand;
use crate::error::Result;
use crate::menu::{MenuCommand, MENU_OPTIONS, MENU_PROMPT};
use crate::store::RecordStore;
use crate::validation::split_fields;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What the loop does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S: RecordStore, R, W> {
    api: GradebookApi<S>,
    input: R,
    output: W,
    color: bool,
}

impl<S: RecordStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: GradebookApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn api(&self) -> &GradebookApi<S> {
        &self.api
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the exit command, a fatal unknown command, or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU_PROMPT)?;
            writeln!(self.output, "{}", MENU_OPTIONS)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("end of input at menu");
                return Ok(());
            };

            if self.step(&line)? == Flow::Exit {
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    /// Handle one menu selection, reading its arguments from input if it needs any.
    pub fn step(&mut self, selection: &str) -> Result<Flow> {
        let command = match selection.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(err) => {
                self.write_message(&CmdMessage::error(err.to_string()))?;
                return Ok(match self.api.config().on_unknown_command {
                    UnknownCommand::Exit => {
                        warn!(selection, "unknown command, ending session");
                        Flow::Exit
                    }
                    UnknownCommand::Reprompt => Flow::Continue,
                });
            }
        };
        debug!(command = %command, "dispatching");

        let Some(prompt) = command.prompt() else {
            self.write_message(&CmdMessage::info("Exiting..."))?;
            return Ok(Flow::Exit);
        };
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let Some(args) = self.read_line()? else {
            debug!(command = %command, "end of input while reading arguments");
            return Ok(Flow::Exit);
        };

        match self.execute(command, &args) {
            Ok(result) => self.render(&result)?,
            Err(err) if err.is_recoverable() => {
                debug!(command = %command, error = %err, "command rejected");
                self.write_message(&CmdMessage::error(err.to_string()))?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: MenuCommand, args: &str) -> Result<CmdResult> {
        match command {
            MenuCommand::AddStudent => self.api.add_student(args),
            MenuCommand::RemoveStudent => self.api.remove_student(args),
            MenuCommand::AddGrade => {
                let fields = split_fields(args, 3)?;
                self.api.add_grade(fields[0], fields[1], fields[2])
            }
            MenuCommand::RemoveGrade => {
                let fields = split_fields(args, 2)?;
                self.api.remove_grade(fields[0], fields[1])
            }
            MenuCommand::ViewAverage => self.api.average(args),
            MenuCommand::Exit => Ok(CmdResult::default()),
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn render(&mut self, result: &CmdResult) -> Result<()> {
        if let Some(report) = &result.report {
            self.write_report(report)?;
        }
        for message in &result.messages {
            self.write_message(message)?;
        }
        Ok(())
    }

    fn write_report(&mut self, report: &GradeReport) -> std::io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", report.student.bold())?;
        } else {
            writeln!(self.output, "{}", report.student)?;
        }
        for grade in &report.grades {
            let rating = grade.rating.map(|r| r.label()).unwrap_or("-");
            writeln!(self.output, "{}: {}", grade.subject, rating)?;
        }
        writeln!(self.output, "Average: {}", report.average)
    }

    fn write_message(&mut self, message: &CmdMessage) -> std::io::Result<()> {
        if !self.color {
            return writeln!(self.output, "{}", message.content);
        }
        match message.level {
            MessageLevel::Info => writeln!(self.output, "{}", message.content.dimmed()),
            MessageLevel::Success => writeln!(self.output, "{}", message.content.green()),
            MessageLevel::Error => writeln!(self.output, "{}", message.content.red()),
        }
    }
}
