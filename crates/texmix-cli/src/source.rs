//! Where input and output paths come from.
//!
//! Argument mode drains a queue of paths given on the command line, the
//! interactive menu prompts on the console, and the `dialog` feature opens
//! native file pickers.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Supplies file paths to the runner, one role at a time.
pub trait PathSource {
    /// Path for the input described by `role`, or `None` if the user gave up.
    fn input(&mut self, role: &str) -> Result<Option<PathBuf>, CliError>;

    /// Destination for a single output. `suggested` is the derived name.
    /// `None` discards the result.
    fn output(&mut self, suggested: &Path) -> Result<Option<PathBuf>, CliError>;
}

/// Paths taken from the command line in order.
#[derive(Debug, Default)]
pub struct ArgQueue {
    inputs: VecDeque<PathBuf>,
    output: Option<PathBuf>,
}

impl ArgQueue {
    pub fn new(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            inputs: inputs.into(),
            output,
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl PathSource for ArgQueue {
    fn input(&mut self, _role: &str) -> Result<Option<PathBuf>, CliError> {
        Ok(self.inputs.pop_front())
    }

    fn output(&mut self, suggested: &Path) -> Result<Option<PathBuf>, CliError> {
        Ok(Some(
            self.output
                .take()
                .unwrap_or_else(|| suggested.to_path_buf()),
        ))
    }
}

/// Console prompts. An empty answer cancels an input and accepts the
/// suggested name for an output.
pub struct Prompt<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(input: &'a mut R, out: &'a mut W) -> Self {
        Self { input, out }
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, CliError> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim().trim_matches('"');
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl<R: BufRead, W: Write> PathSource for Prompt<'_, R, W> {
    fn input(&mut self, role: &str) -> Result<Option<PathBuf>, CliError> {
        Ok(self.ask(&format!("Select {role}: "))?.map(PathBuf::from))
    }

    fn output(&mut self, suggested: &Path) -> Result<Option<PathBuf>, CliError> {
        let answer = self.ask(&format!("Save as [{}]: ", suggested.display()))?;
        Ok(Some(answer.map_or_else(|| suggested.to_path_buf(), PathBuf::from)))
    }
}

/// Native open/save dialogs filtered to PNG images.
#[cfg(feature = "dialog")]
#[derive(Debug, Default)]
pub struct Dialog;

#[cfg(feature = "dialog")]
impl PathSource for Dialog {
    fn input(&mut self, role: &str) -> Result<Option<PathBuf>, CliError> {
        Ok(rfd::FileDialog::new()
            .add_filter("Images", &["png"])
            .set_title(format!("Select {role}"))
            .pick_file())
    }

    fn output(&mut self, suggested: &Path) -> Result<Option<PathBuf>, CliError> {
        let mut dialog = rfd::FileDialog::new().add_filter("Images", &["png"]);
        if let Some(dir) = suggested.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
        Ok(dialog.save_file())
    }
}

/// Dialog source when the feature is compiled in, otherwise an error.
#[cfg(feature = "dialog")]
pub fn dialog() -> Result<Box<dyn PathSource>, CliError> {
    Ok(Box::new(Dialog))
}

#[cfg(not(feature = "dialog"))]
pub fn dialog() -> Result<Box<dyn PathSource>, CliError> {
    Err(CliError::DialogUnavailable)
}
