//! Puzzle input loading from disk or stdin

use crate::config::InputSource;
use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Resolves and reads puzzle inputs
///
/// Directory layout: `{input_dir}/{year}/day{day:02}.txt`
pub struct InputLoader {
    input_dir: PathBuf,
    source: Option<InputSource>,
}

impl InputLoader {
    /// `source`, when given, is returned for every puzzle
    pub fn new(input_dir: PathBuf, source: Option<InputSource>) -> Self {
        Self { input_dir, source }
    }

    /// Conventional location of a puzzle's input
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        match &self.source {
            Some(InputSource::Stdin) => std::io::read_to_string(std::io::stdin()).map_err(InputError::Stdin),
            Some(InputSource::File(path)) => read_file(path.clone()),
            None => read_file(self.input_path(year, day)),
        }
    }
}

fn read_file(path: PathBuf) -> Result<String, InputError> {
    tracing::debug!(path = %path.display(), "reading input");
    fs::read_to_string(&path).map_err(|source| InputError::File { path, source })
}
