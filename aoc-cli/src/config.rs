//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Environment variable naming the input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Input directory used when neither the flag nor the env var is set
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Where a single explicitly-named input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(expand_tilde(&path))
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    /// Explicit input overriding the input directory
    pub input: Option<InputSource>,
    /// Root of the `{year}/day{DD}.txt` input tree
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, falling back to the environment
    pub fn from_args(args: Args) -> Self {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var(INPUT_DIR_ENV).ok());

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input: args.input.map(InputSource::from),
            input_dir,
            quiet: args.quiet,
        }
    }
}

/// Flag beats environment beats default
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    let dir = flag
        .or_else(|| env.filter(|s| !s.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
