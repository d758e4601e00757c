//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Input file for a single puzzle, `-` reads stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `{year}/day{DD}.txt` inputs [env: AOC_INPUT_DIR, default: inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_filters() {
        let args = Args::parse_from(["aoc", "-y", "2025", "-d", "4", "-t", "grid,khangp0000", "-q"]);
        assert_eq!(args.year, Some(2025));
        assert_eq!(args.day, Some(4));
        assert_eq!(args.part, None);
        assert_eq!(args.tags, vec!["grid", "khangp0000"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_day_and_part_bounds() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "2"]).is_ok());
    }

    #[test]
    fn test_stdin_input() {
        let args = Args::parse_from(["aoc", "-y", "2025", "-d", "5", "--input", "-"]);
        assert_eq!(args.input, Some(PathBuf::from("-")));
    }
}
