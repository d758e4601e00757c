//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcRunError, RunError};
use crate::input::InputLoader;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{info, info_span, warn};

/// Result from a single solver part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcRunError>,
    /// Set on the first part of each puzzle, the only one that paid for parsing
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle and the parts of it to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another
pub struct Executor {
    registry: SolverRegistry,
    loader: InputLoader,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            loader: InputLoader::new(config.input_dir.clone(), config.input.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Work items from registry metadata, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each part's result to `on_result` as
    /// soon as it is ready
    pub fn execute(&self, mut on_result: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut on_result);
        }
    }

    fn run_work_item(&self, work: &WorkItem, on_result: &mut impl FnMut(SolverResult)) {
        let _span = info_span!("puzzle", year = work.year, day = work.day).entered();

        let input = match self.loader.load(work.year, work.day) {
            Ok(input) => input,
            Err(source) => {
                warn!(error = %source, "input unavailable");
                let error = ArcRunError::from(RunError::Input {
                    year: work.year,
                    day: work.day,
                    source,
                });
                report_failure(work, &error, on_result);
                return;
            }
        };

        let mut solver = match self.registry.create_solver(work.year, work.day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                warn!(error = %e, "parse failed");
                report_failure(work, &ArcRunError::from(RunError::from(e)), on_result);
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        info!(bytes = input.len(), "parsed input");

        for part in work.parts.clone() {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(result) => {
                    info!(part, answer = %result.answer, "solved");
                    let duration = result.duration();
                    (Ok(result.answer), duration)
                }
                Err(e) => {
                    warn!(part, error = %e, "solve failed");
                    let error = RunError::from(SolverError::SolveError(e));
                    (Err(ArcRunError::from(error)), TimeDelta::zero())
                }
            };

            on_result(SolverResult {
                year: work.year,
                day: work.day,
                part,
                answer,
                parse_duration: parse_duration.take(),
                solve_duration,
            });
        }
    }
}

fn report_failure(work: &WorkItem, error: &ArcRunError, on_result: &mut impl FnMut(SolverResult)) {
    for part in work.parts.clone() {
        on_result(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputSource;
    use aoc_solutions::my_solutions::year_2025::{day_4, day_5};
    use aoc_solver::RegistryBuilder;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<day_4::Solver>(2025, 4)
            .unwrap()
            .register_solver::<day_5::Solver>(2025, 5)
            .unwrap()
            .build()
    }

    fn config(input_dir: PathBuf) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input: None,
            input_dir,
            quiet: true,
        }
    }

    fn write_input(dir: &TempDir, year: u16, day: u8, content: &str) {
        let path = InputLoader::new(dir.path().to_path_buf(), None).input_path(year, day);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn answers(executor: &Executor) -> Vec<(u8, u8, Result<String, String>)> {
        let mut collected = Vec::new();
        executor.execute(|r| collected.push((r.day, r.part, r.answer.map_err(|e| e.to_string()))));
        collected
    }

    #[test]
    fn test_collect_work_items_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path().to_path_buf());

        let all = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].parts, 1..=2);

        cfg.day_filter = Some(5);
        cfg.part_filter = Some(2);
        let items = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2025,
                day: 5,
                parts: 2..=2
            }]
        );

        cfg.year_filter = Some(2024);
        assert!(Executor::new(registry(), &cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_execute_solves_from_input_dir() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 4, ".@.@\n@.@.\n.@.@\n@.@.\n");
        write_input(&temp, 2025, 5, "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n");

        let executor = Executor::new(registry(), &config(temp.path().to_path_buf()));
        assert_eq!(
            answers(&executor),
            vec![
                (4, 1, Ok("6".to_string())),
                (4, 2, Ok("8".to_string())),
                (5, 1, Ok("3".to_string())),
                (5, 2, Ok("14".to_string())),
            ]
        );
    }

    #[test]
    fn test_parse_duration_only_on_first_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 4, "@@\n");
        let mut cfg = config(temp.path().to_path_buf());
        cfg.day_filter = Some(4);

        let mut parse_durations = Vec::new();
        Executor::new(registry(), &cfg).execute(|r| parse_durations.push(r.parse_duration.is_some()));
        assert_eq!(parse_durations, vec![true, false]);
    }

    #[test]
    fn test_failures_are_reported_per_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2025, 5, "3-1\n\n2\n");

        let executor = Executor::new(registry(), &config(temp.path().to_path_buf()));
        let results = answers(&executor);
        assert_eq!(results.len(), 4);

        // day 4 has no input file
        for (day, _, answer) in &results[..2] {
            assert_eq!(*day, 4);
            assert!(answer.as_ref().unwrap_err().contains("Input unavailable for 2025/04"));
        }
        for (day, _, answer) in &results[2..] {
            assert_eq!(*day, 5);
            assert!(answer.as_ref().unwrap_err().contains("Parse error in 2025/05: Invalid line 1: malformed range"));
        }
    }

    #[test]
    fn test_explicit_input_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("grid.txt");
        fs::write(&file, "@@@\n@@@\n@@@\n").unwrap();

        let mut cfg = config(PathBuf::from("unused"));
        cfg.day_filter = Some(4);
        cfg.input = Some(InputSource::File(file));

        let executor = Executor::new(registry(), &cfg);
        assert_eq!(
            answers(&executor),
            vec![(4, 1, Ok("4".to_string())), (4, 2, Ok("9".to_string()))]
        );
    }
}
