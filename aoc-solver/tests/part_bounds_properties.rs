//! Property-based tests for part range checking

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver whose part count is a const parameter
struct Counted<const N: u8>;

impl<const N: u8> AocParser for Counted<N> {
    type SharedData<'a> = Vec<u8>;

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Vec::new())
    }
}

impl<const N: u8> Solver for Counted<N> {
    const PARTS: u8 = N;

    fn solve_part(shared: &mut Vec<u8>, part: u8) -> Result<String, SolveError> {
        shared.push(part);
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8, shared: &mut Vec<u8>) -> (u8, Result<String, SolveError>) {
    match max_parts {
        1 => (1, Counted::<1>::solve_part_checked_range(shared, part)),
        3 => (3, Counted::<3>::solve_part_checked_range(shared, part)),
        25 => (25, Counted::<25>::solve_part_checked_range(shared, part)),
        _ => (2, Counted::<2>::solve_part_checked_range(shared, part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` are rejected without reaching `solve_part`
    #[test]
    fn prop_out_of_range_rejected(max_parts in prop::sample::select(vec![1u8, 2, 3, 25]), part in any::<u8>()) {
        let mut shared = Vec::new();
        let (effective_max, result) = checked(max_parts, part, &mut shared);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
            prop_assert!(shared.is_empty());
        } else {
            prop_assert_eq!(result.ok(), Some(format!("part{}", part)));
            prop_assert_eq!(shared, vec![part]);
        }
    }
}

#[test]
fn test_part_zero_rejected() {
    let mut shared = Vec::new();
    let result = Counted::<2>::solve_part_checked_range(&mut shared, 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_past_max_rejected() {
    let mut shared = Vec::new();
    let result = Counted::<2>::solve_part_checked_range(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_last_part_accepted() {
    let mut shared = Vec::new();
    let result = Counted::<2>::solve_part_checked_range(&mut shared, 2);
    assert_eq!(result.unwrap(), "part2");
}
