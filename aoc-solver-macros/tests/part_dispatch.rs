use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(Debug, Clone, PartialEq)]
struct Readings {
    values: Vec<i64>,
    total: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Sensor;

impl AocParser for Sensor {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {line}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Readings { values, total: None })
    }
}

impl PartSolver<1> for Sensor {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        let total = shared.values.iter().sum();
        shared.total = Some(total);
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Sensor {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        shared
            .values
            .iter()
            .max()
            .map(|max| max.to_string())
            .ok_or_else(|| SolveError::failed("no readings"))
    }
}

impl PartSolver<3> for Sensor {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        let total = shared
            .total
            .ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((total * 2).to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<Sensor as Solver>::PARTS, 3);
}

#[test]
fn test_each_part_dispatches_to_its_impl() {
    let mut shared = Sensor::parse("4\n-2\n9").unwrap();
    assert_eq!(Sensor::solve_part(&mut shared, 1).unwrap(), "11");
    assert_eq!(Sensor::solve_part(&mut shared, 2).unwrap(), "9");
    assert_eq!(Sensor::solve_part(&mut shared, 3).unwrap(), "22");
}

#[test]
fn test_parts_share_mutable_state() {
    let mut shared = Sensor::parse("1\n2").unwrap();
    assert!(matches!(
        Sensor::solve_part(&mut shared, 3),
        Err(SolveError::SolveFailed(_))
    ));

    Sensor::solve_part(&mut shared, 1).unwrap();
    assert_eq!(shared.total, Some(3));
    assert_eq!(Sensor::solve_part(&mut shared, 3).unwrap(), "6");
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut shared = Sensor::parse("1").unwrap();
    assert!(matches!(
        Sensor::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        Sensor::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn test_checked_range_rejects_before_dispatch() {
    let mut shared = Sensor::parse("1").unwrap();
    assert!(matches!(
        Sensor::solve_part_checked_range(&mut shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn test_solve_error_propagates() {
    let mut shared = Sensor::parse("").unwrap();
    let err = Sensor::solve_part(&mut shared, 2).unwrap_err();
    assert_eq!(err.to_string(), "Solve failed: no readings");
}
