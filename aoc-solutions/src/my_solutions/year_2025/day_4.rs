//! Paper-roll grid: count rolls a forklift can reach, then erode the grid
//! until nothing more can be taken.

use std::fmt;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

/// Glyph marking an occupied cell
pub const PAPER: char = '@';

/// Occupied cells with fewer occupied neighbours than this are removable
pub const CROWDED: u8 = 4;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["khangp0000", "grid"])]
pub struct Solver;

/// Occupancy grid, one `0`/`1` byte per cell.
///
/// Rows may have different lengths. Reads outside the grid yield `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Map one line to cells: [`PAPER`] is occupied, anything else is empty
    pub fn parse_row(line: &str) -> Vec<u8> {
        line.chars().map(|ch| u8::from(ch == PAPER)).collect()
    }

    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            rows: lines.into_iter().map(Self::parse_row).collect(),
        }
    }

    /// Build from raw cell values; any non-zero value counts as occupied
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| u8::from(cell != 0)).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Cell value at column `x`, row `y`; `0` when out of bounds
    pub fn cell(&self, x: isize, y: isize) -> u8 {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return 0;
        };
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == 1).count())
            .sum()
    }

    /// Occupied cells among the 8 around (`x`, `y`)
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as isize, y as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.cell(x + dx, y + dy))
            .sum()
    }

    /// Neighbour count for every cell, shaped like the grid
    pub fn neighbor_counts(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(y, row)| (0..row.len()).map(|x| self.neighbor_count(x, y)).collect())
            .collect()
    }

    /// `(x, y)` of every occupied cell with fewer than [`CROWDED`] neighbours.
    ///
    /// All counts come from this snapshot, so removing one weak cell never
    /// changes whether another cell of the same snapshot is weak.
    pub fn weak_cells(&self) -> Vec<(usize, usize)> {
        let counts = self.neighbor_counts();
        self.rows
            .iter()
            .zip(&counts)
            .enumerate()
            .flat_map(|(y, (row, row_counts))| {
                row.iter()
                    .zip(row_counts)
                    .enumerate()
                    .filter(|&(_, (&cell, &count))| cell == 1 && count < CROWDED)
                    .map(move |(x, _)| (x, y))
            })
            .collect()
    }

    /// One erosion pass: the next snapshot and how many cells it lost
    pub fn erode(&self) -> (Grid, usize) {
        let weak = self.weak_cells();
        let mut next = self.clone();
        for &(x, y) in &weak {
            next.rows[y][x] = 0;
        }
        (next, weak.len())
    }

    /// Erosion passes until one removes nothing, yielding removals per pass
    pub fn erosion(&self) -> Erosion {
        Erosion {
            grid: self.clone(),
            pass: 0,
            settled: false,
        }
    }
}

impl From<&str> for Grid {
    fn from(input: &str) -> Self {
        Self::from_lines(input.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &cell in row {
                f.write_str(if cell == 1 { "@" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy sequence of erosion passes, see [`Grid::erosion`]
#[derive(Debug, Clone)]
pub struct Erosion {
    grid: Grid,
    pass: usize,
    settled: bool,
}

impl Erosion {
    /// The snapshot after the passes yielded so far
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Iterator for Erosion {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.settled {
            return None;
        }
        let (next, removed) = self.grid.erode();
        self.pass += 1;
        debug!(pass = self.pass, removed, "erosion pass");

        if removed == 0 {
            self.settled = true;
            return None;
        }
        self.grid = next;
        Some(removed)
    }
}

/// Occupied cells removable from the untouched grid in a single pass
pub fn count_accessible(grid: &Grid) -> usize {
    grid.weak_cells().len()
}

/// Total cells removed by eroding the grid to a fixpoint
pub fn count_removable(grid: &Grid) -> usize {
    grid.erosion().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(Grid::from(input.trim_end()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_accessible(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_removable(shared).to_string())
    }
}
