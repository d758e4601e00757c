//! Ingredient database: fresh-ID ranges followed by available ingredient IDs.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["khangp0000", "intervals"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("malformed range {input:?}: {reason}")]
    MalformedRange { input: String, reason: String },
    #[error("malformed ingredient {input:?}: {source}")]
    MalformedIngredient {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("(line {line}) {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<InventoryError>,
    },
}

impl InventoryError {
    fn range(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Inclusive range of fresh ingredient IDs, `start <= end` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdRange {
    start: i64,
    end: i64,
}

impl IdRange {
    /// `None` when `end < start`
    pub fn new(start: i64, end: i64) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, id: i64) -> bool {
        (self.start..=self.end).contains(&id)
    }

    /// Number of IDs covered, up to 2^64 for the full `i64` span
    pub fn size(&self) -> u128 {
        u128::from(self.end.abs_diff(self.start)) + 1
    }

    /// True when the two ranges overlap or sit right next to each other
    pub fn touches(&self, other: &IdRange) -> bool {
        self.start <= other.end.saturating_add(1) && other.start <= self.end.saturating_add(1)
    }
}

impl FromStr for IdRange {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        // A leading '-' is the start's sign, never the separator
        let split = text
            .char_indices()
            .skip(1)
            .find_map(|(idx, c)| (c == '-').then_some(idx))
            .ok_or_else(|| InventoryError::range(s, "expected START-END"))?;
        let (start, end) = (&text[..split], &text[split + 1..]);

        let start: i64 = start
            .parse()
            .map_err(|e| InventoryError::range(s, format!("start: {e}")))?;
        let end: i64 = end
            .parse()
            .map_err(|e| InventoryError::range(s, format!("end: {e}")))?;

        IdRange::new(start, end)
            .ok_or_else(|| InventoryError::range(s, format!("end {end} is less than start {start}")))
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ingredient {
    pub id: i64,
}

impl FromStr for Ingredient {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(|id| Ingredient { id })
            .map_err(|source| InventoryError::MalformedIngredient {
                input: s.to_string(),
                source,
            })
    }
}

/// Parsed puzzle input: fresh ranges, then the available ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub ranges: Vec<IdRange>,
    pub ingredients: Vec<Ingredient>,
}

impl Inventory {
    /// Range lines up to the first blank line, ingredient lines after it.
    ///
    /// The first bad line aborts the parse; the error carries its 1-based
    /// line number.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter().enumerate();
        let mut inventory = Inventory::default();

        for (idx, line) in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            inventory
                .ranges
                .push(line.parse().map_err(|e: InventoryError| e.at_line(idx + 1))?);
        }

        for (idx, line) in lines {
            inventory
                .ingredients
                .push(line.parse().map_err(|e: InventoryError| e.at_line(idx + 1))?);
        }

        Ok(inventory)
    }

    /// Whether any range contains `ingredient`
    pub fn is_fresh(&self, ingredient: Ingredient) -> bool {
        self.ranges.iter().any(|range| range.contains(ingredient.id))
    }
}

impl FromStr for Inventory {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

/// Sorted, pairwise non-touching ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<IdRange>,
}

impl RangeSet {
    /// Merge overlapping and adjacent ranges.
    ///
    /// Sorts by start, then sweeps once: each range either extends the last
    /// merged range or starts a new one.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = IdRange>,
    {
        let mut sorted: Vec<IdRange> = ranges.into_iter().collect();
        sorted.sort_unstable_by_key(|range| (range.start, range.end));
        let input_len = sorted.len();

        let mut merged: Vec<IdRange> = Vec::with_capacity(input_len);
        for range in sorted {
            match merged.last_mut() {
                Some(last) if last.touches(&range) => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }

        debug!(input = input_len, merged = merged.len(), "merged id ranges");
        Self { ranges: merged }
    }

    pub fn ranges(&self) -> &[IdRange] {
        &self.ranges
    }

    pub fn into_ranges(self) -> Vec<IdRange> {
        self.ranges
    }

    /// Count of distinct IDs covered
    pub fn union_size(&self) -> u128 {
        self.ranges.iter().map(IdRange::size).sum()
    }

    pub fn contains(&self, id: i64) -> bool {
        let idx = self.ranges.partition_point(|range| range.end < id);
        self.ranges.get(idx).is_some_and(|range| range.contains(id))
    }
}

impl FromIterator<IdRange> for RangeSet {
    fn from_iter<T: IntoIterator<Item = IdRange>>(iter: T) -> Self {
        Self::from_ranges(iter)
    }
}

/// Disjoint, sorted union of `ranges`
pub fn merge_overlaps(ranges: &[IdRange]) -> Vec<IdRange> {
    RangeSet::from_ranges(ranges.iter().copied()).into_ranges()
}

/// Ingredients falling in at least one range, each counted once
pub fn count_fresh(inventory: &Inventory) -> usize {
    inventory
        .ingredients
        .iter()
        .filter(|&&ingredient| inventory.is_fresh(ingredient))
        .count()
}

/// Distinct IDs considered fresh by any range
pub fn count_fresh_ids(inventory: &Inventory) -> u128 {
    RangeSet::from_ranges(inventory.ranges.iter().copied()).union_size()
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Inventory::from_lines(input.trim_end().lines()).map_err(|e| match e {
            InventoryError::Line { line, source } => ParseError::at_line(line, source),
            other => ParseError::InvalidFormat(other.to_string()),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_fresh(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_fresh_ids(shared).to_string())
    }
}
