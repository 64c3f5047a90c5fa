use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::grid::Grid;

/// Number type a path-count table can be filled with.
pub trait PathCount: Clone {
    fn zero() -> Self;
    fn one() -> Self;
    /// `None` when the sum does not fit.
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

impl PathCount for u64 {
    fn zero() -> Self {
        0
    }
    fn one() -> Self {
        1
    }
    fn checked_add(&self, other: &Self) -> Option<Self> {
        u64::checked_add(*self, *other)
    }
}

impl PathCount for BigUint {
    fn zero() -> Self {
        BigUint::from(0u8)
    }
    fn one() -> Self {
        BigUint::from(1u8)
    }
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}

/// The count at `(row, column)` did not fit the chosen count type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOverflow {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for CountOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path count overflowed at cell ({}, {})",
            self.row, self.column
        )
    }
}

impl std::error::Error for CountOverflow {}

impl From<CountOverflow> for std::io::Error {
    fn from(err: CountOverflow) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}

/// Number of paths from the origin to every cell, stored row-major.
#[derive(Debug, Clone)]
pub struct PathCountTable<T> {
    rows: usize,
    columns: usize,
    tally: Vec<T>,
}

impl<T: PathCount> PathCountTable<T> {
    /// Fill the table in row-major order, so the cells above and to the left are always
    /// done before the current one.
    ///
    /// tally[r][c] = 0                               if (r, c) is an iceberg
    ///             = 1                               if (r, c) is the origin
    ///             = tally[r-1][c] + tally[r][c-1]   otherwise, out of bounds counting as 0
    pub fn build(grid: &Grid) -> Result<Self, CountOverflow> {
        assert!(grid.rows() > 0, "grid must have at least one row");
        assert!(grid.columns() > 0, "grid must have at least one column");

        let rows = grid.rows();
        let columns = grid.columns();
        let mut tally = vec![T::zero(); rows * columns];

        for row in 0..rows {
            for column in 0..columns {
                if !grid.is_open(row, column) {
                    continue;
                }
                let i = row * columns + column;
                if i == 0 {
                    tally[0] = T::one();
                    continue;
                }
                let from_above = if row > 0 {
                    tally[i - columns].clone()
                } else {
                    T::zero()
                };
                let from_left = if column > 0 {
                    tally[i - 1].clone()
                } else {
                    T::zero()
                };
                tally[i] = from_above
                    .checked_add(&from_left)
                    .ok_or(CountOverflow { row, column })?;
            }
        }

        Ok(PathCountTable {
            rows,
            columns,
            tally,
        })
    }

    pub fn get(&self, row: usize, column: usize) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is outside a {}x{} table",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.tally[row * self.columns + column]
    }

    /// Count for the bottom-right cell.
    pub fn destination(&self) -> &T {
        self.get(self.rows - 1, self.columns - 1)
    }

    pub fn into_destination(mut self) -> T {
        self.tally.swap_remove(self.rows * self.columns - 1)
    }
}

/// Count paths with the `O(rows * columns)` table. Counts that do not fit a `u64` are
/// reported as `CountOverflow` instead of wrapping.
pub fn count_paths_dynamic_programming(grid: &Grid) -> Result<u64, CountOverflow> {
    debug!("dynamic: {}x{} grid", grid.rows(), grid.columns());
    PathCountTable::<u64>::build(grid).map(PathCountTable::into_destination)
}

/// Same as `count_paths_dynamic_programming` with arbitrary precision counts.
pub fn count_paths_unbounded(grid: &Grid) -> BigUint {
    debug!("unbounded: {}x{} grid", grid.rows(), grid.columns());
    match PathCountTable::<BigUint>::build(grid) {
        Ok(table) => table.into_destination(),
        Err(_) => unreachable!("BigUint addition never overflows"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn test_example() {
        assert_eq!(count_paths_dynamic_programming(&Grid::new(3, 3)), Ok(6));
        let centre = Grid::new(3, 3).with_cell(1, 1, CellState::Iceberg);
        assert_eq!(count_paths_dynamic_programming(&centre), Ok(2));
    }

    #[test]
    fn test_table_cells() {
        let grid: Grid = "..X..\n.....\nX..X.\n.....\n".parse().unwrap();
        let table = PathCountTable::<u64>::build(&grid).unwrap();
        let expected = [[1, 1, 0, 0, 0], [1, 2, 2, 2, 2], [0, 2, 4, 0, 2], [0, 2, 6, 6, 8]];
        for (row, counts) in expected.iter().enumerate() {
            for (column, &count) in counts.iter().enumerate() {
                assert_eq!(*table.get(row, column), count, "cell ({}, {})", row, column);
            }
        }
        assert_eq!(*table.destination(), 8);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(count_paths_dynamic_programming(&Grid::new(1, 1)), Ok(1));
    }

    #[test]
    fn test_blocked_origin() {
        let grid = Grid::new(3, 3).with_cell(0, 0, CellState::Iceberg);
        assert_eq!(count_paths_dynamic_programming(&grid), Ok(0));
    }

    #[test]
    fn test_blocked_edges() {
        // Every path passes through the bottom row or the right column.
        let mut grid = Grid::new(4, 4);
        for i in 0..3 {
            grid = grid
                .with_cell(3, i, CellState::Iceberg)
                .with_cell(i, 3, CellState::Iceberg);
        }
        assert_eq!(count_paths_dynamic_programming(&grid), Ok(0));
    }

    #[test]
    fn test_overflow_is_reported() {
        // C(78, 39) does not fit in a u64.
        let grid = Grid::new(40, 40);
        let err = count_paths_dynamic_programming(&grid).unwrap_err();
        assert!(err.row < 40 && err.column < 40);
        assert_eq!(
            count_paths_unbounded(&grid).to_string(),
            "27217014869199032015600"
        );
    }

    #[test]
    fn test_large_grid_fits_u64() {
        assert_eq!(
            count_paths_dynamic_programming(&Grid::new(30, 30)),
            Ok(30067266499541040)
        );
    }
}
