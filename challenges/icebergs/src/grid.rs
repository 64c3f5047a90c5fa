use std::fmt;
use std::io::{Error, ErrorKind};
use std::str::FromStr;

use rand::Rng;

/// State of one cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Iceberg,
}

impl CellState {
    pub fn from_byte(b: u8) -> Option<CellState> {
        match b {
            b'.' => Some(CellState::Open),
            b'X' | b'x' => Some(CellState::Iceberg),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Iceberg => 'X',
        }
    }
}

/// A rectangular board of open and iceberg cells.
///
/// Cells are stored row-major in a flat vector, `row * columns + column`. The grid is
/// never empty: every constructor asserts `rows > 0` and `columns > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-open grid.
    pub fn new(rows: usize, columns: usize) -> Grid {
        Grid::from_cells(rows, columns, vec![CellState::Open; rows * columns])
    }

    pub fn from_cells(rows: usize, columns: usize, cells: Vec<CellState>) -> Grid {
        assert!(rows > 0, "grid must have at least one row");
        assert!(columns > 0, "grid must have at least one column");
        assert_eq!(
            cells.len(),
            rows * columns,
            "expected {} cells for a {}x{} grid",
            rows * columns,
            rows,
            columns
        );
        Grid {
            rows,
            columns,
            cells,
        }
    }

    /// Random board where every cell but the origin is an iceberg with probability
    /// `iceberg_probability`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        iceberg_probability: f64,
        rng: &mut R,
    ) -> Grid {
        assert!(
            (0.0..=1.0).contains(&iceberg_probability),
            "iceberg probability {} is outside [0, 1]",
            iceberg_probability
        );
        let cells = (0..rows * columns)
            .map(|i| {
                if i != 0 && rng.gen_bool(iceberg_probability) {
                    CellState::Iceberg
                } else {
                    CellState::Open
                }
            })
            .collect();
        Grid::from_cells(rows, columns, cells)
    }

    /// Parse one string per row.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> std::io::Result<Grid> {
        let mut columns = None;
        let mut cells = Vec::new();
        let mut rows = 0;

        for line in lines.iter().map(|l| l.as_ref().trim()) {
            if line.is_empty() {
                continue;
            }
            let width = line.len();
            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("row {} has {} cells, expected {}", rows, width, expected),
                    ));
                }
                Some(_) => {}
            }
            for &b in line.as_bytes() {
                let state = CellState::from_byte(b).ok_or_else(|| {
                    Error::new(
                        ErrorKind::InvalidData,
                        format!("invalid cell {:?} in row {}", b as char, rows),
                    )
                })?;
                cells.push(state);
            }
            rows += 1;
        }

        let Some(columns) = columns else {
            return Err(Error::new(ErrorKind::InvalidData, "grid has no rows"));
        };
        Ok(Grid::from_cells(rows, columns, cells))
    }

    pub fn with_cell(mut self, row: usize, column: usize, state: CellState) -> Grid {
        let index = self.index(row, column);
        self.cells[index] = state;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> CellState {
        self.cells[self.index(row, column)]
    }

    #[inline]
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == CellState::Open
    }

    pub fn iceberg_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Iceberg)
            .count()
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        Grid::from_rows(&lines)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse() {
        let grid: Grid = "...\n.X.\n...\n".parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(1, 1), CellState::Iceberg);
        assert_eq!(grid.get(2, 0), CellState::Open);
        assert_eq!(grid.iceberg_count(), 1);
    }

    #[test]
    fn test_display_matches_input() {
        let text = "..X.\nX...\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Grid>().is_err());
        assert!("..\n...\n".parse::<Grid>().is_err());
        assert!(".#.\n".parse::<Grid>().is_err());
    }

    #[test]
    fn test_with_cell() {
        let grid = Grid::new(2, 3).with_cell(1, 2, CellState::Iceberg);
        assert!(!grid.is_open(1, 2));
        assert!(grid.is_open(0, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_bounds() {
        Grid::new(2, 2).get(2, 0);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn test_empty_grid() {
        Grid::new(0, 4);
    }

    #[test]
    fn test_random_keeps_origin_open() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let grid = Grid::random(4, 5, 1.0, &mut rng);
            assert!(grid.is_open(0, 0));
            assert_eq!(grid.iceberg_count(), 19);
        }
        let open = Grid::random(4, 5, 0.0, &mut rng);
        assert_eq!(open.iceberg_count(), 0);
    }
}
