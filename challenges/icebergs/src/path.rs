use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Right,
    Down,
}

/// Cursor over a partially built monotone path. Starts at the origin and only ever moves
/// onto open, in-bounds cells.
#[derive(Debug, Clone)]
pub struct Path<'a> {
    grid: &'a Grid,
    row: usize,
    column: usize,
    step_count: usize,
}

impl<'a> Path<'a> {
    pub fn new(grid: &'a Grid) -> Path<'a> {
        Path {
            grid,
            row: 0,
            column: 0,
            step_count: 0,
        }
    }

    #[inline]
    fn next_cell(&self, direction: StepDirection) -> (usize, usize) {
        match direction {
            StepDirection::Right => (self.row, self.column + 1),
            StepDirection::Down => (self.row + 1, self.column),
        }
    }

    /// True when the step stays on the grid and lands on an open cell.
    #[inline]
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (row, column) = self.next_cell(direction);
        row < self.grid.rows() && column < self.grid.columns() && self.grid.is_open(row, column)
    }

    /// Callers must check `is_step_valid` first.
    pub fn add_step(&mut self, direction: StepDirection) {
        assert!(
            self.is_step_valid(direction),
            "invalid {:?} step from ({}, {})",
            direction,
            self.row,
            self.column
        );
        (self.row, self.column) = self.next_cell(direction);
        self.step_count += 1;
    }

    pub fn final_row(&self) -> usize {
        self.row
    }

    pub fn final_column(&self) -> usize {
        self.column
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }
}
