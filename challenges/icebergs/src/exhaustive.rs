use log::debug;

use crate::grid::Grid;
use crate::path::{Path, StepDirection};

/// Largest supported path length; move sequences are encoded as the bits of a `u64`.
pub const MAX_STEPS: usize = 63;

/// Count paths by trying every right/down move sequence of the fixed length
/// `rows + columns - 2`.
///
/// Bit `k` of the candidate selects move `k`: 1 is Right, 0 is Down. A move that would
/// leave the grid or land on an iceberg is skipped, and a candidate counts only when it
/// finishes exactly on the bottom-right cell. A skipped move leaves the candidate short of
/// the destination, so every counted candidate is a distinct obstacle-free path.
///
/// Runs in `O(2^steps * steps)` and panics when `steps > MAX_STEPS`.
pub fn count_paths_exhaustive(grid: &Grid) -> u64 {
    assert!(grid.rows() > 0, "grid must have at least one row");
    assert!(grid.columns() > 0, "grid must have at least one column");

    let steps = grid.rows() + grid.columns() - 2;
    assert!(
        steps <= MAX_STEPS,
        "{}x{} grid needs {} steps, exhaustive search supports at most {}",
        grid.rows(),
        grid.columns(),
        steps,
        MAX_STEPS
    );

    if !grid.is_open(0, 0) {
        debug!("exhaustive: origin is an iceberg");
        return 0;
    }

    let destination = (grid.rows() - 1, grid.columns() - 1);
    debug!(
        "exhaustive: {}x{} grid, {} steps, {} candidates",
        grid.rows(),
        grid.columns(),
        steps,
        1u64 << steps
    );

    let mut count = 0;
    for bits in 0..(1u64 << steps) {
        let mut candidate = Path::new(grid);
        for k in 0..steps {
            let direction = if (bits >> k) & 1 == 1 {
                StepDirection::Right
            } else {
                StepDirection::Down
            };
            if candidate.is_step_valid(direction) {
                candidate.add_step(direction);
            }
        }
        if (candidate.final_row(), candidate.final_column()) == destination {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn test_example() {
        assert_eq!(count_paths_exhaustive(&Grid::new(3, 3)), 6);
        let centre = Grid::new(3, 3).with_cell(1, 1, CellState::Iceberg);
        assert_eq!(count_paths_exhaustive(&centre), 2);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(count_paths_exhaustive(&Grid::new(1, 1)), 1);
    }

    #[test]
    fn test_straight_lines() {
        assert_eq!(count_paths_exhaustive(&Grid::new(1, 6)), 1);
        assert_eq!(count_paths_exhaustive(&Grid::new(6, 1)), 1);
        let blocked = Grid::new(1, 6).with_cell(0, 3, CellState::Iceberg);
        assert_eq!(count_paths_exhaustive(&blocked), 0);
    }

    #[test]
    fn test_blocked_destination() {
        let grid = Grid::new(4, 4).with_cell(3, 3, CellState::Iceberg);
        assert_eq!(count_paths_exhaustive(&grid), 0);
    }

    #[test]
    fn test_blocked_origin() {
        let grid = Grid::new(3, 3).with_cell(0, 0, CellState::Iceberg);
        assert_eq!(count_paths_exhaustive(&grid), 0);
    }

    #[test]
    #[should_panic(expected = "exhaustive search supports at most")]
    fn test_too_many_steps() {
        count_paths_exhaustive(&Grid::new(40, 26));
    }
}
