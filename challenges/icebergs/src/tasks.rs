// Task runner entry points. Input is a `rows columns` header followed by one line per
// row, `.` for open water and `X` for an iceberg.

use log::{info, warn};

use crate::dynamic::{count_paths_dynamic_programming, count_paths_unbounded};
use crate::exhaustive::count_paths_exhaustive;
use crate::grid::Grid;
use crate::{Scanner, TaskGroup, Writer};

pub fn tasks() -> TaskGroup {
    TaskGroup::new("icebergs")
        .add("exhaustive", solve_exhaustive)
        .add("dynamic", solve_dynamic)
        .add("compare", solve_compare)
}

/// Read the header line and `rows` grid lines.
pub fn read_grid(scan: &mut Scanner) -> std::io::Result<Grid> {
    let dims: Vec<usize> = scan.parse_vec();
    let [rows, columns] = dims[..] else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("expected `rows columns`, got {:?}", dims),
        ));
    };
    let lines: Vec<String> = (0..rows).map(|_| scan.next_line()).collect();
    let grid = Grid::from_rows(&lines)?;
    if grid.rows() != rows || grid.columns() != columns {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "header says {}x{}, grid is {}x{}",
                rows,
                columns,
                grid.rows(),
                grid.columns()
            ),
        ));
    }
    Ok(grid)
}

fn expect_grid(scan: &mut Scanner) -> Grid {
    match read_grid(scan) {
        Ok(grid) => grid,
        Err(e) => panic!("malformed grid: {}", e),
    }
}

pub fn solve_exhaustive(scan: &mut Scanner, out: &mut Writer) {
    let grid = expect_grid(scan);
    out.println(count_paths_exhaustive(&grid));
}

pub fn solve_dynamic(scan: &mut Scanner, out: &mut Writer) {
    let grid = expect_grid(scan);
    match count_paths_dynamic_programming(&grid) {
        Ok(count) => out.println(count),
        Err(overflow) => {
            info!("{}, recounting with arbitrary precision", overflow);
            out.println(count_paths_unbounded(&grid));
        }
    }
}

pub fn solve_compare(scan: &mut Scanner, out: &mut Writer) {
    let grid = expect_grid(scan);
    let exhaustive = count_paths_exhaustive(&grid);
    let dynamic = match count_paths_dynamic_programming(&grid) {
        Ok(count) => count,
        Err(overflow) => panic!("{}", overflow),
    };
    if exhaustive != dynamic {
        warn!("counters disagree on\n{}", grid);
    }
    assert_eq!(exhaustive, dynamic, "exhaustive and dynamic counts differ");
    out.println(format!("{} {}", exhaustive, dynamic));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_on_input;

    #[test]
    fn test_example() {
        let input = "3 3\n...\n.X.\n...\n";
        assert_eq!(run_on_input(input, solve_exhaustive).unwrap(), "2");
        assert_eq!(run_on_input(input, solve_dynamic).unwrap(), "2");
        assert_eq!(run_on_input(input, solve_compare).unwrap(), "2 2");
    }

    #[test]
    fn test_dynamic_falls_back_on_overflow() {
        let mut input = String::from("40 40\n");
        for _ in 0..40 {
            input.push_str(&".".repeat(40));
            input.push('\n');
        }
        assert_eq!(
            run_on_input(&input, solve_dynamic).unwrap(),
            "27217014869199032015600"
        );
    }

    #[test]
    fn test_header_mismatch() {
        let mut scan = Scanner::new(std::io::Cursor::new("2 3\n..\n..\n"));
        assert!(read_grid(&mut scan).is_err());
    }

    #[test]
    fn test_task_lookup() {
        let group = tasks();
        assert_eq!(group.category(), "icebergs");
        assert!(group.get("dynamic").is_some());
        assert!(group.get("greedy").is_none());
        assert_eq!(
            group.names().collect::<Vec<_>>(),
            vec!["exhaustive", "dynamic", "compare"]
        );
    }
}
