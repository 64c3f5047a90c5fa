use std::io::{BufRead, Write};
use std::str::FromStr;

pub mod dynamic;
pub mod exhaustive;
pub mod grid;
pub mod path;
pub mod tasks;

pub use dynamic::{CountOverflow, count_paths_dynamic_programming, count_paths_unbounded};
pub use exhaustive::count_paths_exhaustive;
pub use grid::{CellState, Grid};

/// Line oriented input reader for the task runner
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn next_line(&mut self) -> String {
        let mut input = String::new();
        self.reader.read_line(&mut input).expect("Failed read");
        input.trim().to_string()
    }

    pub fn parse<T: FromStr>(&mut self) -> T {
        let line = self.next_line();
        match line.parse() {
            Ok(v) => v,
            Err(_) => panic!("could not parse {:?}", line),
        }
    }

    pub fn parse_vec<T: FromStr>(&mut self) -> Vec<T> {
        self.next_line()
            .split_whitespace()
            .map(|tok| match tok.parse() {
                Ok(v) => v,
                Err(_) => panic!("could not parse {:?}", tok),
            })
            .collect()
    }
}

/// Output writer for the task runner (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        write!(self.0, "{}", value).expect("Failed write");
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

pub type SolveFn = fn(&mut Scanner, &mut Writer);

/// Named set of tasks sharing a directory of recorded test cases.
pub struct TaskGroup {
    category: &'static str,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, solve: SolveFn) -> Self {
        self.tasks.push((name, solve));
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Option<SolveFn> {
        self.tasks
            .iter()
            .find(|(task, _)| *task == name)
            .map(|(_, solve)| *solve)
    }

    /// Run every recorded case of the named task, returning false on any failure.
    pub fn run(&self, name: &str) -> bool {
        match self.get(name) {
            Some(solve) => testing::run_all_tests(self.category, name, solve),
            None => {
                log::warn!("unknown task {:?} in {}", name, self.category);
                println!(
                    "Unknown task {}, expected one of: {}",
                    name,
                    self.names().collect::<Vec<_>>().join(", ")
                );
                false
            }
        }
    }
}

/// Test utilities for running and verifying recorded test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::Instant;

    /// Discover all test case numbers for a given task
    pub fn discover_tests(category: &str, task_name: &str) -> Vec<usize> {
        let test_dir = PathBuf::from("data").join(category).join(task_name);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(num) = entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse::<usize>().ok())
                {
                    test_numbers.push(num);
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run the solver on an in-memory input and return its trimmed output.
    pub fn run_on_input<F>(input: &str, solve_fn: F) -> Result<String, String>
    where
        F: FnOnce(&mut Scanner, &mut Writer),
    {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut writer = Writer::new();
        solve_fn(&mut scanner, &mut writer);
        writer
            .into_string()
            .map(|out| out.trim().to_string())
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case<F>(
        category: &str,
        task_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String, std::time::Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer),
    {
        let test_dir = PathBuf::from("data").join(category).join(task_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let start = Instant::now();
        let actual = run_on_input(&input, solve_fn)?;
        let duration = start.elapsed();

        Ok((expected.trim().to_string(), actual, duration))
    }

    /// Verify all test cases for a task
    pub fn verify_all_tests<F>(category: &str, task_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer),
    {
        let test_cases = discover_tests(category, task_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            category,
            task_name
        );

        let mut total_duration = std::time::Duration::ZERO;

        for test_num in test_cases {
            match run_test_case(category, task_name, test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    assert_eq!(
                        actual, expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num, secs, expected, actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }

        println!("Total time: {:.2}s", total_duration.as_secs_f64());
    }

    /// Run all test cases and print results (for CLI usage)
    pub fn run_all_tests<F>(category: &str, task_name: &str, solve_fn: F) -> bool
    where
        F: Fn(&mut Scanner, &mut Writer),
    {
        let test_cases = discover_tests(category, task_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", category, task_name);
            return false;
        }

        println!(
            "Running {} test cases for {}/{}...",
            test_cases.len(),
            category,
            task_name
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = std::time::Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, task_name, *test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed == 0
    }
}
