use icebergs::tasks::{solve_compare, solve_dynamic, solve_exhaustive};
use icebergs::testing::verify_all_tests;

#[test]
fn exhaustive_cases() {
    verify_all_tests("icebergs", "exhaustive", solve_exhaustive);
}

#[test]
fn dynamic_cases() {
    verify_all_tests("icebergs", "dynamic", solve_dynamic);
}

#[test]
fn compare_cases() {
    verify_all_tests("icebergs", "compare", solve_compare);
}
