use crate::utils::{grid_cell, value_rows, width_for_count};

#[test]
fn width_for_small_counts() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(1), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}

#[test]
fn grid_cell_right_aligns() {
    assert_eq!(grid_cell(Some(5), 3), "  5,");
    assert_eq!(grid_cell(Some(-12), 3), "-12,");
    assert_eq!(grid_cell(Some(1234), 3), "1234,");
}

#[test]
fn grid_cell_blank_keeps_width() {
    assert_eq!(grid_cell(None::<i32>, 3), "   ,");
}

#[test]
fn value_rows_wraps() {
    let values: Vec<i32> = (0..12).collect();
    let rows = value_rows(&values, 10);
    assert_eq!(rows, vec!["0,1,2,3,4,5,6,7,8,9,", "10,11,"]);
}

#[test]
fn value_rows_empty() {
    assert!(value_rows::<i32>(&[], 10).is_empty());
}
