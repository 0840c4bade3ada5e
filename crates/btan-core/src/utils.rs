//! Fixed-width formatting helpers for table grids and value lists.

use std::fmt::Display;

/// Minimum width needed to display numbers up to `count - 1`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Render a grid cell: the value right-aligned in `width` columns, then a comma.
///
/// `None` renders as blanks of the same width so columns stay aligned.
pub fn grid_cell<T: Display>(value: Option<T>, width: usize) -> String {
    match value {
        Some(v) => format!("{v:>width$},"),
        None => format!("{:width$},", ""),
    }
}

/// Break `values` into lines of at most `per_line` comma-terminated entries.
///
/// # Examples
/// ```
/// use btan_core::utils::value_rows;
/// assert_eq!(value_rows(&[1, 2, 3], 2), vec!["1,2,", "3,"]);
/// ```
pub fn value_rows<T: Display>(values: &[T], per_line: usize) -> Vec<String> {
    let per_line = per_line.max(1);
    values
        .chunks(per_line)
        .map(|chunk| chunk.iter().map(|v| format!("{v},")).collect())
        .collect()
}
