// Table rows as plain data. The rendering layer materializes `Row` values
// from whatever it displays, hands them here for sorting, and re-renders the
// reordered result; nothing in this module knows about widgets.

pub mod export;

use std::cmp::Ordering;

use crate::error::UiError;

/// One renderable table row: an ordered sequence of cell text values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn from_strs(cells: &[&str]) -> Self {
        Self {
            cells: cells.iter().map(|cell| cell.to_string()).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// Header cells plus data rows, the unit the export and sort operations work on.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn sort_by_column(&mut self, column: usize, ascending: bool) -> Result<(), UiError> {
        sort_rows_by_column(&mut self.rows, column, ascending)
    }
}

/// Reorders `rows` in place by the cell at `column`.
///
/// Cells that both strip down to finite numbers compare numerically, so
/// `"$1,020.50"` sorts above `"$99.00"` descending rather than
/// lexicographically; any other pair falls back to a case-insensitive string
/// comparison (lowercase fold, raw ordering as tie-break). The sort is
/// stable: rows with equal keys keep their relative order. Rows are only
/// reordered, never dropped or duplicated.
///
/// Every row must have a cell at `column`; otherwise the call fails before
/// any reordering happens. A short row is an error, not a silent skip.
pub fn sort_rows_by_column(
    rows: &mut [Row],
    column: usize,
    ascending: bool,
) -> Result<(), UiError> {
    for (idx, row) in rows.iter().enumerate() {
        if column >= row.width() {
            return Err(UiError::ColumnIndexOutOfRange {
                row: idx,
                column,
                width: row.width(),
            });
        }
    }

    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.cells[column].trim(), b.cells[column].trim());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    Ok(())
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => {
            let a_fold = a.to_lowercase();
            let b_fold = b.to_lowercase();
            // Raw comparison as tie-break keeps the comparator a total order
            // when two cells differ only by case.
            a_fold.cmp(&b_fold).then_with(|| a.cmp(b))
        }
    }
}

/// Numeric coercion matching the dashboard's column sorting: drop currency
/// symbols, grouping commas and other decoration, then read the longest
/// leading `-?digits[.digits]` prefix of what remains. `None` when no digits
/// survive or the value is not finite.
fn parse_numeric(cell: &str) -> Option<f64> {
    let stripped: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    let rest = stripped.strip_prefix('-').unwrap_or(&stripped);
    let negative = rest.len() != stripped.len();

    let mut prefix = String::new();
    let mut seen_dot = false;
    for c in rest.chars() {
        match c {
            '0'..='9' => prefix.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                prefix.push(c);
            }
            _ => break,
        }
    }

    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = prefix.parse().ok()?;
    let value = if negative { -value } else { value };
    value.is_finite().then_some(value)
}
