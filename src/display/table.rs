//! Plain column-aligned tables
//!
//! Each column is as wide as its longest cell, header included. Columns are
//! left-aligned and separated by two spaces.

const COLUMN_GAP: &str = "  ";

/// Render `headers` and `rows` as aligned lines, each ending in a newline
pub fn format_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, headers, &widths);
    for row in rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    output.push_str(line.trim_end());
    output.push('\n');
}
