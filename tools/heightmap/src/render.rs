use std::fmt::Write;

use subdiv_core::{Grid, Result};

const CELL: usize = 7;
const MARK_EVERY: usize = 5;

/// Text table with a column ruler every 5 columns and a row index every 5 rows.
pub fn render_text(grid: &Grid) -> Result<String> {
    let mut out = String::new();

    out.push_str("    ");
    for col in (0..grid.width()).step_by(MARK_EVERY) {
        let span = MARK_EVERY.min(grid.width() - col) * CELL;
        let _ = write!(out, "{:-<span$}", col);
    }
    out.push_str(" col\n");

    for row in 0..grid.height() {
        if row % MARK_EVERY == 0 {
            let _ = write!(out, "{row:<4}");
        } else {
            out.push_str("|   ");
        }
        for col in 0..grid.width() {
            let _ = write!(out, "{:>CELL$.1}", grid.get(row, col)?);
        }
        out.push('\n');
    }
    out.push_str("row\n");
    Ok(out)
}
