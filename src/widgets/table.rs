//! Table widget: rows of text cells in solver-computed columns.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::layout::{Constraint, Direction, Layout};
use crate::style::Style;

/// A table with an optional header row.
///
/// Column widths come from the same constraint solver the Grid
/// container uses, applied horizontally across the table's area.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<Constraint>,
    pub header_style: Style,
    pub row_style: Style,
}

pub(super) fn render(table: &Table, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() || table.widths.is_empty() {
        return;
    }

    let columns = Layout::new()
        .direction(Direction::Horizontal)
        .constraints(table.widths.clone())
        .split(area);

    let mut y = area.top();

    if let Some(header) = &table.header {
        for (text, col) in header.iter().zip(&columns) {
            buf.put_line(Position::new(col.x, y), text, table.header_style, col.width);
        }
        y += 1;
    }

    for row in &table.rows {
        if y > area.bottom() {
            break;
        }
        for (text, col) in row.iter().zip(&columns) {
            buf.put_line(Position::new(col.x, y), text, table.row_style, col.width);
        }
        y += 1;
    }
}
