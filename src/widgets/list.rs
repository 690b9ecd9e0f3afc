//! List widget: one item per row, with optional highlight.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;

/// A vertical list of text items.
///
/// `offset` is the index of the first visible item; the host scrolls by
/// adjusting it. `highlight` styles one absolute item index.
#[derive(Debug, Clone, Default)]
pub struct List {
    pub items: Vec<String>,
    pub style: Style,
    pub offset: usize,
    pub highlight: Option<usize>,
    pub highlight_style: Style,
}

pub(super) fn render(list: &List, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    let visible = list.items.iter().enumerate().skip(list.offset);
    for (row, (index, item)) in visible.enumerate() {
        if row as u16 >= area.height {
            break;
        }
        let style = if list.highlight == Some(index) {
            list.style.patch(list.highlight_style)
        } else {
            list.style
        };
        let y = area.y + row as u16;
        buf.put_line(Position::new(area.x, y), item, style, area.width);
        if list.highlight == Some(index) {
            // Extend the highlight across the full row.
            buf.set_style(Area::new(area.x, y, area.width, 1), style);
        }
    }
}
