//! Block widget: a styled rectangle with optional border and title.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;
use crate::symbols::{self, LineSet};

/// Border glyph family for a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    #[default]
    Plain,
    Rounded,
    Double,
    Thick,
}

impl BorderKind {
    pub const fn line_set(self) -> LineSet {
        match self {
            BorderKind::Plain => symbols::LINE_PLAIN,
            BorderKind::Rounded => symbols::LINE_ROUNDED,
            BorderKind::Double => symbols::LINE_DOUBLE,
            BorderKind::Thick => symbols::LINE_THICK,
        }
    }
}

/// A styled rectangle, optionally bordered and titled.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub title: Option<String>,
    pub border: Option<BorderKind>,
    pub border_style: Style,
    pub style: Style,
}

impl Block {
    /// The area left for content once the border is accounted for.
    pub fn inner(&self, area: Area) -> Area {
        if self.border.is_some() {
            area.inner(1)
        } else {
            area
        }
    }
}

pub(super) fn render(block: &Block, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    buf.set_style(area, block.style);

    if let Some(kind) = block.border {
        let line = kind.line_set();
        let style = block.border_style;

        for x in area.left()..=area.right() {
            if let Some(cell) = buf.get_mut(Position::new(x, area.top())) {
                cell.symbol = line.horizontal;
                cell.set_style(style);
            }
            if let Some(cell) = buf.get_mut(Position::new(x, area.bottom())) {
                cell.symbol = line.horizontal;
                cell.set_style(style);
            }
        }
        for y in area.top()..=area.bottom() {
            if let Some(cell) = buf.get_mut(Position::new(area.left(), y)) {
                cell.symbol = line.vertical;
                cell.set_style(style);
            }
            if let Some(cell) = buf.get_mut(Position::new(area.right(), y)) {
                cell.symbol = line.vertical;
                cell.set_style(style);
            }
        }

        let corners = [
            (area.left(), area.top(), line.top_left),
            (area.right(), area.top(), line.top_right),
            (area.right(), area.bottom(), line.bottom_right),
            (area.left(), area.bottom(), line.bottom_left),
        ];
        for (x, y, symbol) in corners {
            if let Some(cell) = buf.get_mut(Position::new(x, y)) {
                cell.symbol = symbol;
                cell.set_style(style);
            }
        }
    }

    if let Some(title) = &block.title {
        let offset = if block.border.is_some() { 1 } else { 0 };
        let max = area.width.saturating_sub(offset * 2);
        buf.put_line(
            Position::new(area.x + offset, area.y),
            title,
            block.border_style,
            max,
        );
    }
}
