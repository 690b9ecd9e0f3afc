//! Tabs and Scrollbar widgets.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;
use crate::symbols;

// =============================================================================
// Tabs
// =============================================================================

/// A single row of tab titles separated by a divider glyph.
#[derive(Debug, Clone)]
pub struct Tabs {
    pub titles: Vec<String>,
    pub selected: usize,
    pub style: Style,
    pub highlight_style: Style,
    pub divider: char,
}

impl Default for Tabs {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            selected: 0,
            style: Style::default(),
            highlight_style: Style::default(),
            divider: '│',
        }
    }
}

pub(super) fn render_tabs(tabs: &Tabs, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() || tabs.titles.is_empty() {
        return;
    }

    let y = area.top();
    let mut x = area.x;
    let end = area.right();

    for (i, title) in tabs.titles.iter().enumerate() {
        if x > end {
            break;
        }
        let style = if i == tabs.selected {
            tabs.style.patch(tabs.highlight_style)
        } else {
            tabs.style
        };
        let remaining = end - x + 1;
        x = buf.put_line(Position::new(x, y), title, style, remaining);

        // Divider between titles, never after the last.
        if i + 1 < tabs.titles.len() && x <= end {
            if let Some(cell) = buf.get_mut(Position::new(x, y)) {
                cell.symbol = tabs.divider;
                cell.set_style(tabs.style);
            }
            x += 1;
        }
    }
}

// =============================================================================
// Scrollbar
// =============================================================================

/// A vertical scrollbar drawn on the right edge of its area.
///
/// `total` is the content length in rows; `position` is the first
/// visible row. The thumb length is proportional to the visible
/// fraction, with a one-row minimum so it never vanishes.
#[derive(Debug, Clone, Default)]
pub struct Scrollbar {
    pub total: usize,
    pub position: usize,
    pub style: Style,
}

pub(super) fn render_scrollbar(bar: &Scrollbar, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    let track_height = area.height as usize;
    let x = area.right();

    // Content fits: track only, no thumb.
    if bar.total <= track_height {
        for y in area.top()..=area.bottom() {
            if let Some(cell) = buf.get_mut(Position::new(x, y)) {
                cell.symbol = symbols::SCROLLBAR_TRACK;
                cell.set_style(bar.style);
            }
        }
        return;
    }

    let thumb_height = (track_height * track_height / bar.total).max(1);
    let max_position = bar.total - track_height;
    let position = bar.position.min(max_position);
    let max_offset = track_height - thumb_height;
    let thumb_offset = position * max_offset / max_position;

    for row in 0..track_height {
        let symbol = if row >= thumb_offset && row < thumb_offset + thumb_height {
            symbols::SCROLLBAR_THUMB
        } else {
            symbols::SCROLLBAR_TRACK
        };
        if let Some(cell) = buf.get_mut(Position::new(x, area.y + row as u16)) {
            cell.symbol = symbol;
            cell.set_style(bar.style);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
