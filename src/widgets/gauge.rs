//! Gauge widget: a horizontal progress bar with a centered label.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;
use crate::symbols;

/// A progress gauge.
///
/// `ratio` is clamped to `[0, 1]`. The filled region uses eighth-width
/// blocks for the fractional final cell. When `label` is `None` a
/// percentage is shown.
#[derive(Debug, Clone, Default)]
pub struct Gauge {
    pub ratio: f64,
    pub style: Style,
    pub gauge_style: Style,
    pub label: Option<String>,
}

pub(super) fn render(gauge: &Gauge, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    buf.set_style(area, gauge.style);

    let ratio = gauge.ratio.clamp(0.0, 1.0);
    let filled_eighths = (ratio * area.width as f64 * 8.0).round() as u32;
    let full_cells = (filled_eighths / 8) as u16;
    let partial = (filled_eighths % 8) as usize;

    for y in area.top()..=area.bottom() {
        for x in 0..full_cells.min(area.width) {
            if let Some(cell) = buf.get_mut(Position::new(area.x + x, y)) {
                cell.symbol = symbols::HORIZONTAL_BLOCKS[8];
                cell.set_style(gauge.gauge_style);
            }
        }
        if partial > 0 && full_cells < area.width {
            if let Some(cell) = buf.get_mut(Position::new(area.x + full_cells, y)) {
                cell.symbol = symbols::HORIZONTAL_BLOCKS[partial];
                cell.set_style(gauge.gauge_style);
            }
        }
    }

    // Label centered on the middle row, above the bar glyphs.
    let text = match &gauge.label {
        Some(label) => label.clone(),
        None => format!("{}%", (ratio * 100.0).round() as u16),
    };
    let text_width = text.chars().count() as u16;
    if text_width <= area.width {
        let x = area.x + (area.width - text_width) / 2;
        let y = area.y + area.height / 2;
        buf.put_line(Position::new(x, y), &text, gauge.style, area.width);
    }
}
