//! Bar-shaped data widgets: BarChart and Sparkline.
//!
//! Both scale their data against a maximum and render with the
//! eighth-height block ramp, so fractional cells come out as partial
//! blocks instead of rounding to whole rows.

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;
use crate::symbols;

// =============================================================================
// BarChart
// =============================================================================

/// Labeled vertical bars.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub values: Vec<(String, u64)>,
    pub bar_width: u16,
    pub bar_gap: u16,
    pub style: Style,
    /// Scale maximum; defaults to the largest value.
    pub max: Option<u64>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            bar_width: 1,
            bar_gap: 1,
            style: Style::default(),
            max: None,
        }
    }
}

pub(super) fn render_bar_chart(chart: &BarChart, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() || chart.values.is_empty() || area.height < 2 {
        return;
    }

    let max = chart
        .max
        .unwrap_or_else(|| chart.values.iter().map(|(_, v)| *v).max().unwrap_or(0))
        .max(1);

    // Bottom row holds labels; bars get the rest.
    let bar_height = area.height - 1;
    let bar_width = chart.bar_width.max(1);
    let stride = bar_width + chart.bar_gap;

    for (i, (label, value)) in chart.values.iter().enumerate() {
        let x0 = area.x + i as u16 * stride;
        if x0 + bar_width > area.x + area.width {
            break;
        }

        let eighths = (*value as f64 / max as f64 * bar_height as f64 * 8.0).round() as u32;
        for dy in 0..bar_height {
            // dy counts up from the bar's bottom row.
            let row_eighths = eighths.saturating_sub(dy as u32 * 8).min(8) as usize;
            if row_eighths == 0 {
                continue;
            }
            let y = area.y + bar_height - 1 - dy;
            for dx in 0..bar_width {
                if let Some(cell) = buf.get_mut(Position::new(x0 + dx, y)) {
                    cell.symbol = symbols::VERTICAL_BLOCKS[row_eighths];
                    cell.set_style(chart.style);
                }
            }
        }

        buf.put_line(
            Position::new(x0, area.bottom()),
            label,
            chart.style,
            bar_width,
        );
    }
}

// =============================================================================
// Sparkline
// =============================================================================

/// A one-row-deep data ribbon, one column per datum.
#[derive(Debug, Clone, Default)]
pub struct Sparkline {
    pub data: Vec<u64>,
    pub style: Style,
    pub max: Option<u64>,
}

pub(super) fn render_sparkline(spark: &Sparkline, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() || spark.data.is_empty() {
        return;
    }

    let max = spark
        .max
        .unwrap_or_else(|| spark.data.iter().copied().max().unwrap_or(0))
        .max(1);

    for (i, value) in spark.data.iter().take(area.width as usize).enumerate() {
        let eighths = (*value as f64 / max as f64 * area.height as f64 * 8.0).round() as u32;
        for dy in 0..area.height {
            let row_eighths = eighths.saturating_sub(dy as u32 * 8).min(8) as usize;
            if row_eighths == 0 {
                continue;
            }
            let pos = Position::new(area.x + i as u16, area.y + area.height - 1 - dy);
            if let Some(cell) = buf.get_mut(pos) {
                cell.symbol = symbols::VERTICAL_BLOCKS[row_eighths];
                cell.set_style(spark.style);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_scales_to_max() {
        let area = Area::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        render_sparkline(
            &Sparkline {
                data: vec![8, 4, 2, 0],
                max: Some(8),
                ..Sparkline::default()
            },
            &mut buf,
            area,
        );
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, '█');
        assert_eq!(buf.get(Position::new(1, 0)).unwrap().symbol, '▄');
        assert_eq!(buf.get(Position::new(2, 0)).unwrap().symbol, '▂');
        assert_eq!(buf.get(Position::new(3, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_sparkline_clips_to_width() {
        let area = Area::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        render_sparkline(
            &Sparkline {
                data: vec![1, 1, 1, 1],
                max: Some(1),
                ..Sparkline::default()
            },
            &mut buf,
            area,
        );
        let painted = buf.cells().iter().filter(|c| c.symbol == '█').count();
        assert_eq!(painted, 2);
    }

    #[test]
    fn test_bar_chart_bars_and_labels() {
        let area = Area::new(0, 0, 7, 5);
        let mut buf = Buffer::empty(area);
        render_bar_chart(
            &BarChart {
                values: vec![("a".into(), 4), ("b".into(), 2)],
                bar_width: 2,
                bar_gap: 1,
                max: Some(4),
                ..BarChart::default()
            },
            &mut buf,
            area,
        );

        // First bar: full height (4 rows above the label row).
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, '█');
        assert_eq!(buf.get(Position::new(0, 3)).unwrap().symbol, '█');
        // Second bar: half height.
        assert_eq!(buf.get(Position::new(3, 1)).unwrap().symbol, ' ');
        assert_eq!(buf.get(Position::new(3, 2)).unwrap().symbol, '█');
        // Labels on the bottom row.
        assert_eq!(buf.get(Position::new(0, 4)).unwrap().symbol, 'a');
        assert_eq!(buf.get(Position::new(3, 4)).unwrap().symbol, 'b');
    }

    #[test]
    fn test_bar_chart_partial_block() {
        let area = Area::new(0, 0, 1, 3);
        let mut buf = Buffer::empty(area);
        render_bar_chart(
            &BarChart {
                values: vec![("".into(), 1)],
                bar_width: 1,
                bar_gap: 0,
                max: Some(4),
                ..BarChart::default()
            },
            &mut buf,
            area,
        );
        // 1/4 of 2 rows = 4 eighths: half block on the bottom bar row.
        assert_eq!(buf.get(Position::new(0, 1)).unwrap().symbol, '▄');
    }
}
