//! Chart widget: XY datasets plotted through a Braille canvas.

use crate::buffer::Buffer;
use crate::canvas::{AxisBounds, CanvasContext, Line, Marker, Points, Shape};
use crate::geometry::Area;
use crate::style::{Color, Style};

use super::RendererSet;

/// How a dataset's points are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    /// One Braille dot per point.
    #[default]
    Scatter,
    /// Consecutive points joined by line segments.
    Line,
}

/// One named data series.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub kind: GraphKind,
}

/// An XY chart over a Braille pixel grid, one layer per dataset.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    pub datasets: Vec<Dataset>,
    pub x_bounds: AxisBounds,
    pub y_bounds: AxisBounds,
    pub style: Style,
}

pub(super) fn render(chart: &Chart, registry: &RendererSet, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    buf.set_style(area, chart.style);

    let mut ctx = CanvasContext::new(
        registry.painters(),
        Marker::Braille,
        area.width,
        area.height,
        chart.x_bounds,
        chart.y_bounds,
    );

    // Each dataset is its own layer, so later datasets draw over
    // earlier ones at cell granularity.
    for dataset in &chart.datasets {
        match dataset.kind {
            GraphKind::Scatter => {
                ctx.draw(&Shape::Points(Points {
                    coords: dataset.points.clone(),
                    color: dataset.color,
                }));
            }
            GraphKind::Line => {
                for pair in dataset.points.windows(2) {
                    ctx.draw(&Shape::Line(Line {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color: dataset.color,
                    }));
                }
            }
        }
        ctx.finish();
    }

    ctx.composite(buf, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::symbols;

    fn bounds() -> (AxisBounds, AxisBounds) {
        (AxisBounds::new(0.0, 10.0), AxisBounds::new(0.0, 10.0))
    }

    #[test]
    fn test_chart_scatter_paints_braille() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        let (x_bounds, y_bounds) = bounds();
        render(
            &Chart {
                datasets: vec![Dataset {
                    points: vec![(0.0, 10.0)],
                    color: Color::Red,
                    ..Dataset::default()
                }],
                x_bounds,
                y_bounds,
                ..Chart::default()
            },
            &set,
            &mut buf,
            area,
        );

        // Top-left point lands in the top-left cell's upper-left dot.
        let cell = buf.get(Position::new(0, 0)).unwrap();
        assert_ne!(cell.symbol, ' ');
        assert!((cell.symbol as u32) >= symbols::BRAILLE_BLANK as u32);
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_chart_line_spans_cells() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        let (x_bounds, y_bounds) = bounds();
        render(
            &Chart {
                datasets: vec![Dataset {
                    points: vec![(0.0, 0.0), (10.0, 10.0)],
                    color: Color::Green,
                    kind: GraphKind::Line,
                    ..Dataset::default()
                }],
                x_bounds,
                y_bounds,
                ..Chart::default()
            },
            &set,
            &mut buf,
            area,
        );

        // A diagonal touches both corners.
        assert_ne!(buf.get(Position::new(0, 4)).unwrap().symbol, ' ');
        assert_ne!(buf.get(Position::new(4, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_chart_later_dataset_wins_cell() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        let (x_bounds, y_bounds) = bounds();
        render(
            &Chart {
                datasets: vec![
                    Dataset {
                        points: vec![(0.0, 10.0)],
                        color: Color::Red,
                        ..Dataset::default()
                    },
                    Dataset {
                        points: vec![(0.0, 10.0)],
                        color: Color::Blue,
                        ..Dataset::default()
                    },
                ],
                x_bounds,
                y_bounds,
                ..Chart::default()
            },
            &set,
            &mut buf,
            area,
        );

        assert_eq!(buf.get(Position::new(0, 0)).unwrap().fg, Color::Blue);
    }
}
