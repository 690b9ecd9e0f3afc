//! Canvas widget: declarative shape layers projected into buffer cells.

use crate::buffer::Buffer;
use crate::canvas::{AxisBounds, CanvasContext, Label, Marker, Shape};
use crate::geometry::Area;
use crate::style::Style;

use super::RendererSet;

/// A canvas: virtual coordinate bounds, a marker (grid variant), and
/// ordered layers of shapes.
///
/// Each entry in `layers` becomes one compositing [`Layer`]: shapes
/// within a layer share a pixel grid pass, later layers overwrite
/// earlier ones where painted. Labels are drawn above all layers.
///
/// [`Layer`]: crate::canvas::Layer
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub x_bounds: AxisBounds,
    pub y_bounds: AxisBounds,
    pub marker: Marker,
    pub background: Style,
    pub layers: Vec<Vec<Shape>>,
    pub labels: Vec<Label>,
}

pub(super) fn render(canvas: &Canvas, registry: &RendererSet, buf: &mut Buffer, area: Area) {
    let area = buf.area().intersection(area);
    if area.is_empty() {
        return;
    }

    // Background fill first, then pixel content, then text.
    buf.set_style(area, canvas.background);

    let mut ctx = CanvasContext::new(
        registry.painters(),
        canvas.marker,
        area.width,
        area.height,
        canvas.x_bounds,
        canvas.y_bounds,
    );

    for shapes in &canvas.layers {
        for shape in shapes {
            ctx.draw(shape);
        }
        ctx.finish();
    }

    for label in &canvas.labels {
        ctx.print(label.x, label.y, label.line.clone(), label.style);
    }

    ctx.composite(buf, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Line, Points};
    use crate::geometry::Position;
    use crate::style::Color;
    use crate::symbols;
    use crate::widgets::Widget;

    #[test]
    fn test_canvas_widget_end_to_end() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);

        let widget = Widget::Canvas(Canvas {
            x_bounds: AxisBounds::new(0.0, 10.0),
            y_bounds: AxisBounds::new(0.0, 10.0),
            marker: Marker::HalfBlock,
            background: Style::new().bg(Color::Black),
            layers: vec![vec![Shape::Points(Points {
                coords: vec![(5.0, 5.0)],
                color: Color::Green,
            })]],
            labels: vec![],
        });
        set.render(&widget, &mut buf, area).unwrap();

        // Background applied everywhere.
        assert!(buf.cells().iter().all(|c| c.bg == Color::Black
            || c.symbol == symbols::HALF_BLOCK_LOWER));
        // Projection: col = round(5/10*4) = 2, pixel row = round(5/10*9)
        // = 5 -> cell (2, 2), lower half painted.
        let cell = buf.get(Position::new(2, 2)).unwrap();
        assert_eq!(cell.symbol, symbols::HALF_BLOCK_LOWER);
        assert_eq!(cell.fg, Color::Green);
    }

    #[test]
    fn test_canvas_widget_layers_stack() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);

        let widget = Widget::Canvas(Canvas {
            x_bounds: AxisBounds::new(0.0, 3.0),
            y_bounds: AxisBounds::new(0.0, 3.0),
            marker: Marker::Block,
            background: Style::new(),
            layers: vec![
                vec![Shape::Line(Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 3.0,
                    y2: 3.0,
                    color: Color::Red,
                })],
                vec![Shape::Points(Points {
                    coords: vec![(0.0, 0.0)],
                    color: Color::Blue,
                })],
            ],
            labels: vec![],
        });
        set.render(&widget, &mut buf, area).unwrap();

        // The second layer overwrote the diagonal's bottom-left end.
        assert_eq!(buf.get(Position::new(0, 3)).unwrap().fg, Color::Blue);
        assert_eq!(buf.get(Position::new(3, 0)).unwrap().fg, Color::Red);
    }
}
