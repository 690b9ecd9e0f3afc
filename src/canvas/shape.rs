//! Drawable shapes and their rasterizers.
//!
//! A [`Shape`] is a self-describing value with no behavior; a
//! [`ShapePainter`] is the matching rasterizer. Painters that receive a
//! shape variant they do not recognize return without effect, which is
//! what makes the ordered dispatch chain safe: the context tries every
//! registered painter and exactly one acts.
//!
//! Rasterization projects shape geometry into pixel coordinates through
//! [`PaintContext::get_point`] and paints every covered pixel. Points
//! that project outside the grid are skipped — normal clipping, not an
//! error.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Position;
use crate::style::{Color, Style};

use super::grid::CanvasGrid;
use super::{AxisBounds, Label};

// =============================================================================
// Shape values
// =============================================================================

/// A circle, center and radius in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// A straight line between two canvas points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
}

/// A bare point cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    pub coords: Vec<(f64, f64)>,
    pub color: Color,
}

/// An axis-aligned rectangle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// A pre-decoded image placed on the canvas.
///
/// `pixels` holds row-major color rows, top row first. When the host had
/// no decoder available it leaves `pixels` as `None` and the painter
/// degrades to a visible placeholder instead of failing the render.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub pixels: Option<Vec<Vec<Color>>>,
    pub color: Color,
}

/// A user-supplied drawing callback.
#[derive(Clone)]
pub struct ClosureShape(pub Rc<dyn Fn(&mut PaintContext<'_>)>);

impl ClosureShape {
    pub fn new(f: impl Fn(&mut PaintContext<'_>) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl fmt::Debug for ClosureShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClosureShape(..)")
    }
}

/// Drawable geometry, dispatched to the matching [`ShapePainter`].
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Line(Line),
    Points(Points),
    Rectangle(Rectangle),
    Map(super::map::Map),
    Sprite(Sprite),
    Closure(ClosureShape),
}

// =============================================================================
// PaintContext
// =============================================================================

/// What a painter sees while rasterizing: the target grid, the virtual
/// coordinate bounds, and the label queue.
pub struct PaintContext<'a> {
    pub(super) grid: &'a mut dyn CanvasGrid,
    pub(super) x_bounds: AxisBounds,
    pub(super) y_bounds: AxisBounds,
    pub(super) labels: &'a mut Vec<Label>,
}

impl PaintContext<'_> {
    /// Project a canvas coordinate onto the pixel grid.
    ///
    /// `col = round((x - xb.min) / xb.length() * (gw - 1))`,
    /// `row = round((yb.max - y) / yb.length() * (gh - 1))` — the row is
    /// inverted because screen rows grow downward while the Y axis grows
    /// upward. Returns `None` outside the grid; callers skip painting.
    pub fn get_point(&self, x: f64, y: f64) -> Option<Position> {
        let res = self.grid.resolution();
        if res.width == 0 || res.height == 0 {
            return None;
        }
        let x_len = self.x_bounds.length();
        let y_len = self.y_bounds.length();
        if x_len <= 0.0 || y_len <= 0.0 {
            return None;
        }

        let col = ((x - self.x_bounds.min) / x_len * (res.width - 1) as f64).round();
        let row = ((self.y_bounds.max - y) / y_len * (res.height - 1) as f64).round();

        if col < 0.0 || col >= res.width as f64 || row < 0.0 || row >= res.height as f64 {
            return None;
        }
        Some(Position::new(col as u16, row as u16))
    }

    /// Paint the pixel covering a canvas coordinate, if any.
    pub fn paint(&mut self, x: f64, y: f64, color: Color) {
        if let Some(pos) = self.get_point(x, y) {
            self.grid.paint(pos, color);
        }
    }

    /// Pixel dimensions of the grid being painted.
    pub fn resolution(&self) -> crate::geometry::Resolution {
        self.grid.resolution()
    }

    /// Queue a text label at a canvas coordinate.
    ///
    /// Labels are projected and drawn after all pixel layers, so text
    /// always sits above pixel content.
    pub fn print(&mut self, x: f64, y: f64, line: impl Into<String>, style: Style) {
        self.labels.push(Label {
            x,
            y,
            line: line.into(),
            style,
        });
    }

    /// Rasterize a straight line in canvas space.
    ///
    /// Steps across the longer pixel-axis delta so the line has no gaps
    /// at the grid's resolution.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        let res = self.grid.resolution();
        let x_len = self.x_bounds.length();
        let y_len = self.y_bounds.length();
        if x_len <= 0.0 || y_len <= 0.0 {
            return;
        }

        let dx = x2 - x1;
        let dy = y2 - y1;
        let px = (dx / x_len * (res.width.max(1) - 1) as f64).abs();
        let py = (dy / y_len * (res.height.max(1) - 1) as f64).abs();
        let steps = px.max(py).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.paint(x1 + dx * t, y1 + dy * t, color);
        }
    }
}

// =============================================================================
// ShapePainter
// =============================================================================

/// A rasterizer for one shape variant.
///
/// Must return without effect for any variant it does not recognize.
pub trait ShapePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>);
}

/// The built-in painter chain, one painter per core shape variant.
pub fn builtin_painters() -> Vec<Box<dyn ShapePainter>> {
    vec![
        Box::new(CirclePainter),
        Box::new(LinePainter),
        Box::new(PointsPainter),
        Box::new(RectanglePainter),
        Box::new(super::map::MapPainter),
        Box::new(SpritePainter),
        Box::new(ClosurePainter),
    ]
}

// =============================================================================
// Built-in painters
// =============================================================================

/// Rasterizes [`Circle`] by sampling 361 integer-degree points.
///
/// Adjacent samples frequently land on the same pixel; duplicate writes
/// are fine (last write wins).
pub struct CirclePainter;

impl ShapePainter for CirclePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Circle(c) = shape else { return };
        for deg in 0..=360u16 {
            let rad = f64::from(deg).to_radians();
            let x = c.x + c.radius * rad.cos();
            let y = c.y + c.radius * rad.sin();
            ctx.paint(x, y, c.color);
        }
    }
}

/// Rasterizes [`Line`] by stepped interpolation.
pub struct LinePainter;

impl ShapePainter for LinePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Line(l) = shape else { return };
        ctx.draw_line(l.x1, l.y1, l.x2, l.y2, l.color);
    }
}

/// Paints each coordinate of a [`Points`] cloud.
pub struct PointsPainter;

impl ShapePainter for PointsPainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Points(p) = shape else { return };
        for &(x, y) in &p.coords {
            ctx.paint(x, y, p.color);
        }
    }
}

/// Rasterizes a [`Rectangle`] outline as four lines.
pub struct RectanglePainter;

impl ShapePainter for RectanglePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Rectangle(r) = shape else { return };
        let (x2, y2) = (r.x + r.width, r.y + r.height);
        ctx.draw_line(r.x, r.y, x2, r.y, r.color);
        ctx.draw_line(x2, r.y, x2, y2, r.color);
        ctx.draw_line(x2, y2, r.x, y2, r.color);
        ctx.draw_line(r.x, y2, r.x, r.y, r.color);
    }
}

/// Paints a [`Sprite`]'s pre-decoded pixel rows, or a visible
/// placeholder when no pixel data is available.
///
/// The placeholder is the sprite rectangle's two diagonals plus a
/// diagnostic label; a missing optional capability must never fail the
/// render.
pub struct SpritePainter;

impl ShapePainter for SpritePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Sprite(s) = shape else { return };

        match &s.pixels {
            Some(rows) if !rows.is_empty() => {
                let n_rows = rows.len() as f64;
                for (row_i, row) in rows.iter().enumerate() {
                    if row.is_empty() {
                        continue;
                    }
                    let n_cols = row.len() as f64;
                    // Top pixel row sits at the top (high y) of the rect.
                    let y = s.y + s.height * (1.0 - (row_i as f64 + 0.5) / n_rows);
                    for (col_i, color) in row.iter().enumerate() {
                        let x = s.x + s.width * (col_i as f64 + 0.5) / n_cols;
                        ctx.paint(x, y, *color);
                    }
                }
            }
            _ => {
                log::debug!("sprite has no pixel data, rendering placeholder");
                let (x2, y2) = (s.x + s.width, s.y + s.height);
                ctx.draw_line(s.x, s.y, x2, y2, s.color);
                ctx.draw_line(s.x, y2, x2, s.y, s.color);
                ctx.print(
                    s.x,
                    s.y + s.height / 2.0,
                    "[image unavailable]",
                    Style::new().fg(s.color),
                );
            }
        }
    }
}

/// Hands the context to a user [`ClosureShape`].
pub struct ClosurePainter;

impl ShapePainter for ClosurePainter {
    fn paint(&self, shape: &Shape, ctx: &mut PaintContext<'_>) {
        let Shape::Closure(c) = shape else { return };
        (c.0)(ctx);
    }
}

// =============================================================================
// Tests
// =============================================================================
