//! The canvas subsystem: resolution-scaled pixel grids, shape
//! rasterization, layer accumulation, and projection back into buffer
//! cells.
//!
//! # Architecture
//!
//! A [`CanvasContext`] binds a painter chain, two [`AxisBounds`], and
//! one [`CanvasGrid`] variant selected by a [`Marker`]. Drawing runs the
//! shape through the painter chain (exactly one painter matches);
//! [`save_layer`](CanvasContext::save_layer) snapshots the grid into an
//! immutable [`Layer`] and resets it, so subsequent draws start a fresh
//! overlapping pass without disturbing what was committed. Layers are
//! append-only and composited back-to-front; queued [`Label`]s are drawn
//! last so text sits above pixel content.

mod grid;
mod map;
mod shape;

pub use grid::{BrailleGrid, CanvasGrid, CharGrid, HalfBlockGrid, Layer};
pub use map::{Map, MapPainter, MapResolution};
pub use shape::{
    builtin_painters, Circle, CirclePainter, ClosurePainter, ClosureShape, Line, LinePainter,
    PaintContext, Points, PointsPainter, Rectangle, RectanglePainter, Shape, ShapePainter, Sprite,
    SpritePainter,
};

use log::trace;

use crate::buffer::Buffer;
use crate::geometry::{Area, Position};
use crate::style::Style;
use crate::symbols;

// =============================================================================
// AxisBounds
// =============================================================================

/// A virtual coordinate-space interval.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl From<[f64; 2]> for AxisBounds {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

// =============================================================================
// Marker
// =============================================================================

/// Selects which grid variant (and glyph) a canvas draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// `CharGrid` drawing `•`.
    #[default]
    Dot,
    /// `CharGrid` drawing `█`.
    Block,
    /// `CharGrid` drawing `▄`.
    Bar,
    /// `BrailleGrid`, 2x4 dots per cell.
    Braille,
    /// `HalfBlockGrid`, 2 vertical pixels per cell.
    HalfBlock,
}

impl Marker {
    /// Build the grid this marker selects, for a `width x height` cell
    /// area.
    pub fn grid(self, width: u16, height: u16) -> Box<dyn CanvasGrid> {
        match self {
            Marker::Dot => Box::new(CharGrid::new(width, height, symbols::DOT)),
            Marker::Block => Box::new(CharGrid::new(width, height, symbols::BLOCK)),
            Marker::Bar => Box::new(CharGrid::new(width, height, symbols::BAR)),
            Marker::Braille => Box::new(BrailleGrid::new(width, height)),
            Marker::HalfBlock => Box::new(HalfBlockGrid::new(width, height)),
        }
    }
}

// =============================================================================
// Label
// =============================================================================

/// A text line anchored at a canvas coordinate, drawn after all pixel
/// layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub line: String,
    pub style: Style,
}

// =============================================================================
// CanvasContext
// =============================================================================

/// A drawing context over one grid, owned exclusively for the duration
/// of a single render.
pub struct CanvasContext<'a> {
    painters: &'a [Box<dyn ShapePainter>],
    grid: Box<dyn CanvasGrid>,
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    layers: Vec<Layer>,
    labels: Vec<Label>,
    dirty: bool,
}

impl<'a> CanvasContext<'a> {
    /// Open a context over a `width x height` cell region.
    pub fn new(
        painters: &'a [Box<dyn ShapePainter>],
        marker: Marker,
        width: u16,
        height: u16,
        x_bounds: AxisBounds,
        y_bounds: AxisBounds,
    ) -> Self {
        Self {
            painters,
            grid: marker.grid(width, height),
            x_bounds,
            y_bounds,
            layers: Vec::new(),
            labels: Vec::new(),
            dirty: false,
        }
    }

    /// True when something was drawn since the last layer save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Committed layers so far.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Draw a shape through the painter chain.
    ///
    /// Every registered painter is tried in order; the one matching the
    /// shape's variant rasterizes it, the rest no-op.
    pub fn draw(&mut self, shape: &Shape) {
        self.dirty = true;
        let mut ctx = PaintContext {
            grid: &mut *self.grid,
            x_bounds: self.x_bounds,
            y_bounds: self.y_bounds,
            labels: &mut self.labels,
        };
        for painter in self.painters {
            painter.paint(shape, &mut ctx);
        }
    }

    /// Queue a text label at a canvas coordinate.
    pub fn print(&mut self, x: f64, y: f64, line: impl Into<String>, style: Style) {
        self.labels.push(Label {
            x,
            y,
            line: line.into(),
            style,
        });
    }

    /// Snapshot the grid into a new layer and reset it blank.
    pub fn save_layer(&mut self) {
        self.layers.push(self.grid.save());
        self.grid.reset();
        self.dirty = false;
    }

    /// Commit outstanding drawing, if any.
    ///
    /// Calls [`save_layer`](Self::save_layer) exactly once when dirty;
    /// idempotent no-op otherwise.
    pub fn finish(&mut self) {
        if self.dirty {
            self.save_layer();
        }
    }

    /// Composite committed layers and queued labels into `buf` at
    /// `area`.
    ///
    /// Layers are iterated in insertion order; blank cells are skipped
    /// so lower layers remain visible. Labels are drawn last, clipped to
    /// both axis bounds, positioned by the same projection formula the
    /// shapes use.
    pub fn composite(&self, buf: &mut Buffer, area: Area) {
        trace!(
            "compositing {} layers, {} labels into {:?}",
            self.layers.len(),
            self.labels.len(),
            area
        );

        for layer in &self.layers {
            for (i, &symbol) in layer.chars.iter().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                let width = layer.width.max(1) as usize;
                let pos = Position {
                    x: area.x + (i % width) as u16,
                    y: area.y + (i / width) as u16,
                };
                if let Some(cell) = buf.get_mut(pos) {
                    let (fg, bg) = layer.colors[i];
                    cell.symbol = symbol;
                    cell.fg = fg;
                    cell.bg = bg;
                }
            }
        }

        for label in &self.labels {
            if !self.x_bounds.contains(label.x) || !self.y_bounds.contains(label.y) {
                continue;
            }
            let Some((col, row)) = self.project_cell(label.x, label.y, area) else {
                continue;
            };
            let pos = Position {
                x: area.x + col,
                y: area.y + row,
            };
            let max_width = area.width - col;
            buf.put_line(pos, &label.line, label.style, max_width);
        }
    }

    /// Project a canvas coordinate onto the cell grid of `area`.
    fn project_cell(&self, x: f64, y: f64, area: Area) -> Option<(u16, u16)> {
        if area.is_empty() || self.x_bounds.length() <= 0.0 || self.y_bounds.length() <= 0.0 {
            return None;
        }
        let col = ((x - self.x_bounds.min) / self.x_bounds.length()
            * (area.width - 1) as f64)
            .round();
        let row = ((self.y_bounds.max - y) / self.y_bounds.length()
            * (area.height - 1) as f64)
            .round();
        if col < 0.0 || col >= area.width as f64 || row < 0.0 || row >= area.height as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn context<'a>(painters: &'a [Box<dyn ShapePainter>], marker: Marker) -> CanvasContext<'a> {
        CanvasContext::new(
            painters,
            marker,
            10,
            10,
            AxisBounds::new(0.0, 10.0),
            AxisBounds::new(0.0, 10.0),
        )
    }

    #[test]
    fn test_draw_sets_dirty() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Dot);
        assert!(!ctx.is_dirty());

        ctx.draw(&Shape::Points(Points {
            coords: vec![(5.0, 5.0)],
            color: Color::Red,
        }));
        assert!(ctx.is_dirty());
    }

    #[test]
    fn test_finish_saves_once_when_dirty() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Dot);

        ctx.draw(&Shape::Points(Points {
            coords: vec![(5.0, 5.0)],
            color: Color::Red,
        }));
        ctx.finish();
        assert_eq!(ctx.layers().len(), 1);

        // Not dirty anymore: a second finish is a no-op.
        ctx.finish();
        assert_eq!(ctx.layers().len(), 1);
    }

    #[test]
    fn test_consecutive_save_layers_second_blank() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Dot);

        ctx.draw(&Shape::Points(Points {
            coords: vec![(5.0, 5.0)],
            color: Color::Red,
        }));
        ctx.save_layer();
        ctx.save_layer();

        assert_eq!(ctx.layers().len(), 2);
        assert!(ctx.layers()[0].chars.iter().any(|&c| c != ' '));
        assert!(ctx.layers()[1].chars.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_composite_later_layers_overwrite() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Dot);
        let area = Area::new(0, 0, 10, 10);

        ctx.draw(&Shape::Points(Points {
            coords: vec![(0.0, 10.0)],
            color: Color::Red,
        }));
        ctx.save_layer();
        ctx.draw(&Shape::Points(Points {
            coords: vec![(0.0, 10.0)],
            color: Color::Blue,
        }));
        ctx.finish();

        let mut buf = Buffer::empty(area);
        ctx.composite(&mut buf, area);
        // Canvas (0, 10) is the top-left cell; the second layer wins.
        let cell = buf.get(Position::new(0, 0)).unwrap();
        assert_eq!(cell.symbol, symbols::DOT);
        assert_eq!(cell.fg, Color::Blue);
    }

    #[test]
    fn test_composite_blank_cells_keep_lower_layer() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Dot);
        let area = Area::new(0, 0, 10, 10);

        ctx.draw(&Shape::Points(Points {
            coords: vec![(0.0, 10.0)],
            color: Color::Red,
        }));
        ctx.save_layer();
        // Second layer paints a different cell only.
        ctx.draw(&Shape::Points(Points {
            coords: vec![(10.0, 0.0)],
            color: Color::Blue,
        }));
        ctx.finish();

        let mut buf = Buffer::empty(area);
        ctx.composite(&mut buf, area);
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().fg, Color::Red);
        assert_eq!(buf.get(Position::new(9, 9)).unwrap().fg, Color::Blue);
    }

    #[test]
    fn test_labels_drawn_above_layers_and_clipped() {
        let painters = builtin_painters();
        let mut ctx = context(&painters, Marker::Block);
        let area = Area::new(0, 0, 10, 10);

        ctx.draw(&Shape::Rectangle(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color: Color::Red,
        }));
        ctx.print(0.0, 10.0, "hi", Style::new().fg(Color::White));
        // Outside the bounds: dropped.
        ctx.print(11.0, 5.0, "nope", Style::new());
        ctx.finish();

        let mut buf = Buffer::empty(area);
        ctx.composite(&mut buf, area);

        let cell = buf.get(Position::new(0, 0)).unwrap();
        assert_eq!(cell.symbol, 'h');
        assert_eq!(buf.get(Position::new(1, 0)).unwrap().symbol, 'i');
        assert!(!buf.cells().iter().any(|c| c.symbol == 'n'));
    }

    #[test]
    fn test_half_block_point_projection_end_to_end() {
        // Canvas: xBounds [0,10], yBounds [0,10], HalfBlock marker over
        // a 5x5 cell area -> 5x10 pixel grid. One point at (5, 5):
        // col = round(5/10 * 4) = 2, row = round(5/10 * 9) = round(4.5)
        // = 5 -> cell row 2, lower half.
        let painters = builtin_painters();
        let mut ctx = CanvasContext::new(
            &painters,
            Marker::HalfBlock,
            5,
            5,
            AxisBounds::new(0.0, 10.0),
            AxisBounds::new(0.0, 10.0),
        );
        let area = Area::new(0, 0, 5, 5);

        ctx.draw(&Shape::Points(Points {
            coords: vec![(5.0, 5.0)],
            color: Color::Green,
        }));
        ctx.finish();

        let mut buf = Buffer::empty(area);
        ctx.composite(&mut buf, area);

        let cell = buf.get(Position::new(2, 2)).unwrap();
        assert_eq!(cell.symbol, symbols::HALF_BLOCK_LOWER);
        assert_eq!(cell.fg, Color::Green);
        // Exactly one cell painted.
        let painted = buf.cells().iter().filter(|c| c.symbol != ' ').count();
        assert_eq!(painted, 1);
    }
}
