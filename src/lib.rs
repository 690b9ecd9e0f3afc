//! # weft-tui
//!
//! A terminal cell-grid rendering and compositing engine.
//!
//! ## Architecture
//!
//! Rendering is a pure function from a declarative widget tree to a
//! grid of styled cells, followed by a diff against the previous frame:
//!
//! ```text
//! Widget tree → RendererSet dispatch → Buffer → diff → Backend
//! ```
//!
//! Three subsystems feed that pipeline:
//!
//! - [`layout`] - constraint solver partitioning areas into
//!   length/percentage/min/max slices
//! - [`canvas`] - virtual-coordinate shape rasterization onto
//!   multi-resolution pixel grids (dot, block, Braille, half-block)
//! - [`widgets`] - data-only widget values plus the open renderer
//!   dispatch ([`widgets::DisplayExtension`])
//!
//! Almost nothing is an error: out-of-bounds writes, clipped shapes,
//! and unrecognized widget variants are silent no-ops. The exceptions
//! are malformed containers and backend I/O, surfaced as
//! [`error::RenderError`].
//!
//! The crate is single-threaded: render state is exclusively owned by
//! the in-flight call and types make no `Sync` promises.

pub mod backend;
pub mod buffer;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod symbols;
pub mod terminal;
pub mod widgets;

// Re-export commonly used items
pub use backend::{Backend, ClearType, CrosstermBackend, TestBackend};
pub use buffer::{Buffer, Cell};
pub use canvas::{
    AxisBounds, CanvasContext, Circle, ClosureShape, Label, Line, Map, MapResolution, Marker,
    Points, Rectangle, Shape, ShapePainter, Sprite,
};
pub use config::{RenderConfig, Theme};
pub use error::{RenderError, Result};
pub use geometry::{Area, Position, Resolution};
pub use layout::{Constraint, Direction, Layout, LayoutCache};
pub use style::{Color, Modifier, Style};
pub use terminal::{Terminal, Viewport};
pub use widgets::{
    BarChart, Block, BorderKind, Canvas, Chart, Composite, CoreExtension, CustomWidget, Dataset,
    DisplayExtension, Gauge, GraphKind, Grid, List, RawWidget, RendererSet, Scrollbar, Sparkline,
    Table, Tabs, Widget, WidgetRenderer,
};
