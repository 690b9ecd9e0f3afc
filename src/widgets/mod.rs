//! Widgets and the polymorphic renderer dispatch.
//!
//! # Architecture
//!
//! A [`Widget`] is a data-only value; all rendering logic lives in
//! [`WidgetRenderer`]s. The [`RendererSet`] aggregate resolves a
//! widget's runtime variant:
//!
//! - self-rendering widgets ([`Widget::Raw`]) are delegated to
//!   immediately;
//! - otherwise every registered renderer is invoked in order, each
//!   passing the set itself back down so nested renders (containers,
//!   canvases) always resolve through the full registry. Exactly one
//!   renderer has effect per widget instance.
//!
//! The closed built-in variants dispatch through a single `match` (the
//! keyed form); the ordered chain exists for the open extension
//! boundary: a [`DisplayExtension`] contributes additional painters and
//! renderers, typically recognizing [`Widget::Custom`] values by their
//! kind tag, with no change to the dispatch logic here.

mod bars;
mod block;
mod canvas;
mod chart;
mod container;
mod gauge;
mod list;
mod table;
mod tabs;

pub use bars::{BarChart, Sparkline};
pub use block::{Block, BorderKind};
pub use canvas::Canvas;
pub use chart::{Chart, Dataset, GraphKind};
pub use container::{Composite, Grid};
pub use gauge::Gauge;
pub use list::List;
pub use table::Table;
pub use tabs::{Scrollbar, Tabs};

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::buffer::Buffer;
use crate::canvas::{builtin_painters, ShapePainter};
use crate::error::Result;
use crate::geometry::Area;

// =============================================================================
// Widget
// =============================================================================

/// A widget that draws itself straight into the buffer.
///
/// The escape hatch for hosts that want imperative access to the cells;
/// the dispatch layer delegates to it without consulting any renderer.
#[derive(Clone)]
pub struct RawWidget(pub Rc<dyn Fn(&mut Buffer, Area)>);

impl RawWidget {
    pub fn new(f: impl Fn(&mut Buffer, Area) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl fmt::Debug for RawWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawWidget(..)")
    }
}

/// An extension-defined widget: a kind tag plus opaque data.
///
/// The core renderer ignores these; an extension's renderer recognizes
/// its own kind tags and downcasts the payload.
#[derive(Clone)]
pub struct CustomWidget {
    pub kind: &'static str,
    pub data: Rc<dyn Any>,
}

impl fmt::Debug for CustomWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomWidget({})", self.kind)
    }
}

/// The declarative widget tree node. Carries only data, no rendering
/// logic.
#[derive(Debug, Clone)]
pub enum Widget {
    Block(Block),
    Grid(Grid),
    Composite(Composite),
    Canvas(Canvas),
    Table(Table),
    Chart(Chart),
    List(List),
    Gauge(Gauge),
    BarChart(BarChart),
    Sparkline(Sparkline),
    Tabs(Tabs),
    Scrollbar(Scrollbar),
    Raw(RawWidget),
    Custom(CustomWidget),
}

macro_rules! widget_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for Widget {
            fn from(value: $ty) -> Self {
                Widget::$variant(value)
            }
        })*
    };
}

widget_from!(
    Block(Block),
    Grid(Grid),
    Composite(Composite),
    Canvas(Canvas),
    Table(Table),
    Chart(Chart),
    List(List),
    Gauge(Gauge),
    BarChart(BarChart),
    Sparkline(Sparkline),
    Tabs(Tabs),
    Scrollbar(Scrollbar),
    Raw(RawWidget),
    Custom(CustomWidget),
);

// =============================================================================
// WidgetRenderer
// =============================================================================

/// A renderer for one or more widget variants.
///
/// Mutates cells of `buf` within `area` and must have no effect for any
/// variant it does not recognize. `registry` is the full aggregate so
/// recursive renders resolve through every registered renderer.
pub trait WidgetRenderer {
    fn render(
        &self,
        registry: &RendererSet,
        widget: &Widget,
        buf: &mut Buffer,
        area: Area,
    ) -> Result<()>;
}

/// A plugin contributing shape painters and widget renderers.
///
/// Registries are built by concatenating one or more extensions'
/// contributions; new shape and widget kinds are added purely by
/// registering instances.
pub trait DisplayExtension {
    fn shape_painters(&self) -> Vec<Box<dyn ShapePainter>>;
    fn widget_renderers(&self) -> Vec<Box<dyn WidgetRenderer>>;
}

// =============================================================================
// RendererSet
// =============================================================================

/// The aggregate dispatch: ordered renderers plus the shape painter
/// chain shared by canvas renders.
pub struct RendererSet {
    renderers: Vec<Box<dyn WidgetRenderer>>,
    painters: Vec<Box<dyn ShapePainter>>,
}

impl RendererSet {
    /// The core built-ins only.
    pub fn core() -> Self {
        Self::from_extensions(&[&CoreExtension])
    }

    /// Concatenate extension contributions, in order. Core built-ins
    /// should come first: `RendererSet::from_extensions(&[&CoreExtension,
    /// &my_ext])`.
    pub fn from_extensions(extensions: &[&dyn DisplayExtension]) -> Self {
        let mut renderers = Vec::new();
        let mut painters = Vec::new();
        for ext in extensions {
            renderers.extend(ext.widget_renderers());
            painters.extend(ext.shape_painters());
        }
        Self {
            renderers,
            painters,
        }
    }

    /// The shape painter chain, for canvas renders.
    pub fn painters(&self) -> &[Box<dyn ShapePainter>] {
        &self.painters
    }

    /// Render a widget into `buf` at `area`.
    pub fn render(&self, widget: &Widget, buf: &mut Buffer, area: Area) -> Result<()> {
        trace!("render {:?} into {:?}", widget_name(widget), area);

        // Self-rendering widgets bypass the chain entirely.
        if let Widget::Raw(raw) = widget {
            (raw.0)(buf, area);
            return Ok(());
        }
        for renderer in &self.renderers {
            renderer.render(self, widget, buf, area)?;
        }
        Ok(())
    }
}

fn widget_name(widget: &Widget) -> &'static str {
    match widget {
        Widget::Block(_) => "Block",
        Widget::Grid(_) => "Grid",
        Widget::Composite(_) => "Composite",
        Widget::Canvas(_) => "Canvas",
        Widget::Table(_) => "Table",
        Widget::Chart(_) => "Chart",
        Widget::List(_) => "List",
        Widget::Gauge(_) => "Gauge",
        Widget::BarChart(_) => "BarChart",
        Widget::Sparkline(_) => "Sparkline",
        Widget::Tabs(_) => "Tabs",
        Widget::Scrollbar(_) => "Scrollbar",
        Widget::Raw(_) => "Raw",
        Widget::Custom(c) => c.kind,
    }
}

// =============================================================================
// CoreExtension
// =============================================================================

/// The built-in extension: every core shape painter and widget
/// renderer.
pub struct CoreExtension;

impl DisplayExtension for CoreExtension {
    fn shape_painters(&self) -> Vec<Box<dyn ShapePainter>> {
        builtin_painters()
    }

    fn widget_renderers(&self) -> Vec<Box<dyn WidgetRenderer>> {
        vec![Box::new(CoreWidgetRenderer)]
    }
}

/// Renders every closed built-in variant through one keyed `match`.
///
/// `Raw` never reaches here (fast-pathed by the set); `Custom` is an
/// extension concern and no-ops.
pub struct CoreWidgetRenderer;

impl WidgetRenderer for CoreWidgetRenderer {
    fn render(
        &self,
        registry: &RendererSet,
        widget: &Widget,
        buf: &mut Buffer,
        area: Area,
    ) -> Result<()> {
        match widget {
            Widget::Block(w) => block::render(w, buf, area),
            Widget::Grid(w) => container::render_grid(w, registry, buf, area)?,
            Widget::Composite(w) => container::render_composite(w, registry, buf, area)?,
            Widget::Canvas(w) => canvas::render(w, registry, buf, area),
            Widget::Table(w) => table::render(w, buf, area),
            Widget::Chart(w) => chart::render(w, registry, buf, area),
            Widget::List(w) => list::render(w, buf, area),
            Widget::Gauge(w) => gauge::render(w, buf, area),
            Widget::BarChart(w) => bars::render_bar_chart(w, buf, area),
            Widget::Sparkline(w) => bars::render_sparkline(w, buf, area),
            Widget::Tabs(w) => tabs::render_tabs(w, buf, area),
            Widget::Scrollbar(w) => tabs::render_scrollbar(w, buf, area),
            Widget::Raw(_) | Widget::Custom(_) => {}
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::style::{Color, Style};

    #[test]
    fn test_raw_widget_self_renders() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        let widget = Widget::Raw(RawWidget::new(|buf, area| {
            buf.put_line(
                Position::new(area.x, area.y),
                "raw",
                Style::new(),
                area.width,
            );
        }));
        set.render(&widget, &mut buf, area).unwrap();
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, 'r');
    }

    #[test]
    fn test_custom_widget_noops_without_extension() {
        let set = RendererSet::core();
        let area = Area::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        let widget = Widget::Custom(CustomWidget {
            kind: "badge",
            data: Rc::new(7u32),
        });
        set.render(&widget, &mut buf, area).unwrap();
        assert!(buf.cells().iter().all(|c| c.symbol == ' '));
    }

    #[test]
    fn test_extension_renderer_handles_custom_kind() {
        struct BadgeRenderer;
        impl WidgetRenderer for BadgeRenderer {
            fn render(
                &self,
                _registry: &RendererSet,
                widget: &Widget,
                buf: &mut Buffer,
                area: Area,
            ) -> Result<()> {
                let Widget::Custom(c) = widget else {
                    return Ok(());
                };
                if c.kind != "badge" {
                    return Ok(());
                }
                let n = c.data.downcast_ref::<u32>().copied().unwrap_or(0);
                buf.put_line(
                    Position::new(area.x, area.y),
                    &n.to_string(),
                    Style::new().fg(Color::Yellow),
                    area.width,
                );
                Ok(())
            }
        }

        struct BadgeExtension;
        impl DisplayExtension for BadgeExtension {
            fn shape_painters(&self) -> Vec<Box<dyn ShapePainter>> {
                Vec::new()
            }
            fn widget_renderers(&self) -> Vec<Box<dyn WidgetRenderer>> {
                vec![Box::new(BadgeRenderer)]
            }
        }

        let set = RendererSet::from_extensions(&[&CoreExtension, &BadgeExtension]);
        let area = Area::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        let widget = Widget::Custom(CustomWidget {
            kind: "badge",
            data: Rc::new(7u32),
        });
        set.render(&widget, &mut buf, area).unwrap();
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, '7');
    }

    #[test]
    fn test_widget_from_impls() {
        let w: Widget = Gauge::default().into();
        assert!(matches!(w, Widget::Gauge(_)));
    }
}
