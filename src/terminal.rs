//! The terminal frame driver.
//!
//! `Terminal` owns a [`Backend`], a viewport, and the previous frame.
//! Each [`draw`](Terminal::draw) renders the widget tree into a fresh
//! [`Buffer`], diffs it against the previous frame, and pushes only the
//! changed cells to the backend in one flush. Unchanged frames cost one
//! diff and no terminal I/O.
//!
//! Single-threaded by design: a `Terminal` exclusively owns every piece
//! of render state, and nothing here is `Sync`. Drive it from one
//! thread.

use log::debug;

use crate::backend::{Backend, ClearType};
use crate::buffer::Buffer;
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::geometry::{Area, Position};
use crate::widgets::{RendererSet, Widget};

/// Where frames land on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    /// The backend's full size, re-queried every frame.
    #[default]
    Fullscreen,
    /// A fixed region; everything outside it is left alone.
    Fixed(Area),
}

/// The frame driver: renders, diffs, flushes.
pub struct Terminal<B: Backend> {
    backend: B,
    renderers: RendererSet,
    viewport: Viewport,
    config: RenderConfig,
    previous: Option<Buffer>,
}

impl<B: Backend> Terminal<B> {
    /// A fullscreen terminal with the core renderer set.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, RendererSet::core(), Viewport::Fullscreen)
    }

    pub fn with_options(backend: B, renderers: RendererSet, viewport: Viewport) -> Self {
        Self {
            backend,
            renderers,
            viewport,
            config: RenderConfig::default(),
            previous: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The region the next frame will cover.
    pub fn viewport_area(&self) -> Result<Area> {
        match self.viewport {
            Viewport::Fullscreen => self.backend.size(),
            Viewport::Fixed(area) => Ok(area),
        }
    }

    /// Render one frame and push the difference to the backend.
    ///
    /// Returns the number of cells that changed. A frame identical to
    /// the previous one writes nothing and skips the flush.
    pub fn draw(&mut self, widget: &Widget) -> Result<usize> {
        let area = self.viewport_area()?;
        if area.is_empty() {
            return Err(RenderError::EmptyViewport(area));
        }

        let mut frame = Buffer::empty(area);
        self.renderers.render(widget, &mut frame, area)?;

        let updates = match &self.previous {
            Some(previous) => previous.diff(&frame),
            // First frame: everything is an update.
            None => frame
                .area()
                .positions()
                .filter_map(|pos| frame.get(pos).map(|cell| (pos, cell)))
                .collect(),
        };
        let changed = updates.len();
        debug!("frame {:?}: {changed} cells changed", area);

        if changed > 0 {
            self.backend.draw(updates.into_iter())?;
            self.backend.flush()?;
        }

        self.previous = Some(frame);
        Ok(changed)
    }

    /// Clear the viewport and forget the previous frame.
    ///
    /// The next `draw` repaints every cell.
    pub fn clear(&mut self) -> Result<()> {
        match self.viewport {
            Viewport::Fullscreen => {
                self.backend.clear_region(ClearType::All)?;
            }
            Viewport::Fixed(area) => {
                // Only this viewport's rows; the rest of the screen is
                // not ours.
                self.backend
                    .move_cursor(Position::new(area.x, area.y))?;
                self.backend.clear_region(ClearType::AfterCursor)?;
            }
        }
        self.backend.flush()?;
        self.previous = None;
        Ok(())
    }

    /// Adopt a new viewport (e.g. after a resize event) and invalidate
    /// the previous frame.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.previous = None;
    }

    /// Park the cursor below a fixed viewport so shell output resumes
    /// cleanly after the program exits. Fullscreen no-op.
    pub fn release_cursor(&mut self) -> Result<()> {
        if let Viewport::Fixed(area) = self.viewport {
            self.backend
                .move_cursor(Position::new(area.x, area.bottom()))?;
            self.backend.append_lines(1)?;
            self.backend.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TestBackend;
    use crate::style::{Color, Style};
    use crate::widgets::{Gauge, RawWidget};

    fn raw_text(text: &'static str) -> Widget {
        Widget::Raw(RawWidget::new(move |buf, area| {
            buf.put_line(
                Position::new(area.x, area.y),
                text,
                Style::new(),
                area.width,
            );
        }))
    }

    #[test]
    fn test_draw_renders_to_backend() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2));
        terminal.draw(&raw_text("hi")).unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, 'h');
        assert_eq!(buf.get(Position::new(1, 0)).unwrap().symbol, 'i');
    }

    #[test]
    fn test_identical_frame_writes_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2));
        let widget = raw_text("hi");

        let first = terminal.draw(&widget).unwrap();
        assert_eq!(first, 20);

        let flushes = terminal.backend().flush_count();
        let second = terminal.draw(&widget).unwrap();
        assert_eq!(second, 0);
        assert_eq!(terminal.backend().flush_count(), flushes);
    }

    #[test]
    fn test_changed_cells_are_sparse() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2));
        terminal.draw(&raw_text("aa")).unwrap();
        let changed = terminal.draw(&raw_text("ab")).unwrap();
        assert_eq!(changed, 1);
        assert_eq!(
            terminal
                .backend()
                .buffer()
                .get(Position::new(1, 0))
                .unwrap()
                .symbol,
            'b'
        );
    }

    #[test]
    fn test_fixed_viewport_renders_in_place() {
        let backend = TestBackend::new(10, 5);
        let viewport = Viewport::Fixed(Area::new(2, 2, 4, 1));
        let mut terminal = Terminal::with_options(backend, RendererSet::core(), viewport);
        terminal.draw(&raw_text("hi")).unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf.get(Position::new(2, 2)).unwrap().symbol, 'h');
        assert_eq!(buf.get(Position::new(0, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_empty_viewport_is_an_error() {
        let backend = TestBackend::new(10, 5);
        let viewport = Viewport::Fixed(Area::new(0, 0, 0, 0));
        let mut terminal = Terminal::with_options(backend, RendererSet::core(), viewport);
        let err = terminal.draw(&Widget::Gauge(Gauge::default()));
        assert!(matches!(err, Err(RenderError::EmptyViewport(_))));
    }

    #[test]
    fn test_clear_forces_full_redraw() {
        let mut terminal = Terminal::new(TestBackend::new(4, 1));
        let widget = raw_text("hi");
        terminal.draw(&widget).unwrap();
        terminal.clear().unwrap();
        let changed = terminal.draw(&widget).unwrap();
        assert_eq!(changed, 4);
    }

    #[test]
    fn test_resize_diff_falls_back_to_full_redraw() {
        let mut terminal = Terminal::new(TestBackend::new(4, 1));
        terminal.draw(&raw_text("hi")).unwrap();

        terminal.backend_mut().resize(6, 1);
        let changed = terminal.draw(&raw_text("hi")).unwrap();
        assert_eq!(changed, 6);
    }

    #[test]
    fn test_draw_styled_cells_reach_backend() {
        let mut terminal = Terminal::new(TestBackend::new(3, 1));
        let widget = Widget::Raw(RawWidget::new(|buf, area| {
            buf.set_style(area, Style::new().bg(Color::Blue));
        }));
        terminal.draw(&widget).unwrap();
        assert_eq!(
            terminal
                .backend()
                .buffer()
                .get(Position::new(2, 0))
                .unwrap()
                .bg,
            Color::Blue
        );
    }
}
