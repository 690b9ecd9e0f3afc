//! Terminal backends.
//!
//! A [`Backend`] is the seam between the cell model and a real (or
//! test) terminal: the [`Terminal`](crate::terminal::Terminal) hands it
//! sparse cell updates and cursor commands, and the backend turns them
//! into escape sequences or records them in memory.

mod crossterm;

pub use crossterm::CrosstermBackend;
pub use test::TestBackend;

use crate::buffer::Cell;
use crate::error::Result;
use crate::geometry::{Area, Position};

/// What a clear request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearType {
    /// The whole screen.
    All,
    /// Everything after the cursor, to the end of the screen.
    AfterCursor,
}

/// The terminal output seam.
///
/// Single-threaded, like the rest of the crate: one backend is owned by
/// one [`Terminal`](crate::terminal::Terminal) and driven from one
/// thread.
pub trait Backend {
    /// Current terminal dimensions as an origin area.
    fn size(&self) -> Result<Area>;

    /// Write a sparse set of cell updates.
    ///
    /// Updates arrive in row-major order; the backend may batch cursor
    /// moves for runs of adjacent cells. Nothing reaches the terminal
    /// until [`flush`](Self::flush).
    fn draw<'a, I>(&mut self, updates: I) -> Result<()>
    where
        I: Iterator<Item = (Position, &'a Cell)>;

    /// Flush all queued output.
    fn flush(&mut self) -> Result<()>;

    /// Clear a region of the screen.
    fn clear_region(&mut self, clear: ClearType) -> Result<()>;

    /// Where the cursor currently sits.
    fn cursor_position(&mut self) -> Result<Position>;

    /// Move the cursor.
    fn move_cursor(&mut self, position: Position) -> Result<()>;

    /// Scroll the viewport by emitting `n` newlines at the bottom.
    ///
    /// Used by inline viewports to open room below existing shell
    /// output.
    fn append_lines(&mut self, n: u16) -> Result<()>;
}
