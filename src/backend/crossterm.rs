//! Backend over the `crossterm` crate.

use std::io::Write;

use crossterm::cursor::{MoveTo, position};
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ScrollUp};
use log::debug;

use crate::buffer::Cell;
use crate::error::Result;
use crate::geometry::{Area, Position};
use crate::style::{Color, Modifier};

use super::{Backend, ClearType};

/// A [`Backend`] writing crossterm escape sequences to any `Write`
/// sink.
///
/// Redundant color and attribute sequences are elided: state is tracked
/// across one `draw` call and only re-emitted when a cell differs from
/// the previous one.
pub struct CrosstermBackend<W: Write> {
    writer: W,
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    fn size(&self) -> Result<Area> {
        let (width, height) = terminal::size()?;
        Ok(Area::new(0, 0, width, height))
    }

    fn draw<'a, I>(&mut self, updates: I) -> Result<()>
    where
        I: Iterator<Item = (Position, &'a Cell)>,
    {
        let mut fg = Color::Reset;
        let mut bg = Color::Reset;
        let mut modifier = Modifier::empty();
        // Forces a MoveTo before the first cell.
        let mut last: Option<Position> = None;

        let mut count = 0usize;
        for (pos, cell) in updates {
            count += 1;

            // Adjacent cells on the same row continue the current run.
            let adjacent = last
                .is_some_and(|p| p.y == pos.y && p.x.checked_add(1) == Some(pos.x));
            if !adjacent {
                queue!(self.writer, MoveTo(pos.x, pos.y))?;
            }
            last = Some(pos);

            if cell.modifier != modifier {
                queue_modifier_transition(&mut self.writer, modifier, cell.modifier)?;
                modifier = cell.modifier;
            }
            if cell.fg != fg {
                queue!(self.writer, SetForegroundColor(cell.fg.into()))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                queue!(self.writer, SetBackgroundColor(cell.bg.into()))?;
                bg = cell.bg;
            }

            queue!(self.writer, Print(cell.symbol))?;
        }
        debug!("drew {count} cells");

        queue!(
            self.writer,
            SetForegroundColor(crossterm::style::Color::Reset),
            SetBackgroundColor(crossterm::style::Color::Reset),
            SetAttribute(Attribute::Reset),
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn clear_region(&mut self, clear: ClearType) -> Result<()> {
        let kind = match clear {
            ClearType::All => terminal::ClearType::All,
            ClearType::AfterCursor => terminal::ClearType::FromCursorDown,
        };
        queue!(self.writer, Clear(kind))?;
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<Position> {
        let (x, y) = position()?;
        Ok(Position::new(x, y))
    }

    fn move_cursor(&mut self, position: Position) -> Result<()> {
        queue!(self.writer, MoveTo(position.x, position.y))?;
        Ok(())
    }

    fn append_lines(&mut self, n: u16) -> Result<()> {
        if n > 0 {
            queue!(self.writer, ScrollUp(n))?;
        }
        Ok(())
    }
}

/// Emit only the attribute changes between two modifier sets.
fn queue_modifier_transition<W: Write>(
    writer: &mut W,
    from: Modifier,
    to: Modifier,
) -> Result<()> {
    let removed = from - to;
    if removed.contains(Modifier::BOLD) || removed.contains(Modifier::DIM) {
        // Bold and dim share a single reset sequence.
        queue!(writer, SetAttribute(Attribute::NormalIntensity))?;
        if to.contains(Modifier::BOLD) {
            queue!(writer, SetAttribute(Attribute::Bold))?;
        }
        if to.contains(Modifier::DIM) {
            queue!(writer, SetAttribute(Attribute::Dim))?;
        }
    }
    if removed.contains(Modifier::ITALIC) {
        queue!(writer, SetAttribute(Attribute::NoItalic))?;
    }
    if removed.contains(Modifier::UNDERLINED) {
        queue!(writer, SetAttribute(Attribute::NoUnderline))?;
    }
    if removed.contains(Modifier::SLOW_BLINK) || removed.contains(Modifier::RAPID_BLINK) {
        queue!(writer, SetAttribute(Attribute::NoBlink))?;
    }
    if removed.contains(Modifier::REVERSED) {
        queue!(writer, SetAttribute(Attribute::NoReverse))?;
    }
    if removed.contains(Modifier::HIDDEN) {
        queue!(writer, SetAttribute(Attribute::NoHidden))?;
    }
    if removed.contains(Modifier::CROSSED_OUT) {
        queue!(writer, SetAttribute(Attribute::NotCrossedOut))?;
    }

    let added = to - from;
    if added.contains(Modifier::BOLD) {
        queue!(writer, SetAttribute(Attribute::Bold))?;
    }
    if added.contains(Modifier::DIM) {
        queue!(writer, SetAttribute(Attribute::Dim))?;
    }
    if added.contains(Modifier::ITALIC) {
        queue!(writer, SetAttribute(Attribute::Italic))?;
    }
    if added.contains(Modifier::UNDERLINED) {
        queue!(writer, SetAttribute(Attribute::Underlined))?;
    }
    if added.contains(Modifier::SLOW_BLINK) {
        queue!(writer, SetAttribute(Attribute::SlowBlink))?;
    }
    if added.contains(Modifier::RAPID_BLINK) {
        queue!(writer, SetAttribute(Attribute::RapidBlink))?;
    }
    if added.contains(Modifier::REVERSED) {
        queue!(writer, SetAttribute(Attribute::Reverse))?;
    }
    if added.contains(Modifier::HIDDEN) {
        queue!(writer, SetAttribute(Attribute::Hidden))?;
    }
    if added.contains(Modifier::CROSSED_OUT) {
        queue!(writer, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}
