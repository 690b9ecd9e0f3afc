//! The cell buffer: render target for every widget.
//!
//! A [`Buffer`] is a rectangular grid of styled [`Cell`]s covering an
//! [`Area`]. All mutation goes through a handful of bounds-checked
//! operations so clipping stays centralized: writing outside the
//! buffer's area is a silent no-op, never a panic.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing for cache
//!   efficiency; the `(Area, Position) -> index` mapping lives in one
//!   function, [`Buffer::index_of`].
//! - **Clipping**: every write operation intersects with the buffer's
//!   own area first.
//! - **Wide characters**: a double-width glyph blanks the cell it
//!   spills into so stale glyphs never show through.

use unicode_width::UnicodeWidthChar;

use crate::geometry::{Area, Position};
use crate::style::{Color, Modifier, Style};

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell: one display glyph plus its colors and
/// modifiers.
///
/// Cells are owned exclusively by the buffer that contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }
}

impl Cell {
    /// Apply a style patch to this cell.
    pub fn set_style(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        self.modifier = self
            .modifier
            .difference(style.sub_modifier)
            .union(style.add_modifier);
    }

    /// Reset to the blank default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Buffer
// =============================================================================

/// A grid of cells covering an `Area`.
///
/// Created fresh per render (whole screen or a scratch sub-region) and
/// merged into a parent or flushed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    area: Area,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer of blank cells covering `area`.
    pub fn empty(area: Area) -> Self {
        Self::filled(area, Cell::default())
    }

    /// Create a buffer with every cell set to `cell`.
    pub fn filled(area: Area, cell: Cell) -> Self {
        Self {
            area,
            cells: vec![cell; area.area() as usize],
        }
    }

    /// The area this buffer covers.
    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Raw cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Map a position to a flat index.
    ///
    /// This is the single place the `(Area basis, Position) -> index`
    /// arithmetic lives. Returns `None` outside the buffer's area.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.area.contains(pos) {
            return None;
        }
        let x = (pos.x - self.area.x) as usize;
        let y = (pos.y - self.area.y) as usize;
        Some(y * self.area.width as usize + x)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> Position {
        let width = self.area.width.max(1) as usize;
        Position {
            x: self.area.x + (index % width) as u16,
            y: self.area.y + (index / width) as u16,
        }
    }

    /// Get a cell, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Get a mutable cell, or `None` outside the buffer.
    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index_of(pos).map(|i| &mut self.cells[i])
    }

    /// Apply a style patch to every cell in `area ∩ self.area`.
    pub fn set_style(&mut self, area: Area, style: Style) {
        let target = self.area.intersection(area);
        for pos in target.positions() {
            if let Some(i) = self.index_of(pos) {
                self.cells[i].set_style(style);
            }
        }
    }

    /// Write a styled line of text starting at `pos`.
    ///
    /// Clipped to `max_width` columns and to the buffer bounds; never
    /// writes past either. Double-width glyphs blank the cell they
    /// spill into; a wide glyph that would only half-fit is dropped.
    /// Returns the column after the last written cell.
    pub fn put_line(&mut self, pos: Position, line: &str, style: Style, max_width: u16) -> u16 {
        let mut x = pos.x;
        let limit = pos.x.saturating_add(max_width);

        for symbol in line.chars() {
            let width = symbol.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > limit {
                break;
            }
            if let Some(i) = self.index_of(Position { x, y: pos.y }) {
                self.cells[i].symbol = symbol;
                self.cells[i].set_style(style);
            }
            // Blank the spill-over cell of a wide glyph.
            if width == 2 {
                if let Some(cell) = self.get_mut(Position { x: x + 1, y: pos.y }) {
                    cell.symbol = ' ';
                    cell.set_style(style);
                }
            }
            x += width;
        }
        x
    }

    /// Copy every cell of `other` into `self`, translated by `offset`.
    ///
    /// `other`'s cells are addressed relative to its own area origin;
    /// the cell at relative `(dx, dy)` lands at absolute
    /// `(offset.x + dx, offset.y + dy)`. Cells falling outside `self`
    /// are clipped.
    pub fn put_buffer(&mut self, offset: Position, other: &Buffer) {
        for dy in 0..other.area.height {
            for dx in 0..other.area.width {
                let src = Position {
                    x: other.area.x + dx,
                    y: other.area.y + dy,
                };
                let dst = Position {
                    x: offset.x.saturating_add(dx),
                    y: offset.y.saturating_add(dy),
                };
                if let (Some(cell), Some(i)) = (other.get(src), self.index_of(dst)) {
                    self.cells[i] = *cell;
                }
            }
        }
    }

    /// Compute the sparse update list turning `self` into `next`.
    ///
    /// Returns `(position, cell)` pairs for every differing cell, in
    /// row-major order. A size or origin mismatch yields every cell of
    /// `next` (full redraw), matching resize behavior.
    pub fn diff<'a>(&self, next: &'a Buffer) -> Vec<(Position, &'a Cell)> {
        if self.area != next.area {
            return next
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| (next.pos_of(i), cell))
                .collect();
        }
        self.cells
            .iter()
            .zip(next.cells.iter())
            .enumerate()
            .filter(|(_, (prev, cell))| prev != cell)
            .map(|(i, (_, cell))| (next.pos_of(i), cell))
            .collect()
    }

    /// Reset every cell to the blank default.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(w: u16, h: u16) -> Buffer {
        Buffer::empty(Area::new(0, 0, w, h))
    }

    #[test]
    fn test_index_arithmetic_with_offset_area() {
        let b = Buffer::empty(Area::new(2, 3, 4, 4));
        assert_eq!(b.index_of(Position::new(2, 3)), Some(0));
        assert_eq!(b.index_of(Position::new(3, 4)), Some(5));
        assert_eq!(b.index_of(Position::new(1, 3)), None);
        assert_eq!(b.index_of(Position::new(6, 3)), None);
        assert_eq!(b.pos_of(5), Position::new(3, 4));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let mut b = buf(3, 3);
        assert!(b.get(Position::new(3, 0)).is_none());
        assert!(b.get_mut(Position::new(0, 3)).is_none());
    }

    #[test]
    fn test_put_line_basic() {
        let mut b = buf(10, 1);
        b.put_line(Position::new(0, 0), "hi", Style::new().fg(Color::Red), 10);
        assert_eq!(b.get(Position::new(0, 0)).unwrap().symbol, 'h');
        assert_eq!(b.get(Position::new(1, 0)).unwrap().symbol, 'i');
        assert_eq!(b.get(Position::new(0, 0)).unwrap().fg, Color::Red);
        assert_eq!(b.get(Position::new(2, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_put_line_clips_to_max_width() {
        let mut b = buf(10, 1);
        b.put_line(Position::new(0, 0), "abcdef", Style::new(), 3);
        assert_eq!(b.get(Position::new(2, 0)).unwrap().symbol, 'c');
        assert_eq!(b.get(Position::new(3, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_put_line_clips_to_buffer() {
        let mut b = buf(3, 1);
        // max_width larger than the buffer: bounds still win.
        let end = b.put_line(Position::new(1, 0), "abcdef", Style::new(), 10);
        assert_eq!(b.get(Position::new(1, 0)).unwrap().symbol, 'a');
        assert_eq!(b.get(Position::new(2, 0)).unwrap().symbol, 'b');
        // Writing continues off-buffer as a no-op; the cursor advances.
        assert!(end > 3);
    }

    #[test]
    fn test_put_line_wide_char_blanks_spill_cell() {
        let mut b = buf(4, 1);
        b.get_mut(Position::new(2, 0)).unwrap().symbol = 'x';
        b.put_line(Position::new(1, 0), "界", Style::new(), 4);
        assert_eq!(b.get(Position::new(1, 0)).unwrap().symbol, '界');
        assert_eq!(b.get(Position::new(2, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_put_line_wide_char_does_not_half_fit() {
        let mut b = buf(4, 1);
        b.put_line(Position::new(0, 0), "a界", Style::new(), 2);
        assert_eq!(b.get(Position::new(0, 0)).unwrap().symbol, 'a');
        // The wide glyph needed columns 1-2 but only 1 remained.
        assert_eq!(b.get(Position::new(1, 0)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_set_style_intersection_only() {
        let mut b = buf(4, 4);
        b.set_style(Area::new(2, 2, 10, 10), Style::new().bg(Color::Blue));
        assert_eq!(b.get(Position::new(2, 2)).unwrap().bg, Color::Blue);
        assert_eq!(b.get(Position::new(3, 3)).unwrap().bg, Color::Blue);
        assert_eq!(b.get(Position::new(1, 1)).unwrap().bg, Color::Reset);
    }

    #[test]
    fn test_put_buffer_translates_and_clips() {
        let mut parent = buf(4, 4);
        let mut child = buf(2, 2);
        child.put_line(Position::new(0, 0), "ab", Style::new(), 2);
        child.put_line(Position::new(0, 1), "cd", Style::new(), 2);

        parent.put_buffer(Position::new(3, 3), &child);
        assert_eq!(parent.get(Position::new(3, 3)).unwrap().symbol, 'a');
        // 'b', 'c', 'd' fell outside the parent and were clipped.
        assert_eq!(parent.get(Position::new(2, 3)).unwrap().symbol, ' ');
    }

    #[test]
    fn test_diff_sparse() {
        let prev = buf(3, 1);
        let mut next = buf(3, 1);
        next.put_line(Position::new(1, 0), "x", Style::new(), 1);

        let updates = prev.diff(&next);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, Position::new(1, 0));
        assert_eq!(updates[0].1.symbol, 'x');
    }

    #[test]
    fn test_diff_size_mismatch_is_full_redraw() {
        let prev = buf(2, 1);
        let next = buf(3, 1);
        assert_eq!(prev.diff(&next).len(), 3);
    }

    #[test]
    fn test_reset() {
        let mut b = buf(2, 1);
        b.put_line(Position::new(0, 0), "ab", Style::new().fg(Color::Red), 2);
        b.reset();
        assert_eq!(b.get(Position::new(0, 0)).unwrap(), &Cell::default());
    }
}
