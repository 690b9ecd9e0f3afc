//! Geometry primitives for buffer and canvas space.
//!
//! These are pure value types with no dependencies. Everything else in the
//! crate is positioned and clipped in terms of them:
//!
//! - [`Position`] - a single cell coordinate in buffer space
//! - [`Area`] - an axis-aligned rectangle of cells
//! - [`Resolution`] - pixel dimensions of a canvas grid
//!
//! All operations here are side-effect free. Intersection of disjoint
//! areas yields an empty `Area` rather than an error, matching the
//! crate-wide rule that clipping is normal, not exceptional.

// =============================================================================
// Position
// =============================================================================

/// A cell coordinate in buffer space.
///
/// Coordinates are non-negative by construction (`u16`), with (0, 0) at
/// the top-left corner. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Area
// =============================================================================

/// An axis-aligned rectangle of cells.
///
/// `right()` and `bottom()` are inclusive edges: for a non-empty area,
/// `right() == x + width - 1` and `bottom() == y + height - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    /// Create a new area.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Leftmost column.
    #[inline]
    pub const fn left(&self) -> u16 {
        self.x
    }

    /// Rightmost column (inclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x + self.width.saturating_sub(1)
    }

    /// Topmost row.
    #[inline]
    pub const fn top(&self) -> u16 {
        self.y
    }

    /// Bottommost row (inclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y + self.height.saturating_sub(1)
    }

    /// Number of cells covered.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True when the area covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a position lies inside this area.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Check if two areas share at least one cell.
    pub fn intersects(&self, other: Area) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Compute the intersection of two areas.
    ///
    /// Disjoint areas yield an empty `Area` positioned at the clamp
    /// point, never an error.
    pub fn intersection(&self, other: Area) -> Area {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        Area {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }

    /// Shrink the area by `margin` cells on every side.
    ///
    /// Collapses to an empty area when the margin eats the whole
    /// rectangle.
    pub fn inner(&self, margin: u16) -> Area {
        if self.width < 2 * margin || self.height < 2 * margin {
            return Area::new(self.x, self.y, 0, 0);
        }
        Area {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2 * margin,
            height: self.height - 2 * margin,
        }
    }

    /// Iterate over every position covered by this area, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let area = *self;
        (area.top()..area.y + area.height).flat_map(move |y| {
            (area.left()..area.x + area.width).map(move |x| Position { x, y })
        })
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Pixel dimensions of a canvas grid.
///
/// A canvas grid variant maps one or more pixels onto a single terminal
/// cell; this carries the pixel-space size, not the cell-space size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Resolution {
    /// Create a new resolution.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

// =============================================================================
// Tests
// =============================================================================
