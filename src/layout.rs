//! Constraint-based one-dimensional layout solver.
//!
//! [`Layout`] partitions an [`Area`] along one axis into one sub-area
//! per [`Constraint`], contiguous and non-overlapping, covering the full
//! available length whenever the constraints permit it. The
//! perpendicular dimension passes through unchanged.
//!
//! # Algorithm
//!
//! Three deterministic passes over the constraint list:
//!
//! 1. **Fixed**: `Length(n)` gets exactly `n`, clipped so cumulative
//!    allocation never exceeds the total (a `Length` placed after space
//!    is exhausted receives zero).
//! 2. **Proportional**: `Percentage(p)` gets `round(p/100 × total)`
//!    against the *original* total, subject to the same exhaustion
//!    clipping, in constraint order.
//! 3. **Flexible**: the remaining length is divided evenly among all
//!    `Min`/`Max` constraints; `Min(n)` receives `max(n, share)`,
//!    `Max(n)` receives `min(n, share)`. Leftover from `Max` capping is
//!    forwarded to the next `Min` in order, or appended to the last
//!    produced area when none follows.
//!
//! Any final deficit (including integer-division remainder) is appended
//! to the last produced area so the partition is exact.

use std::collections::HashMap;

use log::trace;

use crate::geometry::Area;

// =============================================================================
// Constraint & Direction
// =============================================================================

/// A sizing rule consumed by the layout solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly `n` cells (subject to exhaustion clipping).
    Length(u16),
    /// `p` percent of the original total, rounded.
    Percentage(u16),
    /// At least `n` cells; absorbs an even share of leftover space.
    Min(u16),
    /// At most `n` cells out of an even share of leftover space.
    Max(u16),
}

/// Axis along which a layout partitions its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

// =============================================================================
// Layout
// =============================================================================

/// A reusable partitioning recipe: direction, margin, and an ordered
/// constraint list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    direction: Direction,
    margin: u16,
    constraints: Vec<Constraint>,
}

impl Layout {
    /// Create an empty layout (no constraints, zero margin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the partition direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set a uniform margin shaved off every side before partitioning.
    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Set the constraint list.
    pub fn constraints(mut self, constraints: impl Into<Vec<Constraint>>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// Partition `area`, producing one sub-area per constraint, in
    /// constraint order.
    ///
    /// An empty constraint list yields an empty vec.
    pub fn split(&self, area: Area) -> Vec<Area> {
        if self.constraints.is_empty() {
            return Vec::new();
        }

        let inner = area.inner(self.margin);
        let total = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };

        let sizes = solve(&self.constraints, total);
        trace!(
            "layout split: {:?} over {} cells -> {:?}",
            self.constraints, total, sizes
        );

        // Lay the sizes out contiguously, clipping at the far edge so a
        // Min overshoot can never push a sibling outside the input area.
        let mut areas = Vec::with_capacity(sizes.len());
        let mut offset = 0u16;
        for size in sizes {
            let size = size.min(total - offset);
            let sub = match self.direction {
                Direction::Horizontal => Area::new(inner.x + offset, inner.y, size, inner.height),
                Direction::Vertical => Area::new(inner.x, inner.y + offset, inner.width, size),
            };
            areas.push(sub);
            offset += size;
        }
        areas
    }
}

/// Resolve constraint lengths against `total` available cells.
fn solve(constraints: &[Constraint], total: u16) -> Vec<u16> {
    let mut sizes = vec![0u16; constraints.len()];
    let mut allocated = 0u16;

    // Pass 1: fixed lengths, exhaustion-clipped.
    for (i, constraint) in constraints.iter().enumerate() {
        if let Constraint::Length(n) = constraint {
            let size = (*n).min(total - allocated);
            sizes[i] = size;
            allocated += size;
        }
    }

    // Pass 2: percentages of the original total, exhaustion-clipped.
    for (i, constraint) in constraints.iter().enumerate() {
        if let Constraint::Percentage(p) = constraint {
            let want = ((*p as u32 * total as u32 + 50) / 100) as u16;
            let size = want.min(total - allocated);
            sizes[i] = size;
            allocated += size;
        }
    }

    // Pass 3: even shares for Min/Max.
    let remaining = total.saturating_sub(allocated);
    let flex_count = constraints
        .iter()
        .filter(|c| matches!(c, Constraint::Min(_) | Constraint::Max(_)))
        .count() as u16;

    if flex_count > 0 {
        let share = remaining / flex_count;
        let mut carry = 0u16;
        for (i, constraint) in constraints.iter().enumerate() {
            match constraint {
                Constraint::Min(n) => {
                    // A Min absorbs whatever earlier Max caps released.
                    sizes[i] = (*n).max(share) + carry;
                    carry = 0;
                }
                Constraint::Max(n) => {
                    let size = (*n).min(share);
                    carry += share - size;
                    sizes[i] = size;
                }
                _ => {}
            }
        }
        // Max leftover with no Min after it falls through to the final
        // deficit fixup below.
    }

    // Deficit fixup: append whatever is still uncovered to the last
    // produced size so the partition is exact.
    let sum: u32 = sizes.iter().map(|s| *s as u32).sum();
    if sum < total as u32 {
        if let Some(last) = sizes.last_mut() {
            *last += total - sum as u16;
        }
    }

    sizes
}

// =============================================================================
// LayoutCache
// =============================================================================

/// Opt-in memoization of solved layouts.
///
/// Keyed on `(layout, area)`; the host enables it via
/// `RenderConfig::cache_layouts` and must call [`invalidate`] whenever
/// the constraint set changes out from under a key. The solver itself
/// never requires the cache.
///
/// [`invalidate`]: LayoutCache::invalidate
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<(Layout, Area), Vec<Area>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split through the cache.
    pub fn split(&mut self, layout: &Layout, area: Area) -> Vec<Area> {
        self.entries
            .entry((layout.clone(), area))
            .or_insert_with(|| layout.split(area))
            .clone()
    }

    /// Drop every cached result.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
