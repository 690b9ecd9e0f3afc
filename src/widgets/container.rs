//! Container widgets: spatial partitioning (Grid) and overlay
//! compositing (Composite).

use crate::buffer::Buffer;
use crate::error::{RenderError, Result};
use crate::geometry::{Area, Position};
use crate::layout::{Constraint, Direction, Layout};

use super::{RendererSet, Widget};

/// A container partitioning its area among children via the layout
/// solver.
///
/// Must carry at least as many constraints as children; fewer is a
/// malformed tree and renders as a fatal error.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub direction: Direction,
    pub constraints: Vec<Constraint>,
    pub margin: u16,
    pub children: Vec<Widget>,
}

/// A container rendering its children onto the same area, in order.
///
/// Later children overwrite earlier ones at the same cell; no spatial
/// partitioning.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    pub children: Vec<Widget>,
}

/// Render a [`Grid`]: one sub-area per child, each child isolated in a
/// scratch buffer sized exactly to its sub-area.
///
/// The scratch-buffer merge guarantees a buggy child renderer cannot
/// write outside its assigned region.
pub(super) fn render_grid(
    grid: &Grid,
    registry: &RendererSet,
    buf: &mut Buffer,
    area: Area,
) -> Result<()> {
    if grid.constraints.len() < grid.children.len() {
        return Err(RenderError::NotEnoughConstraints {
            children: grid.children.len(),
            constraints: grid.constraints.len(),
        });
    }

    let areas = Layout::new()
        .direction(grid.direction)
        .margin(grid.margin)
        .constraints(grid.constraints.clone())
        .split(area);

    for (child, sub) in grid.children.iter().zip(areas) {
        if sub.is_empty() {
            continue;
        }
        // Scratch buffer with a zero origin; the merge translates it to
        // the sub-area's offset.
        let scratch_area = Area::new(0, 0, sub.width, sub.height);
        let mut scratch = Buffer::empty(scratch_area);
        registry.render(child, &mut scratch, scratch_area)?;
        buf.put_buffer(Position::new(sub.x, sub.y), &scratch);
    }
    Ok(())
}

/// Render a [`Composite`]: every child on the same buffer and area.
pub(super) fn render_composite(
    composite: &Composite,
    registry: &RendererSet,
    buf: &mut Buffer,
    area: Area,
) -> Result<()> {
    for child in &composite.children {
        registry.render(child, buf, area)?;
    }
    Ok(())
}
