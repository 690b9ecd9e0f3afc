//! Render errors.
//!
//! Very little in this crate is an error. Clipping, out-of-bounds
//! writes, and non-matching dispatch are silent no-ops by contract; the
//! only failures surfaced as `Err` are malformed widget trees and
//! backend I/O.

use thiserror::Error;

use crate::geometry::Area;

/// Errors surfaced by a render pass.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A Grid container was built with fewer constraints than children.
    ///
    /// This is a malformed tree handed over by the host, raised
    /// immediately and never retried.
    #[error("grid container has {children} children but only {constraints} constraints")]
    NotEnoughConstraints { children: usize, constraints: usize },

    /// The viewport produced a degenerate target region.
    #[error("viewport target {0:?} is empty")]
    EmptyViewport(Area),

    /// The backend failed to apply updates or flush.
    #[error("backend I/O: {0}")]
    Backend(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RenderError>;
