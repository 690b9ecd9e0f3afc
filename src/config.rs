//! Render configuration consumed by the host.
//!
//! Configuration is an explicit value threaded into a render, never a
//! process-wide mutable registry: renders stay referentially transparent
//! and testable in isolation. The performance toggles affect caching and
//! redraw cadence only, never the core algorithms — the layout solver
//! and renderers must behave identically with every flag off.

use std::time::Duration;

use crate::style::Color;

/// A small set of default colors consumed read-only during a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            accent: Color::Cyan,
            dim: Color::DarkGray,
        }
    }
}

/// Host-supplied render configuration.
///
/// Must only be mutated between render calls, never during one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub theme: Theme,
    /// Memoize layout splits keyed on `(layout, area)`.
    pub cache_layouts: bool,
    /// Skip re-rendering subtrees whose inputs did not change (host
    /// policy; the core only promises determinism).
    pub cache_renders: bool,
    /// Minimum interval between resize-triggered redraws.
    pub debounce_resize: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            cache_layouts: false,
            cache_renders: false,
            debounce_resize: Duration::from_millis(50),
        }
    }
}
