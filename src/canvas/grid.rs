//! Canvas pixel grids and layer snapshots.
//!
//! A [`CanvasGrid`] is a mutable pixel surface; the variants differ in
//! how many pixels map onto one terminal cell:
//!
//! - [`CharGrid`] - 1 pixel per cell, one configurable glyph
//! - [`HalfBlockGrid`] - 2 vertically stacked pixels per cell
//! - [`BrailleGrid`] - a 2x4 dot matrix per cell
//!
//! [`save`](CanvasGrid::save) freezes the pixel state into an immutable
//! [`Layer`] using each grid's own glyph encoding; [`reset`]
//! (CanvasGrid::reset) blanks the surface for the next drawing pass.
//! Painting outside the pixel bounds is a no-op.

use crate::geometry::{Position, Resolution};
use crate::style::Color;
use crate::symbols;

// =============================================================================
// Layer
// =============================================================================

/// An immutable snapshot of a grid's pixel state, one glyph and one
/// fg/bg color pair per terminal cell, row-major.
///
/// Blank cells (`' '`) are skipped during compositing so lower layers
/// stay visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Cell-space width, for mapping linear indices back to positions.
    pub width: u16,
    pub chars: Vec<char>,
    pub colors: Vec<(Color, Color)>,
}

// =============================================================================
// CanvasGrid
// =============================================================================

/// A resolution-scaled pixel surface.
///
/// Positions handed to [`paint`](Self::paint) are in *pixel* space,
/// `[0, resolution().width) x [0, resolution().height)`.
pub trait CanvasGrid {
    /// Pixel dimensions of the surface.
    fn resolution(&self) -> Resolution;

    /// Snapshot the current pixel state into a layer.
    fn save(&self) -> Layer;

    /// Blank every pixel.
    fn reset(&mut self);

    /// Paint one pixel. Out-of-bounds positions are ignored.
    fn paint(&mut self, pos: Position, color: Color);
}

// =============================================================================
// CharGrid
// =============================================================================

/// One pixel per terminal cell; every painted cell renders as the
/// grid's single marker glyph.
#[derive(Debug, Clone)]
pub struct CharGrid {
    width: u16,
    height: u16,
    marker: char,
    pixels: Vec<Option<Color>>,
}

impl CharGrid {
    /// Create a grid covering `width x height` cells drawing `marker`.
    pub fn new(width: u16, height: u16, marker: char) -> Self {
        Self {
            width,
            height,
            marker,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }
}

impl CanvasGrid for CharGrid {
    fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    fn save(&self) -> Layer {
        let chars = self
            .pixels
            .iter()
            .map(|p| if p.is_some() { self.marker } else { ' ' })
            .collect();
        let colors = self
            .pixels
            .iter()
            .map(|p| (p.unwrap_or(Color::Reset), Color::Reset))
            .collect();
        Layer {
            width: self.width,
            chars,
            colors,
        }
    }

    fn reset(&mut self) {
        self.pixels.fill(None);
    }

    fn paint(&mut self, pos: Position, color: Color) {
        if let Some(i) = self.index(pos) {
            self.pixels[i] = Some(color);
        }
    }
}

// =============================================================================
// HalfBlockGrid
// =============================================================================

/// Two vertically stacked pixels per terminal cell, so the pixel grid is
/// twice as tall as the cell grid.
///
/// Two *different* colors in one cell cannot be represented exactly by a
/// single half-block glyph; that cell collapses to the upper-half glyph
/// with both colors packed into fg/bg. This approximation is part of the
/// contract (a 2-color-per-cell terminal model), not a bug to fix.
#[derive(Debug, Clone)]
pub struct HalfBlockGrid {
    width: u16,
    height: u16,
    pixels: Vec<Option<Color>>,
}

impl HalfBlockGrid {
    /// Create a grid covering `width x height` cells
    /// (`width x 2*height` pixels).
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize * 2],
        }
    }

    #[inline]
    fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

impl CanvasGrid for HalfBlockGrid {
    fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height * 2)
    }

    fn save(&self) -> Layer {
        let mut chars = Vec::with_capacity(self.width as usize * self.height as usize);
        let mut colors = Vec::with_capacity(chars.capacity());

        for row in 0..self.height {
            for col in 0..self.width {
                let upper = self.pixel(col, row * 2);
                let lower = self.pixel(col, row * 2 + 1);
                let (symbol, fg, bg) = match (upper, lower) {
                    (None, None) => (' ', Color::Reset, Color::Reset),
                    (Some(u), None) => (symbols::HALF_BLOCK_UPPER, u, Color::Reset),
                    (None, Some(l)) => (symbols::HALF_BLOCK_LOWER, l, Color::Reset),
                    (Some(u), Some(l)) if u == l => (symbols::HALF_BLOCK_FULL, u, l),
                    // Differing colors: upper-half glyph, both colors packed.
                    (Some(u), Some(l)) => (symbols::HALF_BLOCK_UPPER, u, l),
                };
                chars.push(symbol);
                colors.push((fg, bg));
            }
        }
        Layer {
            width: self.width,
            chars,
            colors,
        }
    }

    fn reset(&mut self) {
        self.pixels.fill(None);
    }

    fn paint(&mut self, pos: Position, color: Color) {
        if pos.x < self.width && pos.y < self.height * 2 {
            self.pixels[pos.y as usize * self.width as usize + pos.x as usize] = Some(color);
        }
    }
}

// =============================================================================
// BrailleGrid
// =============================================================================

/// A 2x4 sub-pixel dot matrix per terminal cell.
///
/// The output glyph is composed from the bitmask of painted dots over
/// the blank braille pattern; the cell's color is the last color
/// painted into it.
#[derive(Debug, Clone)]
pub struct BrailleGrid {
    width: u16,
    height: u16,
    masks: Vec<u16>,
    colors: Vec<Option<Color>>,
}

impl BrailleGrid {
    /// Create a grid covering `width x height` cells
    /// (`2*width x 4*height` pixels).
    pub fn new(width: u16, height: u16) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            masks: vec![symbols::BRAILLE_BLANK; cells],
            colors: vec![None; cells],
        }
    }
}

impl CanvasGrid for BrailleGrid {
    fn resolution(&self) -> Resolution {
        Resolution::new(self.width * 2, self.height * 4)
    }

    fn save(&self) -> Layer {
        let chars = self
            .masks
            .iter()
            .map(|&mask| {
                if mask == symbols::BRAILLE_BLANK {
                    ' '
                } else {
                    char::from_u32(mask as u32).unwrap_or(' ')
                }
            })
            .collect();
        let colors = self
            .colors
            .iter()
            .map(|c| (c.unwrap_or(Color::Reset), Color::Reset))
            .collect();
        Layer {
            width: self.width,
            chars,
            colors,
        }
    }

    fn reset(&mut self) {
        self.masks.fill(symbols::BRAILLE_BLANK);
        self.colors.fill(None);
    }

    fn paint(&mut self, pos: Position, color: Color) {
        if pos.x >= self.width * 2 || pos.y >= self.height * 4 {
            return;
        }
        let cell = (pos.y / 4) as usize * self.width as usize + (pos.x / 2) as usize;
        self.masks[cell] |= symbols::BRAILLE_DOTS[(pos.y % 4) as usize][(pos.x % 2) as usize];
        // Last write wins on color conflicts within a cell.
        self.colors[cell] = Some(color);
    }
}

// =============================================================================
// Tests
// =============================================================================
