//! Glyph tables shared by the canvas grids and the leaf widgets.
//!
//! Everything that picks a character to approximate sub-cell resolution
//! lives here: canvas markers, half blocks, the braille dot bit table,
//! the eighth-block ramps used by gauges/sparklines/bar charts, and the
//! border line sets.

// =============================================================================
// Canvas markers
// =============================================================================

/// Default glyph for the `Dot` marker.
pub const DOT: char = '•';
/// Default glyph for the `Block` marker.
pub const BLOCK: char = '█';
/// Default glyph for the `Bar` marker.
pub const BAR: char = '▄';

// =============================================================================
// Half blocks
// =============================================================================

pub const HALF_BLOCK_UPPER: char = '▀';
pub const HALF_BLOCK_LOWER: char = '▄';
pub const HALF_BLOCK_FULL: char = '█';

// =============================================================================
// Braille
// =============================================================================

/// The blank braille pattern; dot bits are OR-ed onto this base.
pub const BRAILLE_BLANK: u16 = 0x2800;

/// Dot bit for each (row, column) of the 4x2 braille cell.
///
/// Unicode braille numbers its dots 1-8 in a column-major zigzag; this
/// table flattens that into plain row/column addressing.
pub const BRAILLE_DOTS: [[u16; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

// =============================================================================
// Block ramps
// =============================================================================

/// Eighth-height blocks, index = number of painted eighths (0..=8).
pub const VERTICAL_BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Eighth-width blocks, index = number of painted eighths (0..=8).
pub const HORIZONTAL_BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

// =============================================================================
// Borders
// =============================================================================

/// A set of line-drawing glyphs for one border style.
///
/// Order: horizontal, vertical, top-left, top-right, bottom-right,
/// bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSet {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
}

pub const LINE_PLAIN: LineSet = LineSet {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_right: '┘',
    bottom_left: '└',
};

pub const LINE_ROUNDED: LineSet = LineSet {
    horizontal: '─',
    vertical: '│',
    top_left: '╭',
    top_right: '╮',
    bottom_right: '╯',
    bottom_left: '╰',
};

pub const LINE_DOUBLE: LineSet = LineSet {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_right: '╝',
    bottom_left: '╚',
};

pub const LINE_THICK: LineSet = LineSet {
    horizontal: '━',
    vertical: '┃',
    top_left: '┏',
    top_right: '┓',
    bottom_right: '┛',
    bottom_left: '┗',
};

// =============================================================================
// Scrollbar
// =============================================================================

pub const SCROLLBAR_TRACK: char = '│';
pub const SCROLLBAR_THUMB: char = '█';

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_dots_compose() {
        // All eight dots = full braille cell U+28FF.
        let mut bits = BRAILLE_BLANK;
        for row in &BRAILLE_DOTS {
            for dot in row {
                bits |= dot;
            }
        }
        assert_eq!(bits, 0x28FF);
        assert_eq!(char::from_u32(bits as u32), Some('⣿'));
    }

    #[test]
    fn test_braille_single_dot() {
        // Top-left dot only = U+2801.
        let bits = BRAILLE_BLANK | BRAILLE_DOTS[0][0];
        assert_eq!(char::from_u32(bits as u32), Some('⠁'));
    }

    #[test]
    fn test_vertical_blocks_endpoints() {
        assert_eq!(VERTICAL_BLOCKS[0], ' ');
        assert_eq!(VERTICAL_BLOCKS[8], '█');
    }
}
