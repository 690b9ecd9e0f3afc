//! Colors, text modifiers, and the composable `Style` value.
//!
//! A [`Style`] is a *patch*, not a complete description: unset fields
//! leave the target cell's current value alone. This is what makes
//! `Buffer::set_style` usable for layered styling (a border renderer can
//! re-color an area without clobbering the glyphs or modifiers a child
//! already wrote).

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// A terminal color.
///
/// `Reset` means "terminal default" and doubles as the canvas blank
/// marker: a layer cell whose colors are `Reset` is treated as
/// unpainted during compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
    /// 256-color palette index.
    Indexed(u8),
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as C;
        match color {
            Color::Reset => C::Reset,
            Color::Black => C::Black,
            Color::Red => C::DarkRed,
            Color::Green => C::DarkGreen,
            Color::Yellow => C::DarkYellow,
            Color::Blue => C::DarkBlue,
            Color::Magenta => C::DarkMagenta,
            Color::Cyan => C::DarkCyan,
            Color::Gray => C::Grey,
            Color::DarkGray => C::DarkGrey,
            Color::LightRed => C::Red,
            Color::LightGreen => C::Green,
            Color::LightYellow => C::Yellow,
            Color::LightBlue => C::Blue,
            Color::LightMagenta => C::Magenta,
            Color::LightCyan => C::Cyan,
            Color::White => C::White,
            Color::Rgb(r, g, b) => C::Rgb { r, g, b },
            Color::Indexed(i) => C::AnsiValue(i),
        }
    }
}

// =============================================================================
// Modifier (bitflags)
// =============================================================================

bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Modifier::BOLD | Modifier::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifier: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINED = 1 << 3;
        const SLOW_BLINK = 1 << 4;
        const RAPID_BLINK = 1 << 5;
        const REVERSED = 1 << 6;
        const HIDDEN = 1 << 7;
        const CROSSED_OUT = 1 << 8;
    }
}

// =============================================================================
// Style
// =============================================================================

/// A styling patch applied to cells.
///
/// `None` fields are "leave unchanged". Modifiers are split into an add
/// set and a remove set so a patch can clear attributes as well as set
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub add_modifier: Modifier,
    pub sub_modifier: Modifier,
}

impl Style {
    /// An empty patch (changes nothing).
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            add_modifier: Modifier::empty(),
            sub_modifier: Modifier::empty(),
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add modifiers.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.sub_modifier = self.sub_modifier.difference(modifier);
        self.add_modifier = self.add_modifier.union(modifier);
        self
    }

    /// Remove modifiers.
    pub fn remove_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier = self.add_modifier.difference(modifier);
        self.sub_modifier = self.sub_modifier.union(modifier);
        self
    }

    /// Merge another patch on top of this one.
    ///
    /// Fields set in `other` win; unset fields fall through to `self`.
    pub fn patch(mut self, other: Style) -> Self {
        self.fg = other.fg.or(self.fg);
        self.bg = other.bg.or(self.bg);
        self.add_modifier = self
            .add_modifier
            .difference(other.sub_modifier)
            .union(other.add_modifier);
        self.sub_modifier = self
            .sub_modifier
            .difference(other.add_modifier)
            .union(other.sub_modifier);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let s = Style::new()
            .fg(Color::Red)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD);
        assert_eq!(s.fg, Some(Color::Red));
        assert_eq!(s.bg, Some(Color::Black));
        assert!(s.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_style_patch_unset_fields_fall_through() {
        let base = Style::new().fg(Color::Red).bg(Color::Blue);
        let patched = base.patch(Style::new().fg(Color::Green));
        assert_eq!(patched.fg, Some(Color::Green));
        assert_eq!(patched.bg, Some(Color::Blue));
    }

    #[test]
    fn test_style_patch_modifier_sets() {
        let base = Style::new().add_modifier(Modifier::BOLD | Modifier::ITALIC);
        let patched = base.patch(Style::new().remove_modifier(Modifier::BOLD));
        assert!(!patched.add_modifier.contains(Modifier::BOLD));
        assert!(patched.add_modifier.contains(Modifier::ITALIC));
        assert!(patched.sub_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_add_then_remove_modifier_is_remove() {
        let s = Style::new()
            .add_modifier(Modifier::UNDERLINED)
            .remove_modifier(Modifier::UNDERLINED);
        assert!(s.add_modifier.is_empty());
        assert!(s.sub_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_color_into_crossterm() {
        let c: crossterm::style::Color = Color::Rgb(1, 2, 3).into();
        assert_eq!(c, crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 });
        let c: crossterm::style::Color = Color::Reset.into();
        assert_eq!(c, crossterm::style::Color::Reset);
    }
}
