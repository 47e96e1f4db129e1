//! The [`Attr`] type — what occupies a single grid cell.

use std::fmt;

/// Attribute of a grid cell. Exactly one per cell, fixed once the grid is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attr {
    #[default]
    Free,
    Blocked,
    Start,
    End,
}

impl Attr {
    /// Glyph used by the ASCII map format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Attr::Free => 'o',
            Attr::Blocked => '*',
            Attr::Start => '@',
            Attr::End => '#',
        }
    }

    /// Parse a map glyph. `.` is accepted as an alternative for free cells.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Attr> {
        match ch {
            'o' | '.' => Some(Attr::Free),
            '*' => Some(Attr::Blocked),
            '@' => Some(Attr::Start),
            '#' => Some(Attr::End),
            _ => None,
        }
    }

    /// Everything but [`Attr::Blocked`] can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Attr::Blocked)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for a in [Attr::Free, Attr::Blocked, Attr::Start, Attr::End] {
            assert_eq!(Attr::from_glyph(a.glyph()), Some(a));
        }
        assert_eq!(Attr::from_glyph('.'), Some(Attr::Free));
        assert_eq!(Attr::from_glyph('x'), None);
    }

    #[test]
    fn only_blocked_is_impassable() {
        assert!(Attr::Free.is_passable());
        assert!(Attr::Start.is_passable());
        assert!(Attr::End.is_passable());
        assert!(!Attr::Blocked.is_passable());
    }
}
