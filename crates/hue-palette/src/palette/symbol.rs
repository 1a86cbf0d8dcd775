//! Palette symbols and their reference colors.

use std::fmt;
use std::str::FromStr;

use super::error::ParseSymbolError;
use crate::color::{Hsv, Rgb};

/// One of the nine color buckets a pixel can classify to.
///
/// The declaration order is the canonical order `0 1 r o y g b t p`. Band
/// matching and the fallback tie-break both follow it, so reordering the
/// variants changes classification output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Black,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Teal,
    Purple,
}

impl Symbol {
    /// All symbols in canonical order.
    pub const ALL: [Symbol; 9] = [
        Symbol::Black,
        Symbol::White,
        Symbol::Red,
        Symbol::Orange,
        Symbol::Yellow,
        Symbol::Green,
        Symbol::Blue,
        Symbol::Teal,
        Symbol::Purple,
    ];

    /// The chromatic symbols offered as correction sources and targets,
    /// numbered 1..=7 in interactive menus.
    pub const CORRECTABLE: [Symbol; 7] = [
        Symbol::Red,
        Symbol::Orange,
        Symbol::Yellow,
        Symbol::Green,
        Symbol::Blue,
        Symbol::Teal,
        Symbol::Purple,
    ];

    /// The character written to the output string.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Black => '0',
            Symbol::White => '1',
            Symbol::Red => 'r',
            Symbol::Orange => 'o',
            Symbol::Yellow => 'y',
            Symbol::Green => 'g',
            Symbol::Blue => 'b',
            Symbol::Teal => 't',
            Symbol::Purple => 'p',
        }
    }

    /// Reference color used by the fallback and the correction overlay.
    ///
    /// ```
    /// use hue_palette::{Rgb, Symbol};
    /// assert_eq!(Symbol::Orange.reference(), Rgb::new(255, 165, 0));
    /// ```
    #[inline]
    pub const fn reference(self) -> Rgb {
        match self {
            Symbol::Black => Rgb::new(0, 0, 0),
            Symbol::White => Rgb::new(255, 255, 255),
            Symbol::Red => Rgb::new(255, 0, 0),
            Symbol::Orange => Rgb::new(255, 165, 0),
            Symbol::Yellow => Rgb::new(255, 255, 0),
            Symbol::Green => Rgb::new(0, 255, 0),
            Symbol::Blue => Rgb::new(0, 0, 255),
            Symbol::Teal => Rgb::new(0, 255, 255),
            Symbol::Purple => Rgb::new(255, 0, 255),
        }
    }

    /// Reference color converted to HSV.
    #[inline]
    pub fn reference_hsv(self) -> Hsv {
        Hsv::from(self.reference())
    }

    /// Human-readable color name.
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Black => "black",
            Symbol::White => "white",
            Symbol::Red => "red",
            Symbol::Orange => "orange",
            Symbol::Yellow => "yellow",
            Symbol::Green => "green",
            Symbol::Blue => "blue",
            Symbol::Teal => "teal",
            Symbol::Purple => "purple",
        }
    }

    /// Position in canonical order (0..9).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a symbol up by its color name (case-insensitive).
    ///
    /// ```
    /// use hue_palette::Symbol;
    /// assert_eq!(Symbol::from_name("Teal"), Some(Symbol::Teal));
    /// assert_eq!(Symbol::from_name("cyan"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Symbol> {
        Symbol::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl TryFrom<char> for Symbol {
    type Error = ParseSymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::ALL
            .into_iter()
            .find(|s| s.as_char() == c)
            .ok_or(ParseSymbolError::UnknownSymbol(c))
    }
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            _ => Err(ParseSymbolError::InvalidLength(s.chars().count())),
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let chars: String = Symbol::ALL.iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "01roygbtp");

        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_char_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::try_from(symbol.as_char()), Ok(symbol));
            assert_eq!(symbol.to_string().parse::<Symbol>(), Ok(symbol));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Symbol::try_from('x'), Err(ParseSymbolError::UnknownSymbol('x')));
        // Symbols are case-sensitive
        assert_eq!(Symbol::try_from('R'), Err(ParseSymbolError::UnknownSymbol('R')));
        assert_eq!("".parse::<Symbol>(), Err(ParseSymbolError::InvalidLength(0)));
        assert_eq!("rg".parse::<Symbol>(), Err(ParseSymbolError::InvalidLength(2)));
    }

    #[test]
    fn test_reference_colors_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a.reference(), b.reference(), "{a} and {b} share a reference");
            }
        }
    }

    #[test]
    fn test_correctable_excludes_black_and_white() {
        assert!(!Symbol::CORRECTABLE.contains(&Symbol::Black));
        assert!(!Symbol::CORRECTABLE.contains(&Symbol::White));
        let chars: String = Symbol::CORRECTABLE.iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "roygbtp");
    }

    #[test]
    fn test_names() {
        assert_eq!(Symbol::Teal.name(), "teal");
        assert_eq!(Symbol::from_name(" PURPLE "), Some(Symbol::Purple));
        assert_eq!(Symbol::from_name("magenta"), None);
    }
}
