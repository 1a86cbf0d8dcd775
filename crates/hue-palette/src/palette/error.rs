//! Error types for palette operations
//!
//! This module provides error types for symbol and hex color parsing.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for parsing palette symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSymbolError {
    /// Character is not one of `0 1 r o y g b t p`
    UnknownSymbol(char),
    /// Input was empty or longer than one character
    InvalidLength(usize),
}

impl fmt::Display for ParseSymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSymbolError::UnknownSymbol(c) => {
                write!(f, "unknown palette symbol '{}' (expected one of 01roygbtp)", c)
            }
            ParseSymbolError::InvalidLength(len) => {
                write!(f, "palette symbol must be a single character, got {} characters", len)
            }
        }
    }
}

impl std::error::Error for ParseSymbolError {}
