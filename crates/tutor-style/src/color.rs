#![forbid(unsafe_code)]

//! Indices into the xterm 256-color palette.

/// A color from the xterm 256-color palette.
///
/// Indices 0-15 are the ANSI colors, 16-231 the 6x6x6 cube, 232-255 the
/// grayscale ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256(pub u8);

impl Ansi256 {
    /// Create a palette color.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether the index lies on the grayscale ramp.
    #[must_use]
    pub const fn is_grayscale(self) -> bool {
        self.0 >= 232
    }
}

impl From<u8> for Ansi256 {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        assert_eq!(Ansi256::new(183).index(), 183);
        assert_eq!(Ansi256::from(111), Ansi256(111));
    }

    #[test]
    fn grayscale_ramp() {
        assert!(Ansi256(237).is_grayscale());
        assert!(Ansi256(255).is_grayscale());
        assert!(!Ansi256(231).is_grayscale());
        assert!(!Ansi256(109).is_grayscale());
    }
}
