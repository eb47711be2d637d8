use std::fmt;

use color::Rgba8;
use serde::{Serialize, Serializer};

/// Wrapper around the opaque `Rgba8` type from the color crate.
///
/// Renders as `rgb(r, g, b)`, the notation the graph front end parses for
/// node and edge colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    color: Rgba8,
}

impl Color {
    /// Create a new opaque color from its red, green and blue channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Rgba8 { r, g, b, a: 255 },
        }
    }

    /// Returns the `(r, g, b)` channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.color.r, self.color.g, self.color.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.channels();
        write!(f, "rgb({r}, {g}, {b})")
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
