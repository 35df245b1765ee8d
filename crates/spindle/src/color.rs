//! Color handling for Spindle charts
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate so chart styles can be written as CSS color strings.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color used when drawing charts.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::color::Color;
    ///
    /// let cyan = Color::new("#00f5ff").unwrap();
    /// let violet = Color::new("rgba(148, 0, 211, 0.85)").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#10101a").is_ok());
        assert!(Color::new("rgba(0, 245, 255, 0.3)").is_ok());

        let err = Color::new("glitter").unwrap_err();
        assert!(err.starts_with("invalid color `glitter`"));
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("blue").unwrap();
        assert!(!color.to_string().is_empty());
    }
}
