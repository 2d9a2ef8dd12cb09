//! Color handling for captured paint state
//!
//! This module provides the [`Color`] type used by stroke and fill styles.
//! Colors are stored as 8-bit RGB components plus a floating-point alpha,
//! which is the form the generated canvas code needs. CSS color strings are
//! parsed through the `color` crate, so drivers can pass SVG paint attributes
//! through verbatim.

use std::str::FromStr;

use color::{DynamicColor, Srgb};

/// An RGB color with an alpha channel, as written into generated code.
///
/// # Examples
///
/// ```
/// use limner_core::color::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.to_css_string(), "rgb(255, 0, 0)");
///
/// let translucent = Color::rgba(12, 34, 56, 0.5);
/// assert_eq!(translucent.to_css_string(), "rgba(12, 34, 56, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: f32,
}

impl Color {
    /// Creates a fully opaque color from 8-bit RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit RGB components and an alpha in `[0, 1]`.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or
    /// `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use limner_core::color::Color;
    ///
    /// let red = Color::from_css("#ff0000").unwrap();
    /// assert_eq!(red, Color::rgb(255, 0, 0));
    /// ```
    pub fn from_css(color_str: &str) -> Result<Self, String> {
        let parsed = DynamicColor::from_str(color_str)
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            alpha: parsed.components[3],
        })
    }

    /// Returns the red component.
    pub fn r(self) -> u8 {
        self.r
    }

    /// Returns the green component.
    pub fn g(self) -> u8 {
        self.g
    }

    /// Returns the blue component.
    pub fn b(self) -> u8 {
        self.b
    }

    /// Returns the alpha component, 0.0 (transparent) to 1.0 (opaque).
    pub fn alpha(self) -> f32 {
        self.alpha
    }

    /// Creates a new color with the specified alpha value.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns true if the alpha channel leaves nothing to blend.
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Formats this color the way the generated code expects it.
    ///
    /// Opaque colors render as `rgb(r, g, b)`; translucent colors render as
    /// `rgba(r, g, b, a)` with the alpha fixed to one decimal place.
    pub fn to_css_string(self) -> String {
        let rgb = format!("{}, {}, {}", self.r, self.g, self.b);
        if self.is_opaque() {
            format!("rgb({rgb})")
        } else {
            format!("rgba({rgb}, {:.1})", self.alpha)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css_string())
    }
}
