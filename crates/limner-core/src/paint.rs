//! Stroke and fill style state.
//!
//! A renderer declares how shapes should be painted through a [`PaintState`],
//! the pair of stroke and fill [`PaintStyle`]s. Declaring a style has no
//! visible effect on its own; the capture surface only acts on the declared
//! state at the moment a path is drawn.

use crate::color::Color;

/// How a path outline or interior is painted.
///
/// Styles are immutable values compared structurally; the capture pipeline
/// relies on that comparison to suppress redundant style statements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PaintStyle {
    /// Nothing is painted. Drawing with this style leaves no mark.
    #[default]
    NoPaint,
    /// A single solid color, possibly translucent.
    Solid(Color),
}

impl PaintStyle {
    /// Returns true if drawing with this style produces visible output.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::NoPaint)
    }

    /// Returns the style's color, or `None` for [`PaintStyle::NoPaint`].
    pub fn color(self) -> Option<Color> {
        match self {
            Self::NoPaint => None,
            Self::Solid(color) => Some(color),
        }
    }
}

/// The declared stroke and fill styles of a drawing surface.
///
/// A fresh state has both slots unset; shapes drawn against it are invisible
/// and produce no generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintState {
    stroke: PaintStyle,
    fill: PaintStyle,
}

impl PaintState {
    /// Creates a paint state with the given stroke and fill styles.
    pub fn new(stroke: PaintStyle, fill: PaintStyle) -> Self {
        Self { stroke, fill }
    }

    /// Returns the stroke style.
    pub fn stroke(self) -> PaintStyle {
        self.stroke
    }

    /// Returns the fill style.
    pub fn fill(self) -> PaintStyle {
        self.fill
    }

    /// Returns a copy of this state with the given stroke style.
    pub fn with_stroke(mut self, stroke: PaintStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Returns a copy of this state with the given fill style.
    pub fn with_fill(mut self, fill: PaintStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the stroke style.
    pub fn set_stroke(&mut self, stroke: PaintStyle) {
        self.stroke = stroke;
    }

    /// Sets the fill style.
    pub fn set_fill(&mut self, fill: PaintStyle) {
        self.fill = fill;
    }

    /// Returns true if neither stroke nor fill would paint anything.
    pub fn is_invisible(self) -> bool {
        !self.stroke.is_visible() && !self.fill.is_visible()
    }
}
