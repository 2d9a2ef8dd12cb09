//! Path geometry as captured from a renderer.
//!
//! Two representations exist side by side:
//!
//! - [`PathElement`] is the flat `(kind, x, y)` wire form a toolkit paint
//!   engine hands over, where a cubic curve occupies three consecutive
//!   elements (one [`PathElementKind::CurveTo`] carrying the first control
//!   point, then two [`PathElementKind::CurveToData`] elements carrying the
//!   second control point and the endpoint).
//! - [`PathCommand`] is the structured form the rest of the pipeline works
//!   with. [`Path::from_elements`] converts the flat form, rejecting streams
//!   a drawing backend could not replay (see [`PathError`]); integrations
//!   that receive untyped `(tag, x, y)` triples enter through
//!   [`Path::from_raw_elements`] instead.
//!
//! Only move, line, and cubic-curve commands are modeled; higher-degree
//! curves must be lowered by the renderer before capture.

use thiserror::Error;

use crate::geometry::{Bounds, Point};

/// Errors raised while ingesting a path from its flat wire form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// An element tag that cannot begin a drawable command.
    #[error("path element tag `{0}` does not begin a drawable command")]
    UnsupportedCommand(u8),

    /// A cubic curve without its two trailing control-data elements.
    #[error("malformed cubic curve: expected 2 control-data elements, found {found}")]
    MalformedCubicCurve { found: usize },
}

/// The role of one flat path element.
///
/// Raw tag values match the toolkit paint-engine representation, so streams
/// can be ingested from foreign drivers without translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElementKind {
    /// Starts a new subpath at the element's point.
    MoveTo,
    /// A straight segment to the element's point.
    LineTo,
    /// Starts a cubic curve; the element's point is the first control point.
    CurveTo,
    /// Continuation data for a preceding `CurveTo`.
    CurveToData,
}

impl PathElementKind {
    /// Decodes a raw element tag.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnsupportedCommand`] for tags outside the known
    /// set.
    pub fn from_raw(tag: u8) -> Result<Self, PathError> {
        match tag {
            0 => Ok(Self::MoveTo),
            1 => Ok(Self::LineTo),
            2 => Ok(Self::CurveTo),
            3 => Ok(Self::CurveToData),
            _ => Err(PathError::UnsupportedCommand(tag)),
        }
    }

    /// Returns the raw element tag.
    pub fn as_raw(self) -> u8 {
        match self {
            Self::MoveTo => 0,
            Self::LineTo => 1,
            Self::CurveTo => 2,
            Self::CurveToData => 3,
        }
    }
}

/// One element of the flat path wire form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathElement {
    kind: PathElementKind,
    x: f32,
    y: f32,
}

impl PathElement {
    /// Creates a new flat path element.
    pub fn new(kind: PathElementKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Returns the element's role.
    pub fn kind(self) -> PathElementKind {
        self.kind
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the element's coordinates as a [`Point`].
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A structured path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at `to`.
    MoveTo { to: Point },
    /// A straight segment to `to`.
    LineTo { to: Point },
    /// A cubic bezier curve to `to` through two control points.
    CubicCurveTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
}

/// An ordered sequence of path commands describing one open or closed path.
///
/// # Examples
///
/// ```
/// use limner_core::path::Path;
///
/// let triangle = Path::new()
///     .move_to(0.0, 0.0)
///     .line_to(10.0, 0.0)
///     .line_to(10.0, 10.0);
/// assert_eq!(triangle.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move command (builder style).
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo {
            to: Point::new(x, y),
        });
        self
    }

    /// Appends a line command (builder style).
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo {
            to: Point::new(x, y),
        });
        self
    }

    /// Appends a cubic-curve command (builder style).
    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicCurveTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        });
        self
    }

    /// Builds a structured path from the flat wire form.
    ///
    /// Each [`PathElementKind::CurveTo`] must be followed by exactly two
    /// [`PathElementKind::CurveToData`] elements; together the three describe
    /// one cubic curve.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedCubicCurve`] if a curve's control data
    /// is missing, and [`PathError::UnsupportedCommand`] if a control-data
    /// element appears without a preceding curve element.
    pub fn from_elements<I>(elements: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = PathElement>,
    {
        let mut iter = elements.into_iter();
        let mut commands = Vec::new();

        while let Some(element) = iter.next() {
            match element.kind() {
                PathElementKind::MoveTo => {
                    commands.push(PathCommand::MoveTo {
                        to: element.point(),
                    });
                }
                PathElementKind::LineTo => {
                    commands.push(PathCommand::LineTo {
                        to: element.point(),
                    });
                }
                PathElementKind::CurveTo => {
                    let mut data = [Point::default(); 2];
                    for (found, slot) in data.iter_mut().enumerate() {
                        match iter.next() {
                            Some(next) if next.kind() == PathElementKind::CurveToData => {
                                *slot = next.point();
                            }
                            _ => return Err(PathError::MalformedCubicCurve { found }),
                        }
                    }
                    commands.push(PathCommand::CubicCurveTo {
                        control1: element.point(),
                        control2: data[0],
                        to: data[1],
                    });
                }
                PathElementKind::CurveToData => {
                    return Err(PathError::UnsupportedCommand(
                        PathElementKind::CurveToData.as_raw(),
                    ));
                }
            }
        }

        Ok(Self { commands })
    }

    /// Builds a structured path from raw `(tag, x, y)` triples.
    ///
    /// This is the entry point for foreign paint-engine integrations that
    /// hand geometry over as untyped element streams; tags are decoded via
    /// [`PathElementKind::from_raw`] before the usual flat-form conversion.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnsupportedCommand`] for unknown tags, plus the
    /// errors of [`Path::from_elements`].
    pub fn from_raw_elements<I>(elements: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = (u8, f32, f32)>,
    {
        let elements = elements
            .into_iter()
            .map(|(tag, x, y)| {
                PathElementKind::from_raw(tag).map(|kind| PathElement::new(kind, x, y))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_elements(elements)
    }

    /// Returns the path's commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Computes the bounding box of all anchor and control points.
    ///
    /// Control points can lie outside the drawn curve, so this is a
    /// conservative hull rather than a tight curve bound. Returns `None` for
    /// an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let include = |acc: Option<Bounds>, point: Point| match acc {
            Some(acc) => Some(acc.expand_to_point(point)),
            None => Some(Bounds::new_from_point(point)),
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => {
                    bounds = include(bounds, to);
                }
                PathCommand::CubicCurveTo {
                    control1,
                    control2,
                    to,
                } => {
                    bounds = include(bounds, control1);
                    bounds = include(bounds, control2);
                    bounds = include(bounds, to);
                }
            }
        }

        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: PathElementKind, x: f32, y: f32) -> PathElement {
        PathElement::new(kind, x, y)
    }

    #[test]
    fn test_from_elements_lines() {
        let path = Path::from_elements([
            element(PathElementKind::MoveTo, 0.0, 0.0),
            element(PathElementKind::LineTo, 10.0, 0.0),
            element(PathElementKind::LineTo, 10.0, 10.0),
        ])
        .unwrap();

        assert_eq!(
            path.commands(),
            Path::new()
                .move_to(0.0, 0.0)
                .line_to(10.0, 0.0)
                .line_to(10.0, 10.0)
                .commands()
        );
    }

    #[test]
    fn test_from_elements_cubic_consumes_three_elements() {
        let path = Path::from_elements([
            element(PathElementKind::MoveTo, 0.0, 0.0),
            element(PathElementKind::CurveTo, 1.0, 2.0),
            element(PathElementKind::CurveToData, 3.0, 4.0),
            element(PathElementKind::CurveToData, 5.0, 6.0),
            element(PathElementKind::LineTo, 7.0, 8.0),
        ])
        .unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(
            path.commands()[1],
            PathCommand::CubicCurveTo {
                control1: Point::new(1.0, 2.0),
                control2: Point::new(3.0, 4.0),
                to: Point::new(5.0, 6.0),
            }
        );
    }

    #[test]
    fn test_from_elements_truncated_cubic() {
        let result = Path::from_elements([
            element(PathElementKind::MoveTo, 0.0, 0.0),
            element(PathElementKind::CurveTo, 1.0, 2.0),
            element(PathElementKind::CurveToData, 3.0, 4.0),
        ]);

        assert_eq!(result, Err(PathError::MalformedCubicCurve { found: 1 }));
    }

    #[test]
    fn test_from_elements_interrupted_cubic() {
        let result = Path::from_elements([
            element(PathElementKind::CurveTo, 1.0, 2.0),
            element(PathElementKind::LineTo, 3.0, 4.0),
        ]);

        assert_eq!(result, Err(PathError::MalformedCubicCurve { found: 0 }));
    }

    #[test]
    fn test_from_elements_stray_curve_data() {
        let result = Path::from_elements([element(PathElementKind::CurveToData, 1.0, 2.0)]);

        assert_eq!(result, Err(PathError::UnsupportedCommand(3)));
    }

    #[test]
    fn test_from_raw_elements_decodes_tags() {
        let path = Path::from_raw_elements([
            (0, 0.0, 0.0),
            (2, 1.0, 2.0),
            (3, 3.0, 4.0),
            (3, 5.0, 6.0),
        ])
        .unwrap();

        assert_eq!(
            path.commands(),
            Path::new()
                .move_to(0.0, 0.0)
                .cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
                .commands()
        );
    }

    #[test]
    fn test_from_raw_elements_rejects_unknown_tags() {
        let result = Path::from_raw_elements([(0, 0.0, 0.0), (9, 1.0, 1.0)]);
        assert_eq!(result, Err(PathError::UnsupportedCommand(9)));
    }

    #[test]
    fn test_from_raw_round_trip() {
        for tag in 0..=3u8 {
            let kind = PathElementKind::from_raw(tag).unwrap();
            assert_eq!(kind.as_raw(), tag);
        }
    }

    #[test]
    fn test_from_raw_unknown_tag() {
        let result = PathElementKind::from_raw(7);
        assert_eq!(result, Err(PathError::UnsupportedCommand(7)));
    }

    #[test]
    fn test_bounds_of_empty_path() {
        assert_eq!(Path::new().bounds(), None);
    }

    #[test]
    fn test_bounds_cover_control_points() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .cubic_to(-5.0, 20.0, 15.0, -10.0, 10.0, 10.0);

        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.min_x(), -5.0);
        assert_eq!(bounds.min_y(), -10.0);
        assert_eq!(bounds.max_x(), 15.0);
        assert_eq!(bounds.max_y(), 20.0);
    }

    #[test]
    fn test_error_display() {
        let err = PathError::MalformedCubicCurve { found: 1 };
        assert_eq!(
            err.to_string(),
            "malformed cubic curve: expected 2 control-data elements, found 1"
        );
    }
}
