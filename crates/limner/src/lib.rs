//! Limner - paint capture and canvas-code generation.
//!
//! Limner captures the vector-drawing operations a renderer issues while
//! painting a graphic (style declarations and path draws) and serializes the
//! capture as source code for a 2D drawing target. The built-in backend
//! emits HTML5-canvas JavaScript: one draw function per captured shape, a
//! lookup table keyed by shape id, and a dispatcher that redraws any shape
//! into a caller-supplied rectangle.
//!
//! The renderer drives a [`PaintCapture`] through the [`PaintSurface`] event
//! trait, bracketing each logical shape with
//! [`begin_element`](PaintCapture::begin_element). Style declarations are
//! deduplicated against the style already written into the generated code,
//! so repeated draws with an unchanged style stay compact.
//!
//! # Examples
//!
//! ```
//! use limner::{CaptureConfig, Html5Canvas, PaintCapture, PaintSurface};
//! use limner::color::Color;
//! use limner::geometry::{Bounds, Point, Size};
//! use limner::paint::{PaintState, PaintStyle};
//! use limner::path::Path;
//!
//! let mut capture = PaintCapture::new(Html5Canvas::new(), CaptureConfig::new("logo"));
//!
//! capture.begin_element(
//!     "shape1",
//!     Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
//! );
//! capture.on_style_update(
//!     PaintState::default().with_fill(PaintStyle::Solid(Color::rgb(255, 0, 0))),
//! )?;
//! capture.on_draw_path(
//!     &Path::new().move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 10.0),
//! )?;
//!
//! let code = capture.code();
//! assert!(code.contains("function logo_draw_000(c) // 'shape1'"));
//! assert!(code.contains("function logo_draw(context, id, x, y, width, height)"));
//! # Ok::<(), limner::CaptureError>(())
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod export;
pub mod recorder;

pub use limner_core::{color, element, geometry, paint, path};

pub use capture::{PaintCapture, PaintSurface, StyleDiffer};
pub use config::CaptureConfig;
pub use error::CaptureError;
pub use export::canvas::Html5Canvas;
pub use export::{Backend, serialize};
