//! The virtual drawing surface.
//!
//! [`PaintCapture`] stands in for a real paint device: an external renderer
//! draws a vector graphic against it, and instead of pixels the surface
//! accumulates generated statements on the current element. The renderer
//! drives the surface through the [`PaintSurface`] event trait; the
//! collaborator that owns shape decomposition brackets each logical shape
//! with [`PaintCapture::begin_element`].

use log::{debug, trace};

use limner_core::{
    element::Element,
    geometry::Bounds,
    paint::{PaintState, PaintStyle},
    path::{Path, PathElement},
};

use crate::{
    config::CaptureConfig,
    error::CaptureError,
    export::{self, Backend},
    recorder::ElementRecorder,
};

/// Drawing events a renderer issues against a virtual surface.
///
/// This is the whole surface contract: declare style, draw a path. Style
/// declarations alone never generate code; they only take effect when a path
/// is drawn with them.
pub trait PaintSurface {
    /// Replaces the surface's declared paint state.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NoCurrentElement`] if no element is open yet.
    fn on_style_update(&mut self, state: PaintState) -> Result<(), CaptureError>;

    /// Draws a path with the declared paint state.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NoCurrentElement`] if no element is open yet.
    fn on_draw_path(&mut self, path: &Path) -> Result<(), CaptureError>;

    /// Draws a raster image into `target`.
    ///
    /// Raster content is not captured; the event is accepted and dropped.
    fn on_draw_image(&mut self, target: Bounds) {
        let _ = target;
    }
}

/// Suppresses style statements that would restate the already-emitted style.
///
/// Tracks the "active" style, i.e. the one most recently written into
/// generated code. A declared style only becomes active when a path is drawn
/// with it and it differs from what is already active.
#[derive(Debug, Default)]
pub struct StyleDiffer {
    active: PaintState,
}

impl StyleDiffer {
    /// Creates a differ with both active slots unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active (last-emitted) style.
    pub fn active(&self) -> PaintState {
        self.active
    }

    /// Returns both active slots to unset.
    pub fn reset(&mut self) {
        self.active = PaintState::default();
    }

    /// Emits set-style statements for every slot of `current` that is set
    /// and differs from the active style, updating the active style to
    /// match.
    pub fn diff<B: Backend>(&mut self, backend: &B, current: PaintState) -> Vec<String> {
        let mut statements = Vec::new();

        if let PaintStyle::Solid(color) = current.stroke() {
            if current.stroke() != self.active.stroke() {
                statements.push(backend.set_stroke_style(color));
                self.active.set_stroke(current.stroke());
            }
        }
        if let PaintStyle::Solid(color) = current.fill() {
            if current.fill() != self.active.fill() {
                statements.push(backend.set_fill_style(color));
                self.active.set_fill(current.fill());
            }
        }

        statements
    }
}

/// A capture session's virtual drawing surface.
///
/// Owns the declared paint state, the style differ, the element recorder,
/// and the output backend. One value per capture session; independent
/// sessions share nothing.
#[derive(Debug, Default)]
pub struct PaintCapture<B: Backend> {
    backend: B,
    config: CaptureConfig,
    state: PaintState,
    differ: StyleDiffer,
    recorder: ElementRecorder,
    // Whether the current element accumulates its bounding box from the
    // paths drawn into it.
    derive_bounds: bool,
}

impl<B: Backend> PaintCapture<B> {
    /// Creates a fresh surface with both declared and active styles unset.
    pub fn new(backend: B, config: CaptureConfig) -> Self {
        Self {
            backend,
            config,
            state: PaintState::default(),
            differ: StyleDiffer::new(),
            recorder: ElementRecorder::new(),
            derive_bounds: false,
        }
    }

    /// Opens a new element for the shape with the given id and bounds.
    ///
    /// Must be called before the shape's style and path events. Resets the
    /// declared and active styles, so no style leaks across shape
    /// boundaries. Id uniqueness is the driver's concern; duplicates pass
    /// through as given.
    pub fn begin_element(&mut self, id: impl Into<String>, bounds: Bounds) {
        self.open_element(Element::new(id, bounds), false);
    }

    /// Opens a new element whose bounding box is derived from the paths
    /// drawn into it.
    ///
    /// For drivers that cannot supply a shape's box up front. Each visible
    /// path draw merges the path's point hull into the element's box;
    /// invisible draws contribute nothing. An element that never receives a
    /// visible draw keeps a degenerate box at the origin.
    pub fn begin_element_from_paths(&mut self, id: impl Into<String>) {
        self.open_element(Element::new_derived(id), true);
    }

    fn open_element(&mut self, element: Element, derive_bounds: bool) {
        self.state = PaintState::default();
        self.differ.reset();
        self.derive_bounds = derive_bounds;

        debug!(id = element.id(), ordinal = self.recorder.len(); "Opened element");
        self.recorder.begin_element(element);
    }

    /// Draws a path given in the flat wire form.
    ///
    /// # Errors
    ///
    /// Propagates ingestion failures ([`limner_core::path::PathError`]) and
    /// [`CaptureError::NoCurrentElement`].
    pub fn draw_path_elements<I>(&mut self, elements: I) -> Result<(), CaptureError>
    where
        I: IntoIterator<Item = PathElement>,
    {
        let path = Path::from_elements(elements)?;
        self.on_draw_path(&path)
    }

    /// Draws a path given as raw `(tag, x, y)` triples.
    ///
    /// Ingestion entry for foreign paint-engine integrations whose element
    /// streams arrive untyped; see [`Path::from_raw_elements`].
    ///
    /// # Errors
    ///
    /// Propagates ingestion failures ([`limner_core::path::PathError`]) and
    /// [`CaptureError::NoCurrentElement`].
    pub fn draw_raw_path_elements<I>(&mut self, elements: I) -> Result<(), CaptureError>
    where
        I: IntoIterator<Item = (u8, f32, f32)>,
    {
        let path = Path::from_raw_elements(elements)?;
        self.on_draw_path(&path)
    }

    /// Returns a read-only view of the captured elements, in capture order.
    pub fn elements(&self) -> &[Element] {
        self.recorder.elements()
    }

    /// Serializes the capture with the session's configured name prefix.
    pub fn code(&self) -> String {
        export::serialize(&self.backend, self.recorder.elements(), self.config.prefix())
    }

    /// Consumes the surface, handing over the finished element collection.
    pub fn into_elements(self) -> Vec<Element> {
        self.recorder.into_elements()
    }
}

impl<B: Backend> PaintSurface for PaintCapture<B> {
    fn on_style_update(&mut self, state: PaintState) -> Result<(), CaptureError> {
        if self.recorder.is_empty() {
            return Err(CaptureError::NoCurrentElement);
        }
        self.state = state;
        Ok(())
    }

    fn on_draw_path(&mut self, path: &Path) -> Result<(), CaptureError> {
        if self.recorder.is_empty() {
            return Err(CaptureError::NoCurrentElement);
        }
        // A shape with neither fill nor stroke is invisible: no statements,
        // no style activation.
        if self.state.is_invisible() {
            trace!("Skipping path drawn with neither stroke nor fill set");
            return Ok(());
        }

        let mut statements = self.differ.diff(&self.backend, self.state);

        statements.push(self.backend.begin_path());
        statements.extend(self.backend.encode_path(path));
        statements.push(self.backend.close_path());

        if self.state.stroke().is_visible() {
            statements.push(self.backend.stroke());
        }
        if self.state.fill().is_visible() {
            statements.push(self.backend.fill());
        }

        self.recorder.append_to_current(statements)?;

        if self.derive_bounds {
            if let Some(hull) = path.bounds() {
                self.recorder.current_mut()?.expand_bounds(hull);
            }
        }

        Ok(())
    }
}
