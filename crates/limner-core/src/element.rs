//! Captured drawing elements.

use crate::geometry::Bounds;

/// One logical drawing shape captured from the renderer.
///
/// An element pairs a stable, human-meaningful identifier (typically the
/// source shape's id) with a bounding box in source coordinates and the
/// generated statement lines that redraw it. Elements are created empty when
/// a shape begins and only ever grow while the capture session runs.
///
/// The bounding box is either supplied whole by the driver ([`Element::new`])
/// or accumulated from the geometry drawn into the element
/// ([`Element::new_derived`] plus [`Element::expand_bounds`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: String,
    bounds: Option<Bounds>,
    code: Vec<String>,
}

impl Element {
    /// Creates an empty element with a caller-supplied bounding box.
    pub fn new(id: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            bounds: Some(bounds),
            code: Vec::new(),
        }
    }

    /// Creates an empty element whose bounding box will be derived from the
    /// geometry drawn into it.
    pub fn new_derived(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bounds: None,
            code: Vec::new(),
        }
    }

    /// Returns the element's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the element's bounding box in source coordinates.
    ///
    /// A derived box with nothing drawn into it yet is degenerate at the
    /// origin.
    pub fn bounds(&self) -> Bounds {
        self.bounds.unwrap_or_default()
    }

    /// Grows the bounding box to contain `bounds`.
    ///
    /// The first expansion of a derived box adopts `bounds` as-is; later
    /// expansions merge into it.
    pub fn expand_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(match self.bounds {
            Some(existing) => existing.merge(&bounds),
            None => bounds,
        });
    }

    /// Returns the generated statement lines, in emission order.
    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// Appends one generated statement line.
    pub fn push_statement(&mut self, statement: impl Into<String>) {
        self.code.push(statement.into());
    }

    /// Appends a batch of generated statement lines, preserving order.
    pub fn append_statements<I>(&mut self, statements: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.code.extend(statements);
    }
}
