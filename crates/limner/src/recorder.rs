//! Ordered storage for captured elements.

use limner_core::element::Element;

use crate::error::CaptureError;

/// Owns the ordered collection of elements captured in one session.
///
/// The most recently appended element is the "current" one; all generated
/// statements land there until the next element begins. The collection only
/// ever grows, and capture order is emission order.
#[derive(Debug, Default)]
pub struct ElementRecorder {
    elements: Vec<Element>,
}

impl ElementRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element, which becomes current.
    pub fn begin_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Returns the current element for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NoCurrentElement`] if no element has been
    /// opened yet.
    pub fn current_mut(&mut self) -> Result<&mut Element, CaptureError> {
        self.elements
            .last_mut()
            .ok_or(CaptureError::NoCurrentElement)
    }

    /// Appends generated statement lines to the current element.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NoCurrentElement`] if no element has been
    /// opened yet.
    pub fn append_to_current<I>(&mut self, statements: I) -> Result<(), CaptureError>
    where
        I: IntoIterator<Item = String>,
    {
        self.current_mut()?.append_statements(statements);
        Ok(())
    }

    /// Returns a read-only view of the captured elements, in capture order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the number of captured elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no element has been opened yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the recorder, handing the finished collection to the caller.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}
