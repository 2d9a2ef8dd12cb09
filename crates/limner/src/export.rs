//! Code-generation backends for captured drawings.
//!
//! This module provides the [`Backend`] trait that isolates all knowledge of
//! the target language, and the [`serialize`] entry point that turns a
//! finished capture into output text. It is the final stage in the Limner
//! pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Renderer events
//!     ↓ capture
//! Elements (ordered, with statement lines)
//!     ↓ serialize (this module)
//! Output text
//! ```
//!
//! # Available Backends
//!
//! - [`canvas`] — HTML5-canvas JavaScript output via [`canvas::Html5Canvas`]
//!
//! Capture logic never touches target-language syntax; adding another
//! backend means implementing [`Backend`] and nothing else.

/// HTML5-canvas JavaScript backend.
pub mod canvas;

use log::info;

use limner_core::{
    color::Color,
    element::Element,
    path::{Path, PathCommand},
};

/// Abstraction for output-language backends.
///
/// The statement-level methods produce single generated lines; the capture
/// surface decides when to call them and in what order. [`Backend::serialize`]
/// produces the whole program around the accumulated statements.
///
/// See the [`canvas`] module for the built-in canvas implementation.
pub trait Backend {
    /// Statement that opens a new path.
    fn begin_path(&self) -> String;

    /// Statement that closes the current path.
    fn close_path(&self) -> String;

    /// Statement for one structured path command.
    fn encode_command(&self, command: &PathCommand) -> String;

    /// Statement declaring the stroke color for subsequent strokes.
    fn set_stroke_style(&self, color: Color) -> String;

    /// Statement declaring the fill color for subsequent fills.
    fn set_fill_style(&self, color: Color) -> String;

    /// Statement that strokes the current path.
    fn stroke(&self) -> String;

    /// Statement that fills the current path.
    fn fill(&self) -> String;

    /// Encodes a whole path, one statement per command, order preserved.
    ///
    /// The caller wraps the result with [`Backend::begin_path`] and
    /// [`Backend::close_path`].
    fn encode_path(&self, path: &Path) -> Vec<String> {
        path.commands()
            .iter()
            .map(|command| self.encode_command(command))
            .collect()
    }

    /// Serializes the finished element collection into one program.
    ///
    /// `prefix` is an already-sanitized identifier fragment; implementations
    /// join it to their fixed name tokens with `_`. Elements appear in the
    /// order given, which is capture order.
    fn serialize(&self, elements: &[Element], prefix: &str) -> String;
}

/// Serializes captured elements with the given backend and name prefix.
///
/// The prefix is sanitized to a valid identifier fragment first; the output
/// is a deterministic function of the inputs.
pub fn serialize<B: Backend>(backend: &B, elements: &[Element], prefix: &str) -> String {
    let prefix = sanitize_prefix(prefix);
    info!(element_count = elements.len(), prefix = prefix.as_str(); "Serializing captured elements");
    backend.serialize(elements, &prefix)
}

/// Reduces an arbitrary string to a valid identifier fragment.
///
/// Characters outside `[A-Za-z0-9_]` become underscores, and a leading digit
/// is guarded with a letter prefix.
pub fn sanitize_prefix(prefix: &str) -> String {
    let mut sanitized: String = prefix
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if sanitized
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
    {
        sanitized = format!("g_{sanitized}");
    }

    sanitized
}
