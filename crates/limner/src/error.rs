//! Error types for capture sessions.
//!
//! This module provides the main error type [`CaptureError`], covering
//! driver-protocol violations and path-ingestion failures. Every variant is
//! fatal to its capture session: the caller discards the session rather than
//! taking partial output.

use thiserror::Error;

use limner_core::path::PathError;

/// The main error type for capture operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// A style or path event arrived before the first element was opened.
    ///
    /// Shape boundaries belong to the driver; receiving drawing events
    /// without an open element indicates a driver bug.
    #[error("no current element: a style or path event arrived before the first begin_element call")]
    NoCurrentElement,

    /// A path could not be ingested from its flat wire form.
    #[error("{0}")]
    Path(#[from] PathError),
}
