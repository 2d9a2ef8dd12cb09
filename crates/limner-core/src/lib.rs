//! Limner Core Types and Definitions
//!
//! This crate provides the foundational types for the Limner paint-capture
//! pipeline. It includes:
//!
//! - **Colors**: Paint colors with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Paint**: Stroke and fill style state ([`paint`] module)
//! - **Paths**: Path commands and their flat wire form ([`path`] module)
//! - **Elements**: Captured shapes with identity, bounds, and generated code
//!   ([`element::Element`])

pub mod color;
pub mod element;
pub mod geometry;
pub mod paint;
pub mod path;
