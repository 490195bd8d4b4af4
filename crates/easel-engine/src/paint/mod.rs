//! Paint model shared between the style state, shapes and canvases.
//!
//! Color-space parsing (named colors, HSB, hex strings) lives outside the
//! engine; everything here is already-resolved RGBA.

pub mod color;

pub use color::Color;
