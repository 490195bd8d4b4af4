//! Shape rendering.
//!
//! Walks `Shape` trees and emits path/paint commands on a [`VectorCanvas`].
//! The renderer owns no canvas state between shapes; every shape is wrapped in
//! its own `save`/`restore` pair.
//!
//! Convention:
//! - geometry stays in sketch units (top-left origin, +Y down)
//! - the composed transform is handed to the canvas, never baked into coordinates
//!
//! [`VectorCanvas`]: crate::canvas::VectorCanvas

mod dispatch;

pub use dispatch::render_shape;
