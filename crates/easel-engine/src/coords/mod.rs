//! Coordinate and geometry types shared by the factory, renderer and canvases.
//!
//! Canonical sketch space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! `z` is carried on points but the renderer only consumes the xy plane.

mod matrix;
mod point;
mod viewport;

pub use matrix::{Affine2, Mat4, MatrixStack};
pub use point::Point;
pub use viewport::Viewport;
