//! Primitive factory.
//!
//! Pure builders: each function resolves its coordinate mode and returns a
//! canonical [`Shape`] without touching any canvas. The drawing context wraps
//! them with "build then submit" for eager drawing.
//!
//! Every fallible builder validates before constructing anything, so an error
//! never leaves a half-built shape behind.

mod arc;
mod create;
mod ellipse;
mod mode;
mod path;
mod rect;

pub use arc::{DEFAULT_ARC_MODE, arc, parse_arc_mode};
pub use create::create_shape;
pub use ellipse::{circle, ellipse};
pub use mode::{CoordMode, resolve_arc_ellipse, resolve_ellipse, resolve_image, resolve_rect};
pub use path::{bezier, curve, line, point, quad, triangle};
pub use rect::{rect, square};

use crate::curve::CurveSettings;
use crate::style::ShapeStyle;

/// Default rect/square mode.
pub const DEFAULT_RECT_MODE: CoordMode = CoordMode::Corner;
/// Default ellipse/circle/arc mode.
pub const DEFAULT_ELLIPSE_MODE: CoordMode = CoordMode::Center;

/// Everything a builder needs besides its own arguments: the frozen style and
/// the context-wide defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeDefaults {
    pub style: ShapeStyle,
    pub rect_mode: CoordMode,
    pub ellipse_mode: CoordMode,
    pub curve: CurveSettings,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            style: ShapeStyle::default(),
            rect_mode: DEFAULT_RECT_MODE,
            ellipse_mode: DEFAULT_ELLIPSE_MODE,
            curve: CurveSettings::default(),
        }
    }
}
