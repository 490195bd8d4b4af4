use crate::paint::Color;

use super::{StrokeCap, StrokeJoin};

/// Light gray default background, `(204, 204, 204)`.
pub const DEFAULT_BACKGROUND: Color = Color::gray(0.8);

/// Current drawing style.
///
/// Fill, stroke and tint keep their last color while disabled, so a later
/// `no_fill()` does not forget what `fill()` set; shapes only see the
/// effective value (see [`ShapeStyle`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub fill_enabled: bool,

    pub stroke: Color,
    pub stroke_enabled: bool,

    pub stroke_weight: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,

    pub tint: Color,
    pub tint_enabled: bool,

    pub smooth: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            fill_enabled: true,
            stroke: Color::BLACK,
            stroke_enabled: true,
            stroke_weight: 1.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            tint: Color::BLACK,
            tint_enabled: false,
            smooth: true,
        }
    }
}

impl Style {
    #[inline]
    pub fn effective_fill(&self) -> Option<Color> {
        self.fill_enabled.then_some(self.fill)
    }

    #[inline]
    pub fn effective_stroke(&self) -> Option<Color> {
        self.stroke_enabled.then_some(self.stroke)
    }

    #[inline]
    pub fn effective_tint(&self) -> Option<Color> {
        self.tint_enabled.then_some(self.tint)
    }

    /// Frozen copy of the style attributes a shape carries.
    pub fn snapshot(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.effective_fill(),
            stroke: self.effective_stroke(),
            stroke_weight: self.stroke_weight,
            stroke_cap: self.stroke_cap,
            stroke_join: self.stroke_join,
        }
    }
}

/// Style attributes frozen onto a shape at construction time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    /// `None` = do not fill.
    pub fill: Option<Color>,
    /// `None` = do not stroke.
    pub stroke: Option<Color>,
    pub stroke_weight: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Style::default().snapshot()
    }
}
