use core::fmt;
use core::str::FromStr;

use crate::error::DrawError;

/// How open stroke ends are drawn. Discriminants are the canvas codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum StrokeCap {
    #[default]
    Butt = 1,
    Round = 2,
    Square = 3,
}

impl StrokeCap {
    pub const fn name(self) -> &'static str {
        match self {
            StrokeCap::Butt => "BUTT",
            StrokeCap::Round => "ROUND",
            StrokeCap::Square => "SQUARE",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUTT" => Ok(StrokeCap::Butt),
            "ROUND" => Ok(StrokeCap::Round),
            "SQUARE" => Ok(StrokeCap::Square),
            _ => Err(DrawError::invalid_style("stroke_cap", s)),
        }
    }
}

impl fmt::Display for StrokeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How stroke segments meet at corners. Discriminants are the canvas codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum StrokeJoin {
    #[default]
    Miter = 1,
    Round = 2,
    Square = 3,
}

impl StrokeJoin {
    pub const fn name(self) -> &'static str {
        match self {
            StrokeJoin::Miter => "MITER",
            StrokeJoin::Round => "ROUND",
            StrokeJoin::Square => "SQUARE",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MITER" => Ok(StrokeJoin::Miter),
            "ROUND" => Ok(StrokeJoin::Round),
            "SQUARE" => Ok(StrokeJoin::Square),
            _ => Err(DrawError::invalid_style("stroke_join", s)),
        }
    }
}

impl fmt::Display for StrokeJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
