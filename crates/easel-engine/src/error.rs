use thiserror::Error;

/// Errors raised by drawing calls.
///
/// Every variant except [`FatalInternalError`](DrawError::FatalInternalError)
/// is a validation failure detected before the offending call touches the
/// canvas or the ambient style/transform state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// Unrecognized or disallowed coordinate/arc mode for a primitive.
    #[error("invalid {primitive} mode `{mode}`")]
    InvalidMode { primitive: &'static str, mode: String },

    /// Unrecognized value for an enum-like style property (cap, join, ...).
    #[error("invalid value `{value}` for {property}")]
    InvalidStyleValue { property: &'static str, value: String },

    /// Background image size differs from the sketch size.
    #[error("image dimension {image:?} and sketch dimension {sketch:?} do not match")]
    DimensionMismatch { image: (u32, u32), sketch: (u32, u32) },

    /// `create_shape` was asked for a kind it does not know.
    #[error("unknown shape kind `{0}`")]
    UnknownShapeKind(String),

    /// `create_shape` received the wrong number of numeric arguments.
    #[error("{kind} expects {expected} arguments, got {got}")]
    ArgumentCount { kind: &'static str, expected: &'static str, got: usize },

    /// Vertex editing was attempted on a parametric shape.
    #[error("{0} shapes have no editable vertex list")]
    NotEditable(&'static str),

    /// Renderer invariant violated; shapes built through the factory never hit this.
    #[error("internal error: {0}")]
    FatalInternalError(String),
}

impl DrawError {
    #[inline]
    pub(crate) fn invalid_mode(primitive: &'static str, mode: impl ToString) -> Self {
        DrawError::InvalidMode { primitive, mode: mode.to_string() }
    }

    #[inline]
    pub(crate) fn invalid_style(property: &'static str, value: impl Into<String>) -> Self {
        DrawError::InvalidStyleValue { property, value: value.into() }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;
