use thiserror::Error;

/// Errors surfaced by the spiral and the layout engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Bad input, raised before any state is modified. Retrying with corrected input is safe.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The spiral was walked past the point where a free position must exist.
    /// Signals a defect rather than something a caller is expected to handle.
    #[error("spiral search exhausted after {n_samples} samples (radius {radius:.1}) without a free position")]
    SearchExhausted { n_samples: usize, radius: f64 },
}

impl LayoutError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        LayoutError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LayoutError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
