//! Error types for the model and the plotter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while deriving coefficients or integrating the model.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// `D = m1·sin(β)² + m2 + 4·m3` vanished or overflowed.
    #[error("degenerate denominator D = {0}")]
    DegenerateDenominator(f64),

    /// `A2 = -b / D` is zero, every closed form divides by it.
    #[error("damping coefficient A2 is zero (b = {b})")]
    ZeroDamping { b: f64 },

    /// A physical constant is NaN or infinite.
    #[error("constant `{name}` is not finite: {value}")]
    NonFiniteConstant { name: &'static str, value: f64 },

    /// Step size for numerical integration is unusable.
    #[error("invalid step size h0 = {0}")]
    InvalidStep(f64),
}

/// Errors raised while rendering or saving a figure.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend failed.
    #[error("rendering failed: {0}")]
    Render(String),

    /// Encoding or writing the image failed.
    #[error("cannot write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A color code outside `b, r, g, k, c, m, y`.
    #[error("unknown color code `{0}`")]
    UnknownColor(String),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Render(e.to_string())
    }
}
