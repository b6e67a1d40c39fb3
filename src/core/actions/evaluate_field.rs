use std::convert::Infallible;
use std::fmt;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_rayon::{
    generate_pixel_buffer_rayon,
};
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::cycling_gradient::MandelbrotCyclingGradient;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

pub type EvaluateFieldError = GeneratePixelBufferError<PixelToComplexCoordsError, Infallible>;

/// Which field evaluator to run. Both produce byte-identical images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    /// One thread, strict row-major order.
    Serial,
    /// Rows spread over the current rayon pool.
    #[default]
    Rayon,
}

impl EvaluatorKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Rayon => "rayon",
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes the escape-time field for `grid` and colours it with the
/// cycling gradient, on the calling thread.
pub fn evaluate(grid: &Grid) -> Result<PixelBuffer, EvaluateFieldError> {
    evaluate_with(grid, EvaluatorKind::Serial)
}

pub fn evaluate_with(grid: &Grid, kind: EvaluatorKind) -> Result<PixelBuffer, EvaluateFieldError> {
    let algorithm = MandelbrotAlgorithm::new(*grid);
    let colour_map = MandelbrotCyclingGradient::new(grid.max_iterations());

    match kind {
        EvaluatorKind::Serial => generate_pixel_buffer(grid.pixel_rect(), &algorithm, &colour_map),
        EvaluatorKind::Rayon => {
            generate_pixel_buffer_rayon(grid.pixel_rect(), &algorithm, &colour_map)
        }
    }
}
