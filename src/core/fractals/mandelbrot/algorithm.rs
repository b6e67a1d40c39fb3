use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};

/// Half-width of the square every orbit must stay inside.
pub const ESCAPE_BOUND: f64 = 2.0;

/// Iterates `z ← z² + c` starting from `z = c`, for at most `max_iterations`
/// steps.
///
/// Returns the first step whose result falls outside the closed square
/// `[-2, 2] × [-2, 2]`, or [`EscapeTime::Bounded`] when every step stays inside.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = c;

    for step in 1..=max_iterations {
        z = z.square_plus(c);

        if z.outside_square(ESCAPE_BOUND) {
            return EscapeTime::Escaped(step);
        }
    }

    EscapeTime::Bounded
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: Grid,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(
            pixel,
            self.grid.pixel_rect(),
            self.grid.complex_rect(),
        )?;

        Ok(escape_time(c, self.grid.max_iterations()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}
