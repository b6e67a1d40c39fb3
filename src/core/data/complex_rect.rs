use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The viewport: the region of the complex plane sampled by the grid.
///
/// `min` holds `(x_min, y_min)` and `max` holds `(x_max, y_max)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: x_min,
                imag: y_min,
            },
            Complex {
                real: x_max,
                imag: y_max,
            },
        )
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
