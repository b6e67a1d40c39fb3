use std::error::Error;
use std::fmt;

use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridError {
    PixelRect(PixelRectError),
    ComplexRect(ComplexRectError),
    ZeroMaxIterations,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid grid size: {}", err),
            Self::ComplexRect(err) => write!(f, "invalid viewport: {}", err),
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::ComplexRect(err) => Some(err),
            Self::ZeroMaxIterations => None,
        }
    }
}

impl From<PixelRectError> for GridError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ComplexRectError> for GridError {
    fn from(err: ComplexRectError) -> Self {
        Self::ComplexRect(err)
    }
}

/// Everything the field evaluator needs to know about a render: pixel
/// dimensions, the viewport they sample, and the iteration cap.
///
/// A `Grid` can only be built in a valid state, so evaluation never has to
/// re-check its configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl Grid {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, GridError> {
        if max_iterations == 0 {
            return Err(GridError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }

    /// Builds a grid straight from raw dimensions and viewport bounds.
    pub fn from_parts(
        width: u32,
        height: u32,
        (x_min, x_max): (f64, f64),
        (y_min, y_max): (f64, f64),
        max_iterations: u32,
    ) -> Result<Self, GridError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let complex_rect = ComplexRect::from_bounds(x_min, x_max, y_min, y_max)?;

        Self::new(pixel_rect, complex_rect, max_iterations)
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
