use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use std::convert::Infallible;

pub const BAND_COUNT: usize = 16;

/// Escape-time gradient, indexed by `iterations % 16`: dark brown through
/// deep blue, pale yellow, orange and back.
pub const CYCLING_GRADIENT: [Colour; BAND_COUNT] = [
    Colour::new(66, 30, 15),
    Colour::new(25, 7, 26),
    Colour::new(9, 1, 47),
    Colour::new(4, 4, 73),
    Colour::new(0, 7, 100),
    Colour::new(12, 44, 138),
    Colour::new(24, 82, 177),
    Colour::new(57, 125, 209),
    Colour::new(134, 181, 229),
    Colour::new(211, 236, 248),
    Colour::new(241, 233, 191),
    Colour::new(248, 201, 95),
    Colour::new(255, 170, 0),
    Colour::new(204, 128, 0),
    Colour::new(153, 87, 0),
    Colour::new(106, 52, 3),
];

/// Colour for a raw iteration count. Anything outside the open interval
/// `(0, max_iterations)` is treated as inside the set and comes back black.
#[must_use]
pub fn colour_for_count(iterations: i64, max_iterations: u32) -> Colour {
    if iterations <= 0 || iterations >= i64::from(max_iterations) {
        return Colour::BLACK;
    }

    CYCLING_GRADIENT[(iterations % BAND_COUNT as i64) as usize]
}

#[must_use]
pub fn colour_for(escape: EscapeTime, max_iterations: u32) -> Colour {
    match escape {
        EscapeTime::Escaped(k) => colour_for_count(i64::from(k), max_iterations),
        EscapeTime::Bounded => Colour::BLACK,
    }
}

#[derive(Debug, Copy, Clone)]
pub struct MandelbrotCyclingGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotCyclingGradient {
    type T = EscapeTime;
    type Failure = Infallible;

    fn map(&self, escape: EscapeTime) -> Result<Colour, Self::Failure> {
        Ok(colour_for(escape, self.max_iterations))
    }
}

impl MandelbrotCyclingGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
