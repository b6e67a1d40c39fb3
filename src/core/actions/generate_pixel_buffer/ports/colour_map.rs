use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one per-pixel algorithm result into a colour.
pub trait ColourMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<Colour, Self::Failure>;
}
