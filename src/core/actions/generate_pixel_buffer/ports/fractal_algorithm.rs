use std::error::Error;
use crate::core::data::point::Point;

/// Per-pixel computation. Implementations must not depend on any other
/// pixel's result, so callers are free to evaluate pixels in any order or in
/// parallel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
