use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Failure while rendering: either the algorithm or the colour map gave up.
#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<A, M> {
    Algorithm(A),
    ColourMap(M),
}

impl<A: fmt::Display, M: fmt::Display> fmt::Display for GeneratePixelBufferError<A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl<A, M> Error for GeneratePixelBufferError<A, M>
where
    A: Error + 'static,
    M: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err),
        }
    }
}

pub type GeneratePixelBufferResult<Alg, CMap> = Result<
    PixelBuffer,
    GeneratePixelBufferError<<Alg as FractalAlgorithm>::Failure, <CMap as ColourMap>::Failure>,
>;

/// Renders every pixel of `pixel_rect` in row-major order on the calling
/// thread.
///
/// Each pixel is computed and coloured in the same pass, so no intermediate
/// per-pixel result array is built.
pub fn generate_pixel_buffer<Alg, CMap>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    mapper: &CMap,
) -> GeneratePixelBufferResult<Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<T = Alg::Success>,
{
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);
    let row_bytes = pixel_buffer.row_bytes();

    for (y, row) in pixel_buffer
        .buffer_mut()
        .chunks_exact_mut(row_bytes)
        .enumerate()
    {
        fill_row(row, y as u32, algorithm, mapper)?;
    }

    Ok(pixel_buffer)
}

/// Computes and colours one row of pixels into `row`.
pub(crate) fn fill_row<Alg, CMap>(
    row: &mut [u8],
    y: u32,
    algorithm: &Alg,
    mapper: &CMap,
) -> Result<(), GeneratePixelBufferError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<T = Alg::Success>,
{
    for (x, rgb) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let value = algorithm
            .compute(Point { x: x as u32, y })
            .map_err(GeneratePixelBufferError::Algorithm)?;
        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        rgb.copy_from_slice(&colour.to_bytes());
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_generates_pixel_buffer_in_row_major_order() {
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapSuccess {})
                .unwrap();

        let expected: Vec<u8> = vec![
            0, 0, 0, 10, 10, 10, 20, 20, 20, // row 0
            1, 1, 1, 11, 11, 11, 21, 21, 21, // row 1
        ];

        assert_eq!(results.buffer(), &expected);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_every_pixel_is_written() {
        let pixel_rect = PixelRect::new(7, 5).unwrap();
        let results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapSuccess {})
                .unwrap();

        for y in 0..5 {
            for x in 0..7 {
                let value = (x * 10 + y) as u8;
                assert_eq!(
                    results.pixel(Point { x, y }).unwrap(),
                    Colour::new(value, value, value)
                );
            }
        }
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::new(3, 3).unwrap();
        let algorithm = StubFailureAlgorithm {
            fail_at: Point { x: 2, y: 1 },
        };

        let results = generate_pixel_buffer(pixel_rect, &algorithm, &StubColourMapSuccess {});

        assert_eq!(results, Err(GeneratePixelBufferError::Algorithm(StubError {})));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapFailure {});

        assert_eq!(results, Err(GeneratePixelBufferError::ColourMap(StubError {})));
    }

    #[test]
    fn test_error_display() {
        let algorithm_err: GeneratePixelBufferError<StubError, StubError> =
            GeneratePixelBufferError::Algorithm(StubError {});
        let colour_err: GeneratePixelBufferError<StubError, StubError> =
            GeneratePixelBufferError::ColourMap(StubError {});

        assert_eq!(algorithm_err.to_string(), "algorithm error: StubError");
        assert_eq!(colour_err.to_string(), "colour map error: StubError");
        assert!(algorithm_err.source().is_some());
    }
}
