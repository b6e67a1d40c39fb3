use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    fill_row, GeneratePixelBufferResult,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// Renders pixels in parallel using rayon's work-stealing scheduler.
///
/// The output buffer is split into disjoint row slices and each rayon task
/// owns exactly one row while it fills it, so no locking is needed and the
/// result is byte-identical to [`generate_pixel_buffer`].
///
/// Runs on the current rayon pool; wrap the call in `ThreadPool::install`
/// to choose the thread count.
///
/// [`generate_pixel_buffer`]: super::generate_pixel_buffer::generate_pixel_buffer
pub fn generate_pixel_buffer_rayon<Alg, CMap>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    mapper: &CMap,
) -> GeneratePixelBufferResult<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T = Alg::Success> + Sync,
    CMap::Failure: Send,
{
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);
    let row_bytes = pixel_buffer.row_bytes();

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| fill_row(row, y as u32, algorithm, mapper))?;

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::test_support::*;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
        generate_pixel_buffer, GeneratePixelBufferError,
    };
    use crate::core::data::point::Point;

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let pixel_rect = PixelRect::new(11, 9).unwrap();

        let sequential_results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapSuccess {})
                .unwrap();
        let rayon_results = generate_pixel_buffer_rayon(
            pixel_rect,
            &StubSuccessAlgorithm {},
            &StubColourMapSuccess {},
        )
        .unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();

        let sequential_results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapSuccess {})
                .unwrap();
        let rayon_results = generate_pixel_buffer_rayon(
            pixel_rect,
            &StubSuccessAlgorithm {},
            &StubColourMapSuccess {},
        )
        .unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::new(4, 5).unwrap();
        let algorithm = StubFailureAlgorithm {
            fail_at: Point { x: 3, y: 4 },
        };

        let result = generate_pixel_buffer_rayon(pixel_rect, &algorithm, &StubColourMapSuccess {});

        assert_eq!(result, Err(GeneratePixelBufferError::Algorithm(StubError {})));
    }

    #[test]
    fn test_rayon_propagates_colour_map_failure() {
        let pixel_rect = PixelRect::new(4, 5).unwrap();

        let result = generate_pixel_buffer_rayon(
            pixel_rect,
            &StubSuccessAlgorithm {},
            &StubColourMapFailure {},
        );

        assert_eq!(result, Err(GeneratePixelBufferError::ColourMap(StubError {})));
    }

    #[test]
    fn test_rayon_inside_dedicated_pool() {
        let pixel_rect = PixelRect::new(16, 12).unwrap();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();

        let sequential_results =
            generate_pixel_buffer(pixel_rect, &StubSuccessAlgorithm {}, &StubColourMapSuccess {})
                .unwrap();
        let pooled_results = pool
            .install(|| {
                generate_pixel_buffer_rayon(
                    pixel_rect,
                    &StubSuccessAlgorithm {},
                    &StubColourMapSuccess {},
                )
            })
            .unwrap();

        assert_eq!(pooled_results, sequential_results);
    }
}
