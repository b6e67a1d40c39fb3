use std::error::Error;
use std::fmt;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel grid must be at least 2x2: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "pixel grid {}x{} is too large to allocate", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel dimensions of the sample grid. Cells run from `(0, 0)` to
/// `(width - 1, height - 1)` inclusive.
///
/// Both sides are at least two pixels because the coordinate mapping divides
/// by `dimension - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        // Image buffers are a single allocation, capped at isize::MAX bytes
        let fits = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Bytes of an RGB image covering this rect; cannot overflow once the
    /// rect is constructed.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }

    /// Row-major offset of `point`, in pixels. Callers check containment first.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(121, 101).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.byte_len(), 12221 * 3);
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        assert_eq!(
            PixelRect::new(0, 0),
            Err(PixelRectError::InvalidSize { width: 0, height: 0 })
        );
        assert_eq!(
            PixelRect::new(1, 1),
            Err(PixelRectError::InvalidSize { width: 1, height: 1 })
        );
        assert_eq!(
            PixelRect::new(11, 1),
            Err(PixelRectError::InvalidSize { width: 11, height: 1 })
        );
        assert_eq!(
            PixelRect::new(1, 11),
            Err(PixelRectError::InvalidSize { width: 1, height: 11 })
        );
        assert!(PixelRect::new(2, 2).is_ok());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(150, 100).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 149, y: 99 }));
        assert!(!rect.contains_point(Point { x: 150, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: 100 }));
    }

    #[test]
    fn test_pixel_rect_index_of_is_row_major() {
        let rect = PixelRect::new(4, 3).unwrap();

        assert_eq!(rect.index_of(Point { x: 0, y: 0 }), 0);
        assert_eq!(rect.index_of(Point { x: 3, y: 0 }), 3);
        assert_eq!(rect.index_of(Point { x: 0, y: 1 }), 4);
        assert_eq!(rect.index_of(Point { x: 3, y: 2 }), 11);
    }

    #[test]
    fn test_pixel_rect_rejects_dimensions_that_cannot_be_allocated() {
        assert_eq!(
            PixelRect::new(4_000_000_000, 4_000_000_000),
            Err(PixelRectError::TooLarge {
                width: 4_000_000_000,
                height: 4_000_000_000
            })
        );
        assert_eq!(
            PixelRect::new(u32::MAX, u32::MAX).unwrap_err().to_string(),
            format!("pixel grid {}x{} is too large to allocate", u32::MAX, u32::MAX)
        );
    }

    #[test]
    fn test_pixel_rect_byte_len() {
        assert_eq!(PixelRect::new(4, 3).unwrap().byte_len(), 36);
    }
}
