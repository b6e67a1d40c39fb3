pub mod pixel_to_complex_coords;
