pub mod evaluate_field;
pub mod generate_pixel_buffer;
