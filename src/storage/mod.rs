pub mod read_ppm;
pub mod write_ppm;
