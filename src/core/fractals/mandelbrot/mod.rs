pub mod algorithm;
pub mod colour_maps;
pub mod escape_time;
