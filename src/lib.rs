//! Escape-time Mandelbrot renderer with a fixed 16-band palette, PPM output
//! and benchmark timing.

pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::controllers::benchmark::{BenchmarkController, BenchmarkError};
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::controllers::settings::RenderSettings;
pub use crate::controllers::timing::{BenchmarkReport, ElapsedTime};
pub use crate::core::actions::evaluate_field::{
    evaluate, evaluate_with, EvaluateFieldError, EvaluatorKind,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_maps::cycling_gradient::{
    colour_for, colour_for_count,
};
pub use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::read_ppm::{read_ppm, PpmError, PpmHeader};
pub use crate::storage::write_ppm::{write_ppm, WritePpmError};
