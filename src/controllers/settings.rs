use std::path::PathBuf;

use crate::core::actions::evaluate_field::EvaluatorKind;
use crate::core::data::grid::{Grid, GridError};

pub const DEFAULT_SIZE: u32 = 256;
pub const DEFAULT_MAX_ITERATIONS: u32 = 15000;
pub const DEFAULT_X_RANGE: (f64, f64) = (-2.25, 1.25);
pub const DEFAULT_Y_RANGE: (f64, f64) = (-1.75, 1.75);
pub const DEFAULT_OUTPUT: &str = "mandelbrot.ppm";
pub const DEFAULT_PROBLEM_LABEL: &str = "mandelbrot";

/// Everything a benchmark run is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Pixel width and height of the square grid.
    pub size: u32,
    /// Worker threads for the parallel evaluator; `0` lets rayon decide.
    pub processors: usize,
    pub max_iterations: u32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub evaluator: EvaluatorKind,
    pub output: PathBuf,
    pub problem_label: String,
    /// Overrides the evaluator's own label in the report.
    pub approach_label: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            processors: 0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            evaluator: EvaluatorKind::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            problem_label: DEFAULT_PROBLEM_LABEL.to_string(),
            approach_label: None,
        }
    }
}

impl RenderSettings {
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::from_parts(
            self.size,
            self.size,
            self.x_range,
            self.y_range,
            self.max_iterations,
        )
    }

    #[must_use]
    pub fn approach_label(&self) -> &str {
        self.approach_label
            .as_deref()
            .unwrap_or(self.evaluator.label())
    }
}
