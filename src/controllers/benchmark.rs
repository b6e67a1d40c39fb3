use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::controllers::settings::RenderSettings;
use crate::controllers::timing::{BenchmarkReport, ElapsedTime};
use crate::core::actions::evaluate_field::{evaluate_with, EvaluateFieldError, EvaluatorKind};
use crate::core::data::grid::{Grid, GridError};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum BenchmarkError {
    Config(GridError),
    ThreadPool(ThreadPoolBuildError),
    Evaluate(EvaluateFieldError),
    Open { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    NotGenerated,
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::ThreadPool(err) => write!(f, "failed to build thread pool: {}", err),
            Self::Evaluate(err) => write!(f, "evaluation failed: {}", err),
            Self::Open { path, source } => {
                write!(f, "Unable to open file '{}': {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
            Self::NotGenerated => write!(f, "no image has been generated yet"),
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::Evaluate(err) => Some(err),
            Self::Open { source, .. } | Self::Write { source, .. } => Some(source),
            Self::NotGenerated => None,
        }
    }
}

/// Runs one timed render and hands the result to a presenter.
///
/// The grid and the worker pool are prepared in [`BenchmarkController::new`],
/// so a bad configuration fails before any work starts and pool start-up is
/// not charged to the algorithm timer.
pub struct BenchmarkController<P: FilePresenterPort> {
    presenter: P,
    settings: RenderSettings,
    grid: Grid,
    pool: Option<ThreadPool>,
    buffer: Option<PixelBuffer>,
    algorithm_time: Option<ElapsedTime>,
}

impl<P: FilePresenterPort> BenchmarkController<P> {
    pub fn new(presenter: P, settings: RenderSettings) -> Result<Self, BenchmarkError> {
        let grid = settings.grid().map_err(BenchmarkError::Config)?;

        let pool = match (settings.evaluator, settings.processors) {
            (EvaluatorKind::Rayon, n) if n > 0 => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(BenchmarkError::ThreadPool)?,
            ),
            _ => None,
        };

        Ok(Self {
            presenter,
            settings,
            grid,
            pool,
            buffer: None,
            algorithm_time: None,
        })
    }

    /// Evaluates the field and returns how long the evaluation alone took.
    pub fn generate(&mut self) -> Result<ElapsedTime, BenchmarkError> {
        let width = self.grid.pixel_rect().width();
        let height = self.grid.pixel_rect().height();
        let evaluator = self.settings.evaluator;

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", width, height);
        info!("Max iterations: {}", self.grid.max_iterations());
        info!(
            "Evaluator: {} ({} threads)",
            evaluator,
            self.pool
                .as_ref()
                .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
        );

        let grid = &self.grid;
        let start = Instant::now();
        let result = match &self.pool {
            Some(pool) => pool.install(|| evaluate_with(grid, evaluator)),
            None => evaluate_with(grid, evaluator),
        };
        let elapsed = ElapsedTime::since(start);

        let buffer = result.map_err(BenchmarkError::Evaluate)?;
        debug!(
            "Duration:   {}.{:09}s",
            elapsed.seconds(),
            elapsed.nanos()
        );

        self.buffer = Some(buffer);
        self.algorithm_time = Some(elapsed);

        Ok(elapsed)
    }

    pub fn write(&self) -> Result<(), BenchmarkError> {
        let buffer = self.buffer.as_ref().ok_or(BenchmarkError::NotGenerated)?;
        let path = &self.settings.output;

        self.presenter
            .present(buffer, path)
            .map_err(|err| match err {
                PresentError::Open(source) => BenchmarkError::Open {
                    path: path.clone(),
                    source,
                },
                PresentError::Write(source) => BenchmarkError::Write {
                    path: path.clone(),
                    source,
                },
            })?;

        info!("Saved to {}", path.display());
        Ok(())
    }

    pub fn report(&self, end_to_end: ElapsedTime) -> Result<BenchmarkReport, BenchmarkError> {
        let algorithm = self.algorithm_time.ok_or(BenchmarkError::NotGenerated)?;

        Ok(BenchmarkReport {
            problem: self.settings.problem_label.clone(),
            approach: self.settings.approach_label().to_string(),
            size: self.settings.size,
            processors: self.settings.processors,
            end_to_end,
            algorithm,
        })
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
