use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;

use mandelbrot_bench::controllers::settings::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_OUTPUT, DEFAULT_PROBLEM_LABEL, DEFAULT_X_RANGE,
    DEFAULT_Y_RANGE,
};
use mandelbrot_bench::{
    BenchmarkController, BenchmarkError, ElapsedTime, EvaluatorKind, PpmFilePresenter,
    RenderSettings,
};

/// Render the Mandelbrot set to a PPM file and print one benchmark CSV line
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_bench")]
#[command(version, long_about = None)]
struct Cli {
    /// Image width and height in pixels
    size: u32,

    /// Worker threads for the parallel evaluator (0 = one per logical CPU)
    processors: usize,

    /// Output PPM file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Iteration cap per pixel
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_X_RANGE.0, allow_negative_numbers = true)]
    x_min: f64,

    #[arg(long, default_value_t = DEFAULT_X_RANGE.1, allow_negative_numbers = true)]
    x_max: f64,

    #[arg(long, default_value_t = DEFAULT_Y_RANGE.0, allow_negative_numbers = true)]
    y_min: f64,

    #[arg(long, default_value_t = DEFAULT_Y_RANGE.1, allow_negative_numbers = true)]
    y_max: f64,

    /// Use the single-threaded evaluator
    #[arg(long)]
    serial: bool,

    /// First field of the report line
    #[arg(long, default_value = DEFAULT_PROBLEM_LABEL)]
    problem_label: String,

    /// Second field of the report line [default: serial or rayon]
    #[arg(long)]
    approach_label: Option<String>,
}

impl Cli {
    fn into_settings(self) -> RenderSettings {
        RenderSettings {
            size: self.size,
            processors: self.processors,
            max_iterations: self.max_iterations,
            x_range: (self.x_min, self.x_max),
            y_range: (self.y_min, self.y_max),
            evaluator: if self.serial {
                EvaluatorKind::Serial
            } else {
                EvaluatorKind::Rayon
            },
            output: self.output,
            problem_label: self.problem_label,
            approach_label: self.approach_label,
        }
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

fn run(cli: Cli, start: Instant) -> Result<(), BenchmarkError> {
    let settings = cli.into_settings();
    debug!("{:?}", settings);

    let mut controller = BenchmarkController::new(PpmFilePresenter::new(), settings)?;
    controller.generate()?;
    controller.write()?;

    let report = controller.report(ElapsedTime::since(start))?;
    println!("{}", report);

    Ok(())
}

fn main() -> ExitCode {
    let start = Instant::now();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print_usage();
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(err, BenchmarkError::Config(_)) {
                print_usage();
            }
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
