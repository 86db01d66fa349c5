mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use civerify_core::{Box2, ComplexInterval, Interval, ReferenceOracle};
use civerify_solver::{run, RunOptions};

use error::CliError;

/// Certify zeros of a user-selected map F: C^2 -> C^2 inside a bounded box.
#[derive(Debug, Parser)]
#[command(name = "civerify", version, about)]
struct Cli {
    /// Centre of the scalar parameter interval.
    #[arg(short = 'p', default_value_t = 0.0, allow_hyphen_values = true)]
    param_center: f64,

    /// Width added to the parameter supremum; final parameter is [p, p+w].
    #[arg(short = 'w', default_value_t = 0.0)]
    param_width: f64,

    /// Maximum BFS levels; -1 means unbounded.
    #[arg(short = 's', default_value_t = -1, allow_hyphen_values = true)]
    max_steps: i64,

    /// Print per-level progress lines to standard output.
    #[arg(short = 'v')]
    verbose: bool,

    /// Emit residual (undecided) boxes instead of certified zeros.
    #[arg(short = 'f')]
    residual_mode: bool,

    /// Selects the reference oracle.
    #[arg(short = 'F', long = "function", default_value = "identity")]
    function: String,

    /// Worker thread count. Defaults to the number of available hardware threads.
    #[arg(short = 'j', long = "workers")]
    workers: Option<usize>,

    /// The eight domain bounds: inf/sup Re/Im of z1, then of z2.
    #[arg(num_args = 8, allow_hyphen_values = true, value_name = "DOMAIN")]
    domain: Vec<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run_cli(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<(), CliError> {
    info!("Starting civerify");

    let oracle = ReferenceOracle::parse(&cli.function)?;
    let domain = parse_domain(&cli.domain)?;
    let p = parse_parameter(cli.param_center, cli.param_width)?;

    let worker_count = cli.workers.unwrap_or_else(default_worker_count);
    let max_steps = if cli.max_steps < 0 {
        None
    } else {
        Some(cli.max_steps as usize)
    };
    let options = RunOptions::new(max_steps, worker_count, cli.verbose, cli.residual_mode)?;

    let report = run(&oracle, domain, p, &options);

    let emitted: &[Box2] = if cli.residual_mode {
        &report.residuals
    } else {
        &report.zeros
    };
    for box_ in emitted {
        println!("{}", format_box(box_));
    }

    if report.step_cap_reached {
        println!("Maximum number of steps reached");
    }
    let fraction = (report.residuals.len() as f64) * 2f64.powi(-(report.steps_run as i32) - 1);
    println!("residual boxes: {}", report.residuals.len());
    println!("approx surviving fraction: {fraction:.6}");
    println!("zeros found: {}", report.counters.zeros_found);
    println!("bisections performed: {}", report.counters.bisections);

    Ok(())
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn parse_parameter(center: f64, width: f64) -> Result<Interval, CliError> {
    if width < 0.0 {
        return Err(CliError::NegativeParamWidth(width));
    }
    Ok(Interval::new(center, center + width)?)
}

fn parse_domain(values: &[f64]) -> Result<Box2, CliError> {
    if values.len() != 8 {
        return Err(CliError::WrongDomainArity(values.len()));
    }
    let z1 = ComplexInterval::new(
        Interval::new(values[0], values[1])?,
        Interval::new(values[2], values[3])?,
    );
    let z2 = ComplexInterval::new(
        Interval::new(values[4], values[5])?,
        Interval::new(values[6], values[7])?,
    );
    Ok(Box2::new(z1, z2))
}

fn format_box(box_: &Box2) -> String {
    format!(
        "{}; {}; {}; {}; {}; {}; {}; {}",
        box_.z1.re.lo,
        box_.z1.re.hi,
        box_.z1.im.lo,
        box_.z1.im.hi,
        box_.z2.re.lo,
        box_.z2.re.hi,
        box_.z2.im.lo,
        box_.z2.im.hi,
    )
}
