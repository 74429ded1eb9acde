use std::io;
use std::process::ExitCode;

use clap::Parser;
use sortkit::{demo, report, AppError, DemoConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Sort an integer array, print it, and binary-search it for a target")]
struct Cli {
    /// Comma-separated values to sort (default: 5,2,9,1,3)
    #[arg(long, allow_hyphen_values = true)]
    values: Option<String>,

    /// Value to search for after sorting (default: 3)
    #[arg(long, allow_negative_numbers = true)]
    target: Option<i32>,

    /// Print a JSON report instead of plain lines
    #[arg(long)]
    json: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "sortkit=warn",
        1 => "sortkit=info",
        _ => "sortkit=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut config = DemoConfig::default();
    if let Some(list) = &cli.values {
        config = config.with_value_list(list)?;
    }
    if let Some(target) = cli.target {
        config = config.with_target(target);
    }
    debug!(?config, "starting demo");

    let outcome = demo::run(&config);
    let mut stdout = io::stdout().lock();

    if cli.json {
        report::write_json(&outcome, &mut stdout)
    } else {
        demo::write_text(&outcome, &mut stdout)
    }
}
