//! Weave CLI: simulation, benchmarking, and config validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "weave")]
#[command(version, about = "Weave: mass-spring cloth simulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation and print per-frame diagnostics.
    Simulate {
        /// Path to simulator config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 60)]
        frames: u32,

        /// Frame duration in seconds.
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,

        /// Override the integrator (rk4, euler).
        #[arg(short, long)]
        integrator: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_cloth, windy_cloth, euler_cloth, free_fall, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a simulator config file.
    Validate {
        /// Path to config file (TOML).
        path: String,
    },

    /// Print the default configuration as TOML.
    Config {
        /// Preset to print (default, fast, high_accuracy).
        #[arg(short, long, default_value = "default")]
        preset: String,
    },
}

/// Log level for the `-v`/`-q` flags, or `None` to keep `RUST_LOG`.
fn log_level(verbose: u8, quiet: bool) -> Option<log::LevelFilter> {
    match (verbose, quiet) {
        (0, false) => None,
        (0, true) => Some(log::LevelFilter::Error),
        (1, _) => Some(log::LevelFilter::Info),
        (2, _) => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn main() {
    let cli = Cli::parse();

    // `tracing` events from the library crates are forwarded as `log` records.
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = log_level(cli.verbose, cli.quiet) {
        logger.filter_level(level);
    }
    logger.init();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            dt,
            integrator,
        } => commands::simulate(config.as_deref(), frames, dt, integrator.as_deref()),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Config { preset } => commands::config(&preset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
