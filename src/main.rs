use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use log::{debug, LevelFilter};
use progress_timer::utils::format::format_time;
use progress_timer::utils::progress::{ProgressRenderer, DEFAULT_BAR_WIDTH};
use progress_timer::utils::time::Timer;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "progress-timer")]
#[command(about = "Console progress bar and timing helpers", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulated loop through the progress bar
    Demo {
        /// Number of iterations
        #[arg(long, default_value = "100")]
        total: usize,

        /// Width of the bar in characters
        #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
        bar_width: usize,

        /// Simulated work per iteration, in milliseconds
        #[arg(long, default_value = "20")]
        delay_ms: u64,
    },

    /// Format a number of seconds as H:MM:SS, M:SS or Ns
    FormatTime {
        /// Total seconds
        seconds: u64,
    },

    /// Generate shell completion script
    GenerateCompletion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_demo(total: usize, bar_width: usize, delay_ms: u64) -> Result<()> {
    debug!(
        "Running demo: total={}, bar_width={}, delay_ms={}",
        total, bar_width, delay_ms
    );

    let timer = Timer::start();
    let mut bar = ProgressRenderer::with_width(total, bar_width)
        .context("Failed to create progress bar")?;
    let delay = Duration::from_millis(delay_ms);

    bar.start().context("Failed to draw progress bar")?;
    for i in 1..=total {
        thread::sleep(delay);
        bar.update(i)
            .with_context(|| format!("Failed to update progress bar at {}", i))?;
    }

    println!("{}", timer.end());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Demo {
            total,
            bar_width,
            delay_ms,
        } => run_demo(total, bar_width, delay_ms),
        Commands::FormatTime { seconds } => {
            println!("{}", format_time(seconds));
            Ok(())
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "progress-timer", &mut std::io::stdout());
            Ok(())
        }
    }
}
