use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_appender::non_blocking::WorkerGuard;

use mazecarve::{Seed, config::MazeConfig};

/// Generate a perfect maze and optionally draw its solution.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Size of the square maze (must be odd, minimum 5)
    #[arg(short, long, default_value_t = 21)]
    size: usize,

    /// Maze width, overriding --size
    #[arg(long)]
    width: Option<usize>,

    /// Maze height, overriding --size
    #[arg(long)]
    height: Option<usize>,

    /// Seed for reproducible mazes. Non-numeric seeds are hashed
    #[arg(long)]
    seed: Option<String>,

    /// Generation algorithm: dfs, kruskal or wilson
    #[arg(short, long, default_value = "dfs")]
    algorithm: String,

    /// Output format: ascii, unicode or json
    #[arg(short, long, default_value = "ascii")]
    format: String,

    /// Solve the maze and draw the route from start to goal
    #[arg(long)]
    solution: bool,

    /// Color the start, goal and route markers
    #[arg(long)]
    color: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> mazecarve::Result<MazeConfig> {
        Ok(MazeConfig {
            width: self.width.unwrap_or(self.size),
            height: self.height.unwrap_or(self.size),
            algorithm: self.algorithm.parse()?,
            seed: Seed::from(self.seed.as_deref()),
            format: self.format.parse()?,
            solution: self.solution,
            color: self.color,
        })
    }

    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Install the global subscriber. The returned guard must be held until exit
/// so buffered file logs get flushed.
fn init_tracing(level: tracing::Level, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt().with_max_level(level);
    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;
            Ok(None)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    tracing::info!(
        "Generating {}x{} maze with {} (seed: {:?}, format: {})",
        config.width,
        config.height,
        config.algorithm,
        config.seed,
        config.format.name()
    );
    let output = config.run()?;

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        // Downstream closed early (e.g. `| head`), not our failure
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write maze to stdout"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_tracing(cli.log_level(), cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Exiting with error: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
