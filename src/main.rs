use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use marksink_core::{FailurePolicy, FileSink, Level, Logger, SinkConfig};

#[derive(Parser)]
#[command(
    name = "marksink",
    about = "Append stdin lines to a log file, flagging a search string"
)]
struct Cli {
    /// Sink config file (TOML). The flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sink name.
    #[arg(long)]
    name: Option<String>,

    /// File to append to (default: FileSink.log).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Literal substring that triggers a marker line.
    #[arg(long)]
    search: Option<String>,

    /// Layout pattern, e.g. "%d %p %m%n".
    #[arg(long)]
    pattern: Option<String>,

    /// Level recorded for every stdin line.
    #[arg(long, default_value = "info")]
    level: Level,

    /// Drop lines below this level.
    #[arg(long)]
    threshold: Option<Level>,

    /// Fail on write errors instead of ignoring them.
    #[arg(long)]
    strict: bool,

    /// Write debug logs to /tmp/marksink-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn sink_config(&self) -> anyhow::Result<SinkConfig> {
        let mut config = match &self.config {
            Some(path) => SinkConfig::load(path)?,
            None => SinkConfig::default(),
        };
        if let Some(name) = &self.name {
            config.name = Some(name.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        if let Some(search) = &self.search {
            config.search_string = Some(search.clone());
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        if let Some(threshold) = self.threshold {
            config.threshold = Some(threshold);
        }
        if self.strict {
            config.failure_policy = FailurePolicy::Propagate;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/marksink-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("marksink debug log started — tail -f /tmp/marksink-debug.log");
    }

    let sink = Arc::new(FileSink::from_config(cli.sink_config()?)?);
    let logger = Logger::new("stdin", sink.clone());

    let mut lines = 0usize;
    for line in std::io::stdin().lock().lines() {
        logger.log(cli.level, line?)?;
        lines += 1;
    }
    tracing::debug!(lines, sink = %sink.name(), "stdin drained");

    sink.close()?;
    Ok(())
}
