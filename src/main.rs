use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use server_versions::config::{
    DEFAULT_GITHUB_API, DEFAULT_MANIFEST_PATH, DEFAULT_NPM_REGISTRY, DEFAULT_PYPI_REGISTRY,
    Endpoints, FETCH_TIMEOUT_SECS, ResolverConfig,
};

#[derive(Parser)]
#[command(name = "server-versions")]
#[command(
    version,
    about = "Print the latest published version of every component in a registry manifest"
)]
struct Cli {
    /// Path to the registry manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST_PATH)]
    config: PathBuf,

    /// Seconds allowed for each request or probe command
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,

    #[arg(long, default_value = DEFAULT_NPM_REGISTRY)]
    npm_registry: String,

    #[arg(long, default_value = DEFAULT_PYPI_REGISTRY)]
    pypi_registry: String,

    #[arg(long, default_value = DEFAULT_GITHUB_API)]
    github_api: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            endpoints: Endpoints {
                npm: self.npm_registry.clone(),
                pypi: self.pypi_registry.clone(),
                github: self.github_api.clone(),
            },
            timeout: Duration::from_secs(self.timeout),
            ..ResolverConfig::from_env()
        }
    }
}

/// Logs go to stderr (or `log_file`) so stdout carries only the report.
/// Level comes from `RUST_LOG`, defaulting to `warn`.
fn init_logging(log_file: Option<&Path>, json: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard, ansi) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            (BoxMakeWriter::new(writer), Some(guard), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            None,
            std::io::stderr().is_terminal(),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref(), cli.log_json)?;
    let config = cli.resolver_config();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(server_versions::runner::run(
            &cli.config,
            &config,
            std::io::stdout().lock(),
            !cli.compact,
        ))?;

    Ok(())
}
