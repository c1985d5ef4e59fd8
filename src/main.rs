use atlas::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the world's countries grouped by continent")]
struct Args {
    /// Countries endpoint (overrides ATLAS_ENDPOINT and the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level written to atlas.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Print the grouped list to stdout instead of starting the TUI
    #[arg(long)]
    list: bool,

    /// Only list countries whose name contains this text (with --list)
    #[arg(long, requires = "list")]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            timeout_secs: args.timeout_secs,
        },
    );
    log::info!(
        "Atlas starting up with endpoint {} (timeout {:?})",
        resolved.endpoint,
        resolved.timeout
    );

    if args.list {
        atlas::cli::list(resolved, args.query.as_deref()).await
    } else {
        atlas::tui::run(resolved)
    }
}
