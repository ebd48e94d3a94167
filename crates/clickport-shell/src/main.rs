//! Entry point for the Clickport desktop app.
//!
//! Parses the command line, installs logging, builds the theme and launches
//! the Dioxus renderer with the shell as root.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::prelude::*;

use clickport_logging::{FileConfig, LogConfig, ShellSubscriberBuilder, WorkerGuard};
use clickport_shell::{Location, RouteTable, Shell, ShellConfig, Theme, ThemeMode, ThemeOptions};

/// Shell configuration, set once before launch.
static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "clickport")]
#[command(about = "Move data between ClickHouse tables and flat files")]
struct Args {
    /// Location to open on start
    #[arg(short, long, default_value = "/")]
    route: String,

    /// JSON file with theme options
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Override the palette mode
    #[arg(short, long, value_enum)]
    mode: Option<ThemeMode>,

    /// Verbose logging preset (debug level, pretty console)
    #[arg(long)]
    dev: bool,

    /// JSON file with logging settings
    #[arg(long, conflicts_with = "dev")]
    log_config: Option<PathBuf>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Console log format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Also write JSONL logs to daily files in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = init_logging(&args)?;

    let theme = load_theme(args.theme.as_deref(), args.mode)?;
    let config = ShellConfig {
        theme,
        routes: RouteTable::standard(),
        initial_location: Location::parse(&args.route),
    };

    tracing::info!(
        location = %config.initial_location,
        mode = ?config.theme.palette.mode,
        "Starting Clickport"
    );

    SHELL_CONFIG.set(config).ok();
    launch();

    tracing::info!("Clickport closed");
    Ok(())
}

/// Installs logging: a preset or config file, then command line overrides.
fn init_logging(args: &Args) -> anyhow::Result<Option<WorkerGuard>> {
    let config = match &args.log_config {
        Some(path) => LogConfig::load(path)
            .with_context(|| format!("failed to load log config from {}", path.display()))?,
        None if args.dev => LogConfig::development(),
        None => LogConfig::default(),
    };

    let mut logging = ShellSubscriberBuilder::new().with_config(config);
    if let Some(level) = &args.log_level {
        logging = logging.with_level(level);
    }
    if let Some(format) = args.log_format {
        logging = logging.with_pretty_console(matches!(format, LogFormat::Pretty));
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_output(FileConfig::daily(dir));
    }
    logging.init().context("failed to initialize logging")
}

/// Builds the theme from an optional options file and mode override.
fn load_theme(path: Option<&Path>, mode: Option<ThemeMode>) -> anyhow::Result<Theme> {
    let mut options = match path {
        Some(path) => ThemeOptions::load(path)
            .with_context(|| format!("failed to load theme from {}", path.display()))?,
        None => ThemeOptions::default(),
    };
    if let Some(mode) = mode {
        options.palette.mode = mode;
    }
    Ok(Theme::from_options(&options)?)
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Clickport")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap" rel="stylesheet">
                    "#
                    .to_string(),
                ),
        )
        .launch(RootApp);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(RootApp);
}

/// Root component: hands the launch configuration to the shell.
#[component]
fn RootApp() -> Element {
    let config = SHELL_CONFIG.get().cloned().unwrap_or_default();
    rsx! {
        Shell { config }
    }
}
