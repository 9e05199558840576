//! Preflight CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use preflight::audit::Auditor;
use preflight::cli::Cli;
use preflight::ui::{should_use_colors, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("preflight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("preflight=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Preflight starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = if should_use_colors() {
        Theme::new()
    } else {
        Theme::plain()
    };

    let project_root = std::env::current_dir().unwrap_or_default();
    let auditor = Auditor::new(project_root, theme);

    let stdout = std::io::stdout();
    if let Err(e) = auditor.run(&mut stdout.lock()) {
        tracing::error!("Failed to write report: {}", e);
    }

    // The report is advisory. Missing prerequisites produce
    // recommendations, never a failing exit status.
    ExitCode::SUCCESS
}
