//! CLI argument definitions.
//!
//! Preflight takes no functional options: it always runs the full
//! diagnostic pass against the current directory. The flags here only
//! control output and logging.

use clap::Parser;

/// Preflight - Quick setup checks and diagnostics for Gemini CLI.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::parse_from(["preflight"]);
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::parse_from(["preflight", "--no-color", "--debug"]);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["preflight", "extra"]).is_err());
    }
}
