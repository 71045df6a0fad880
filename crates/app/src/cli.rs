//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reqres_infrastructure::ReportFormat;

/// Runs the reqres.in API suite.
#[derive(Debug, Parser)]
#[command(name = "reqres-suite", version, about)]
pub struct Cli {
    /// TOML configuration file [default: ./reqres-suite.toml if present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run only scenarios whose name contains NAME (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Print the scenario names and exit
    #[arg(long)]
    pub list: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log filter, overrides RUST_LOG (e.g. `debug`, `reqres_application=trace`)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Report format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable summary
    Text,
    /// Pretty JSON
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["reqres-suite"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(cli.only.is_empty());
        assert!(!cli.list);
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "reqres-suite",
            "--config",
            "suite.toml",
            "--only",
            "register",
            "--only",
            "delete_user",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("suite.toml")));
        assert_eq!(cli.only, vec!["register", "delete_user"]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(ReportFormat::from(cli.format), ReportFormat::Json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["reqres-suite", "--format", "xml"]).is_err());
    }
}
