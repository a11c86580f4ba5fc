use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "factibilidad")]
#[command(about = "Feasibility analysis for small business projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the commands that render a report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to .factibilidad.toml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use plain output formatting (ASCII-only, no colors)
    #[arg(long = "plain")]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate feasibility metrics for a form data file
    Analyze {
        /// Form data JSON file
        path: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Propose adjusted figures that address the detected issues
    Optimize {
        /// Form data JSON file
        path: PathBuf,

        #[command(flatten)]
        report: ReportArgs,

        /// Write the optimized form data to this file
        #[arg(long = "write-data")]
        write_data: Option<PathBuf>,
    },

    /// Save a project snapshot of a form data file
    Save {
        /// Form data JSON file
        path: PathBuf,

        /// Project name
        #[arg(long)]
        name: String,

        /// Project directory (defaults to the user data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Owner display name
        #[arg(long)]
        user: Option<String>,

        /// Owner id
        #[arg(long = "user-id")]
        user_id: Option<String>,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Manage saved projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,

        /// Project directory (defaults to the user data directory)
        #[arg(long, global = true)]
        store: Option<PathBuf>,
    },

    /// Initialize a configuration file with the default thresholds
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List saved projects, newest first
    List {
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(long = "plain")]
        plain: bool,
    },

    /// Rename a saved project
    Rename {
        /// Project id
        id: String,

        /// New name
        name: String,
    },

    /// Show a saved project with its stored calculations
    Show {
        /// Project id
        id: String,

        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        #[arg(long = "plain")]
        plain: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_parses_format_and_verbosity() {
        let cli = Cli::try_parse_from(["factibilidad", "analyze", "form.json", "-f", "json", "-vv"])
            .unwrap();
        match cli.command {
            Commands::Analyze { path, report } => {
                assert_eq!(path, PathBuf::from("form.json"));
                assert_eq!(report.format, OutputFormat::Json);
                assert_eq!(report.verbosity, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn projects_store_is_global() {
        let cli = Cli::try_parse_from([
            "factibilidad",
            "projects",
            "rename",
            "abc123",
            "New name",
            "--store",
            "/tmp/p",
        ])
        .unwrap();
        match cli.command {
            Commands::Projects { command, store } => {
                assert_eq!(store, Some(PathBuf::from("/tmp/p")));
                assert!(matches!(command, ProjectCommands::Rename { .. }));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
