use anyhow::Result;
use clap::Parser;
use factibilidad::cli::{Cli, Commands, ReportArgs};
use factibilidad::commands::{
    self, create_formatting_config, AnalyzeConfig, OptimizeConfig, SaveConfig,
};
use factibilidad::observability::{init_logging, install_panic_hook};
use factibilidad::project::ProjectOwner;

// Main orchestrator function
fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(verbosity_of(&cli.command));

    match cli.command {
        Commands::Analyze { path, report } => commands::handle_analyze(AnalyzeConfig {
            path,
            format: report.format,
            output: report.output,
            config: report.config,
            formatting_config: create_formatting_config(report.plain),
        }),
        Commands::Optimize {
            path,
            report,
            write_data,
        } => commands::handle_optimize(OptimizeConfig {
            path,
            format: report.format,
            output: report.output,
            config: report.config,
            formatting_config: create_formatting_config(report.plain),
            write_data,
        }),
        Commands::Save {
            path,
            name,
            store,
            config,
            user,
            user_id,
            verbosity: _,
        } => commands::handle_save(SaveConfig {
            path,
            name,
            store,
            config,
            owner: ProjectOwner { user, user_id },
        }),
        Commands::Projects { command, store } => commands::handle_projects(command, store),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Pure function to pick the log level requested on the command line
fn verbosity_of(command: &Commands) -> u8 {
    match command {
        Commands::Analyze {
            report: ReportArgs { verbosity, .. },
            ..
        }
        | Commands::Optimize {
            report: ReportArgs { verbosity, .. },
            ..
        }
        | Commands::Save { verbosity, .. } => *verbosity,
        Commands::Projects { .. } | Commands::Init { .. } => 0,
    }
}
