use super::{create_formatting_config, resolve_config};
use crate::cli::ProjectCommands;
use crate::io::{self, create_writer};
use crate::observability::set_current_command;
use crate::project::{FileProjectRepository, ProjectOwner, ProjectRepository};
use crate::state::FeasibilityState;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct SaveConfig {
    pub path: PathBuf,
    pub name: String,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub owner: ProjectOwner,
}

fn repository(store: Option<PathBuf>) -> FileProjectRepository {
    store
        .map(FileProjectRepository::new)
        .unwrap_or_else(FileProjectRepository::default_location)
}

pub fn handle_save(config: SaveConfig) -> Result<()> {
    set_current_command(format!("save {}", config.path.display()));

    let engine_config = resolve_config(config.config.as_deref())?;
    let form = io::read_form(&config.path)
        .with_context(|| format!("Failed to read form data from {}", config.path.display()))?;

    let state = FeasibilityState::new(form, engine_config);
    let project = state.snapshot(&config.name, config.owner)?;

    let repo = repository(config.store);
    repo.save(&project)
        .with_context(|| format!("Failed to save project in {}", repo.root().display()))?;

    println!("Saved project '{}' with id {}", project.name, project.id);
    Ok(())
}

pub fn handle_projects(command: ProjectCommands, store: Option<PathBuf>) -> Result<()> {
    let repo = repository(store);

    match command {
        ProjectCommands::List { format, plain } => {
            set_current_command("projects list");
            let projects = repo.list()?;
            log::debug!("Found {} projects in {}", projects.len(), repo.root().display());
            let mut writer = create_writer(
                format,
                Box::new(std::io::stdout()),
                create_formatting_config(plain),
            );
            writer.write_project_list(&projects)?;
        }
        ProjectCommands::Rename { id, name } => {
            set_current_command(format!("projects rename {id}"));
            let project = repo.rename(&id, &name)?;
            println!("Renamed project {} to '{}'", project.id, project.name);
        }
        ProjectCommands::Show { id, format, plain } => {
            set_current_command(format!("projects show {id}"));
            let project = repo.load(&id)?;
            let mut writer = create_writer(
                format,
                Box::new(std::io::stdout()),
                create_formatting_config(plain),
            );
            writer.write_project(&project)?;
        }
    }
    Ok(())
}
