use super::Project;
use crate::errors::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage for saved projects.
pub trait ProjectRepository {
    fn save(&self, project: &Project) -> Result<()>;
    fn load(&self, id: &str) -> Result<Project>;
    /// Every stored project, newest first.
    fn list(&self) -> Result<Vec<Project>>;
    fn rename(&self, id: &str, name: &str) -> Result<Project>;
}

/// One pretty-printed JSON file per project inside a directory.
#[derive(Debug, Clone)]
pub struct FileProjectRepository {
    root: PathBuf,
}

impl FileProjectRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<data dir>/factibilidad/projects`, or `.factibilidad/projects` when
    /// the platform has no data directory.
    pub fn default_location() -> Self {
        let root = dirs::data_dir()
            .map(|dir| dir.join("factibilidad"))
            .unwrap_or_else(|| PathBuf::from(".factibilidad"))
            .join("projects");
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let safe = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        safe.then(|| self.root.join(format!("{id}.json")))
    }

    fn read(path: &Path) -> Result<Project> {
        let content = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ProjectRepository for FileProjectRepository {
    fn save(&self, project: &Project) -> Result<()> {
        let path = self
            .path_for(&project.id)
            .ok_or_else(|| Error::invalid_input(format!("invalid project id '{}'", project.id)))?;
        fs::create_dir_all(&self.root).map_err(|e| Error::io_with_path(e, &self.root))?;

        // Write to a sibling temp file and rename so readers never see a partial file.
        let temp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(project)?;
        fs::write(&temp, json).map_err(|e| Error::io_with_path(e, &temp))?;
        fs::rename(&temp, &path).map_err(|e| Error::io_with_path(e, &path))?;

        log::debug!("Saved project {} to {}", project.id, path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Project> {
        let path = self
            .path_for(id)
            .ok_or_else(|| Error::project_not_found(id))?;
        match fs::metadata(&path) {
            Ok(_) => Self::read(&path),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::project_not_found(id)),
            Err(e) => Err(Error::io_with_path(e, path)),
        }
    }

    fn list(&self) -> Result<Vec<Project>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io_with_path(e, &self.root)),
        };

        let mut projects = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io_with_path(e, &self.root))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path) {
                Ok(project) => projects.push(project),
                Err(e) => log::warn!("Skipping unreadable project {}: {}", path.display(), e),
            }
        }

        projects.sort_by(|a, b| {
            b.creation_date
                .cmp(&a.creation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(projects)
    }

    fn rename(&self, id: &str, name: &str) -> Result<Project> {
        let mut project = self.load(id)?;
        project.rename(name)?;
        self.save(&project)?;
        Ok(project)
    }
}
