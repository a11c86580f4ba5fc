//! Saved project snapshots.
//!
//! A project freezes the form data and the calculation result at save time.
//! Only the name can change afterwards; the stored figures are never
//! recomputed when a project is read back.

pub mod store;

pub use store::{FileProjectRepository, ProjectRepository};

use crate::core::{CalculationResult, FormData};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh64::xxh64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    #[default]
    Completed,
    Archived,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => f.write_str("draft"),
            Self::Completed => f.write_str("completed"),
            Self::Archived => f.write_str("archived"),
        }
    }
}

/// Who saved a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOwner {
    pub user: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub form: FormData,
    pub calculations: CalculationResult,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn validated_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("project name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Hex id derived from the name and the creation instant.
pub fn project_id(name: &str, created: DateTime<Utc>) -> String {
    let seed = format!("{}:{}", name, created.to_rfc3339());
    format!("{:016x}", xxh64(seed.as_bytes(), 0))
}

impl Project {
    /// Copy the current form data and calculations into a new project.
    pub fn snapshot(
        form: &FormData,
        calculations: &CalculationResult,
        name: &str,
        owner: ProjectOwner,
    ) -> Result<Self> {
        Self::snapshot_at(form, calculations, name, owner, Utc::now())
    }

    pub fn snapshot_at(
        form: &FormData,
        calculations: &CalculationResult,
        name: &str,
        owner: ProjectOwner,
        created: DateTime<Utc>,
    ) -> Result<Self> {
        let name = validated_name(name)?;
        Ok(Self {
            id: project_id(&name, created),
            name,
            form: form.clone(),
            calculations: calculations.clone(),
            creation_date: created,
            status: ProjectStatus::Completed,
            user: owner.user,
            user_id: owner.user_id,
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = validated_name(name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_feasibility;
    use crate::config::FeasibilityConfig;
    use chrono::TimeZone;

    fn sample() -> Project {
        let form = FormData::default();
        let calculations = calculate_feasibility(&form, &FeasibilityConfig::default());
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Project::snapshot_at(&form, &calculations, "Bakery", ProjectOwner::default(), created)
            .unwrap()
    }

    #[test]
    fn id_is_deterministic() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(project_id("Bakery", created), sample().id);
        assert_eq!(sample().id.len(), 16);
        assert_ne!(project_id("Cafe", created), sample().id);
    }

    #[test]
    fn rename_rejects_blank_names() {
        let mut project = sample();
        assert!(matches!(project.rename("  "), Err(Error::InvalidInput(_))));
        assert_eq!(project.name, "Bakery");
        project.rename(" Bakery & Cafe ").unwrap();
        assert_eq!(project.name, "Bakery & Cafe");
    }

    #[test]
    fn sections_are_flattened_in_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["financial"].is_object());
        assert!(value["calculations"]["overall"].is_object());
        assert_eq!(value["status"], "completed");
        assert!(value.get("userId").is_none());
    }
}
