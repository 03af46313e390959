pub mod bundled;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub about: String,
    pub current_focus: String,
    pub career_goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// A skill with experience detail, as kept by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub years_experience: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
}

/// Everything the prompt composer knows about the site owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub skill_categories: Vec<SkillCategory>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
}

impl Profile {
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

/// Where profile data was obtained from.
///
/// `Fallback` means the live source failed and bundled data was substituted.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(v) | Sourced::Fallback(v) => v,
        }
    }
}

/// A provider of profile data (database, file, bundled constants).
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Profile>;
}

/// Serves the profile compiled into the binary. Never fails.
pub struct StaticContent;

#[async_trait]
impl ContentSource for StaticContent {
    async fn fetch(&self) -> anyhow::Result<Profile> {
        Ok(bundled::profile())
    }
}

/// Reads a JSON-encoded `Profile` from disk on every fetch, so edits are
/// picked up without a restart.
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContent {
    async fn fetch(&self) -> anyhow::Result<Profile> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", self.path.display()))?;
        let profile = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid profile at {}: {e}", self.path.display()))?;
        debug!(path = %self.path.display(), "loaded profile");
        Ok(profile)
    }
}

/// Fetch from `source`, substituting the bundled fallback profile on failure.
pub async fn fetch_or_bundled(source: &dyn ContentSource) -> Sourced<Profile> {
    match source.fetch().await {
        Ok(profile) => Sourced::Live(profile),
        Err(e) => {
            warn!("profile fetch failed, using bundled data: {e}");
            Sourced::Fallback(bundled::fallback_profile())
        }
    }
}
