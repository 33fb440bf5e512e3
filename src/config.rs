//! Site configuration.
//!
//! Loaded from an optional YAML file; every field has a default so an empty
//! file (or no file) yields a working configuration. Environment variables
//! override the file for deployment:
//!
//! - `LABSITE_DATA`: document source (URL or path)
//! - `LABSITE_SKELETON`: page skeleton path
//! - `LABSITE_STATIC_DIR`: directory served for static assets
//! - `LABSITE_BIND`: server bind address
//! - `PORT`: server port (replaces the port of the bind address)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loader::{DocumentSource, LoaderOptions};
use crate::populator::regions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site Document source: `http(s)://` URL or file path
    pub data: String,
    /// Page skeleton containing region markers
    pub skeleton: PathBuf,
    /// Append a timestamp query parameter to URL sources
    pub cache_bust: bool,
    pub request_timeout_secs: u64,
    pub map: MapConfig,
    pub server: ServerConfig,
    pub populator: PopulatorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: "info.json".to_string(),
            skeleton: PathBuf::from("index.html"),
            cache_bust: true,
            request_timeout_secs: 15,
            map: MapConfig::default(),
            server: ServerConfig::default(),
            populator: PopulatorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// The page embeds a client map library that signals readiness
    pub enabled: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("."),
        }
    }
}

// ============================================================================
// Populator variants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamLayout {
    Cards,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationLayout {
    Flat,
    Grouped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectLayout {
    Cards,
    Grid,
}

/// A team role-group and the region it renders into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGroup {
    /// Key under `team` in the document
    pub key: String,
    pub label: String,
    pub region: String,
}

impl RoleGroup {
    pub fn new(key: &str, label: &str, region: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            region: region.to_string(),
        }
    }
}

/// A labeled publication bucket, matched on the publication `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
}

impl PublicationGroup {
    pub fn new(kind: &str, label: &str) -> Self {
        Self {
            kind: kind.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatorConfig {
    /// Also render the duplicated rolling news ticker
    pub news_ticker: bool,
    pub team_layout: TeamLayout,
    /// Rendered in this order
    pub role_groups: Vec<RoleGroup>,
    pub publication_layout: PublicationLayout,
    /// Bucket order for the grouped layout
    pub publication_groups: Vec<PublicationGroup>,
    pub project_layout: ProjectLayout,
    pub default_map_zoom: u8,
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        Self {
            news_ticker: true,
            team_layout: TeamLayout::Cards,
            role_groups: vec![
                RoleGroup::new("faculty", "Faculty", regions::TEAM_FACULTY),
                RoleGroup::new("phd_students", "PhD Students", regions::TEAM_PHD),
                RoleGroup::new("masters_students", "Masters Students", regions::TEAM_MASTERS),
                RoleGroup::new(
                    "undergraduate_students",
                    "Undergraduate Students",
                    regions::TEAM_UNDERGRADUATE,
                ),
            ],
            publication_layout: PublicationLayout::Flat,
            publication_groups: vec![
                PublicationGroup::new("preprint", "Preprints"),
                PublicationGroup::new("published", "Published"),
            ],
            project_layout: ProjectLayout::Cards,
            default_map_zoom: 16,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl SiteConfig {
    /// Load from a YAML file (or defaults), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse a YAML file. Relative paths are resolved against its directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        if config.skeleton.is_relative() {
            config.skeleton = base.join(&config.skeleton);
        }
        if config.server.static_dir.is_relative() {
            config.server.static_dir = base.join(&config.server.static_dir);
        }
        if !is_url(&config.data) && Path::new(&config.data).is_relative() {
            config.data = base.join(&config.data).to_string_lossy().into_owned();
        }
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Apply overrides from a variable lookup (the process environment in production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data) = lookup("LABSITE_DATA") {
            self.data = data;
        }
        if let Some(skeleton) = lookup("LABSITE_SKELETON") {
            self.skeleton = PathBuf::from(skeleton);
        }
        if let Some(dir) = lookup("LABSITE_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(bind) = lookup("LABSITE_BIND") {
            self.server.bind = bind;
        }
        if let Some(port) = lookup("PORT") {
            let port: u16 = port.parse().map_err(|_| ConfigError::Env {
                var: "PORT",
                value: port.clone(),
            })?;
            let host = self
                .server
                .bind
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            self.server.bind = format!("{}:{}", host, port);
        }
        Ok(())
    }

    pub fn document_source(&self) -> DocumentSource {
        DocumentSource::parse(&self.data)
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            cache_bust: self.cache_bust,
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = SiteConfig::from_yaml("").unwrap();
        assert_eq!(config.data, "info.json");
        assert!(config.cache_bust);
        assert_eq!(config.populator.default_map_zoom, 16);
        assert_eq!(config.populator.role_groups.len(), 4);
        assert_eq!(config.populator.role_groups[0].label, "Faculty");
        assert_eq!(config.populator.publication_groups[0].label, "Preprints");
    }

    #[test]
    fn test_partial_yaml() {
        let config = SiteConfig::from_yaml(
            r#"
data: https://example.org/info.json
populator:
  team_layout: table
  publication_layout: grouped
  project_layout: grid
  news_ticker: false
"#,
        )
        .unwrap();
        assert_eq!(config.data, "https://example.org/info.json");
        assert_eq!(config.populator.team_layout, TeamLayout::Table);
        assert_eq!(config.populator.publication_layout, PublicationLayout::Grouped);
        assert_eq!(config.populator.project_layout, ProjectLayout::Grid);
        assert!(!config.populator.news_ticker);
        // Untouched fields keep their defaults
        assert_eq!(config.populator.role_groups.len(), 4);
        assert_eq!(config.server.bind, "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LABSITE_DATA", "https://lab.example/info.json"),
            ("PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config
            .apply_env(|var| vars.get(var).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.data, "https://lab.example/info.json");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(
            config.document_source(),
            DocumentSource::Url("https://lab.example/info.json".to_string())
        );
    }

    #[test]
    fn test_loader_options_follow_config() {
        let config = SiteConfig::from_yaml("cache_bust: false\nrequest_timeout_secs: 3\n").unwrap();
        let options = config.loader_options();
        assert!(!options.cache_bust);
        assert_eq!(options.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_port() {
        let mut config = SiteConfig::default();
        let err = config
            .apply_env(|var| (var == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
    }

    #[test]
    fn test_relative_paths_follow_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labsite.yaml");
        std::fs::write(&path, "data: data/info.json\nskeleton: site/index.html\n").unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.skeleton, dir.path().join("site/index.html"));
        assert_eq!(
            PathBuf::from(&config.data),
            dir.path().join("data/info.json")
        );
    }
}
