use crate::error::ConfigError;
use crate::literal::{BraceScan, LiteralOptions, DEFAULT_LITERAL_FILTER};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Vocabulary that drives classification and literal filtering.
///
/// Loaded from YAML; every field is optional and falls back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Terms marking a message as scene-related (any role).
    #[serde(default = "default_scene_terms")]
    pub scene: Vec<String>,
    /// Terms marking an assistant message as carrying specifications.
    #[serde(default = "default_spec_terms")]
    pub spec: Vec<String>,
    #[serde(default = "default_literal_filter")]
    pub literal_filter: String,
    #[serde(default)]
    pub brace_scan: BraceScan,
}

fn default_scene_terms() -> Vec<String> {
    [
        "scene",
        "godot",
        "dungeon",
        "crt",
        "terminal",
        "typewriter",
        "dreamweaver",
        "opening",
        "narrative",
        "choice",
        "echo labyrinth",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_spec_terms() -> Vec<String> {
    [
        "scene",
        "godot",
        "dungeon",
        "crt",
        "terminal",
        "typewriter",
        "dreamweaver",
        "json",
        "gdscript",
        "code",
        "specification",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_literal_filter() -> String {
    DEFAULT_LITERAL_FILTER.to_string()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            scene: default_scene_terms(),
            spec: default_spec_terms(),
            literal_filter: default_literal_filter(),
            brace_scan: BraceScan::default(),
        }
    }
}

impl KeywordConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    /// Lowercase every term and drop empty ones; an empty term would match
    /// every message.
    pub fn normalized(mut self) -> Self {
        for terms in [&mut self.scene, &mut self.spec] {
            *terms = terms
                .iter()
                .map(|t| t.to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        }
        self.literal_filter = self.literal_filter.to_lowercase();
        self
    }

    pub fn literal_options(&self) -> LiteralOptions {
        LiteralOptions {
            filter: self.literal_filter.clone(),
            scan: self.brace_scan,
        }
    }
}

/// Read a keyword configuration file.
pub fn load_config(path: &Path) -> Result<KeywordConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = KeywordConfig::from_yaml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        scene_terms = config.scene.len(),
        spec_terms = config.spec.len(),
        "keyword config loaded"
    );
    Ok(config)
}
