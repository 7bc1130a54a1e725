use crate::{AdjacencyRule, EdgeStyle, LoopStyle, VertexStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming an editor config file
pub const CONFIG_ENV_VAR: &str = "GRAPH_EDITOR_CONFIG";

/// Editor settings, loaded from JSON. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub window_size: [f32; 2],
    pub adjacency_rule: AdjacencyRule,
    pub vertex: VertexStyle,
    pub loops: LoopStyle,
    pub edge: EdgeStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_size: [1024.0, 768.0],
            adjacency_rule: AdjacencyRule::default(),
            vertex: VertexStyle::default(),
            loops: LoopStyle::default(),
            edge: EdgeStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        log::info!("loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load a config file if a path is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load the file named by `GRAPH_EDITOR_CONFIG`, if set
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        Self::load_or_default(path.as_deref().map(Path::new))
    }
}
