// src/config/model.rs

use serde::Deserialize;

/// Top-level settings as read from a TOML file.
///
/// ```toml
/// [layout]
/// nodesep = 50.0
/// ranksep = 100.0
/// node_width = 240.0
/// node_height = 120.0
///
/// [generate]
/// model = "gemini-3-flash-preview"
/// ```
///
/// All sections are optional and have reasonable defaults; a missing file
/// simply yields `ConfigFile::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Node spacing and sizing from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,

    /// Curriculum generation settings from `[generate]`.
    #[serde(default)]
    pub generate: GenerateSection,
}

/// `[layout]` section.
///
/// Values are in the same abstract units as node coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// Horizontal gap between neighbouring nodes in the same tier.
    #[serde(default = "default_nodesep")]
    pub nodesep: f64,

    /// Vertical gap between consecutive tiers.
    #[serde(default = "default_ranksep")]
    pub ranksep: f64,

    /// Width of a course node box.
    #[serde(default = "default_node_width")]
    pub node_width: f64,

    /// Height of a course node box.
    #[serde(default = "default_node_height")]
    pub node_height: f64,
}

fn default_nodesep() -> f64 {
    50.0
}

fn default_ranksep() -> f64 {
    100.0
}

fn default_node_width() -> f64 {
    240.0
}

fn default_node_height() -> f64 {
    120.0
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            nodesep: default_nodesep(),
            ranksep: default_ranksep(),
            node_width: default_node_width(),
            node_height: default_node_height(),
        }
    }
}

/// `[generate]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
    /// Model identifier passed to the generation endpoint.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API.
    ///
    /// Overriding this is mainly useful for tests and self-hosted proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}
