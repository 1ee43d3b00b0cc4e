//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chrome::Chrome;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub root: String,

    // Routing
    /// URL segment the blog lives under
    pub blog_dir: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Static files served under `/assets`
    pub assets_dir: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Header and footer shared by every page
    #[serde(default)]
    pub chrome: Chrome,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Fundsite".to_string(),
            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            blog_dir: "blog".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            assets_dir: "assets".to_string(),

            server: ServerConfig::default(),

            chrome: Chrome::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("invalid config {:?}", path))?;
        Ok(config)
    }

    /// Blog segment without surrounding slashes
    pub fn blog_segment(&self) -> &str {
        self.blog_dir.trim_matches('/')
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
