//! fundsite: blog and content server for the fund administration marketing site
//!
//! Posts are compiled into the binary (plus an optional directory of extra
//! posts), resolved by slug and rendered into HTML pages wrapped in the shared
//! site chrome. The same pages can be served over HTTP or exported to disk.

pub mod chrome;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The site: configuration and resolved directories
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory of extra posts
    pub content_dir: std::path::PathBuf,
    /// Export (output) directory
    pub public_dir: std::path::PathBuf,
    /// Static assets directory
    pub assets_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let assets_dir = base_dir.join(&config.assets_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            assets_dir,
        }
    }

    /// Load the content store. Called once at startup.
    pub fn load_content(&self) -> Result<content::ContentStore> {
        content::loader::ContentLoader::new(self).load()
    }

    /// Export the site to the public directory
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
