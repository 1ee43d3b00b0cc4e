//! Application state
//!
//! Arc-wrapped state shared across handlers. Nothing in it changes after
//! startup, so handlers read it without locking.

use anyhow::{bail, Result};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::templates::PageRenderer;
use crate::Site;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    content: ContentStore,
    renderer: PageRenderer,
    config: SiteConfig,
}

impl AppState {
    /// Load content and templates for a site
    pub fn load(site: &Site) -> Result<Self> {
        let content = site.load_content()?;
        Self::new(&site.config, content)
    }

    /// Build state around an already loaded store
    pub fn new(config: &SiteConfig, content: ContentStore) -> Result<Self> {
        match config.blog_segment() {
            "" => bail!("blog_dir must not be empty"),
            "assets" => bail!("blog_dir cannot be `assets`, that path serves static files"),
            _ => {}
        }
        let renderer = PageRenderer::new(config)?;
        Ok(Self {
            inner: Arc::new(InnerState {
                content,
                renderer,
                config: config.clone(),
            }),
        })
    }

    /// Get the content store.
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.inner.renderer
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }
}
