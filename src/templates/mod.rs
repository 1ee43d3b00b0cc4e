//! Page rendering with the embedded Tera templates
//!
//! Templates are compiled into the binary. Autoescaping stays on for every
//! template, so display fields are always escaped. Two kinds of values are
//! emitted with `| safe`: the post body, which is [`TrustedMarkup`], and URLs,
//! which are escaped for attribute context before they reach the template.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::chrome::{Chrome, NavLink};
use crate::config::SiteConfig;
use crate::content::{ContentStore, PostRecord, TrustedMarkup};
use crate::helpers::{blog_index_url, html_escape, post_url, url_for};

/// Renders blog pages wrapped in the site chrome
pub struct PageRenderer {
    tera: Tera,
    base: Context,
    config: SiteConfig,
}

impl PageRenderer {
    /// Create a renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("post.html", include_str!("site/post.html")),
            ("index.html", include_str!("site/index.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        let mut base = Context::new();
        base.insert("site", &SiteData::new(config));
        base.insert("chrome", &resolve_chrome(config));

        Ok(Self {
            tera,
            base,
            config: config.clone(),
        })
    }

    /// Render the page of a resolved post
    pub fn render_post(&self, slug: &str, post: &PostRecord) -> Result<String> {
        let mut context = self.base.clone();
        context.insert("post", &PostData::new(&self.config, slug, post));
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the blog index of a store, newest posts first
    pub fn render_index(&self, store: &ContentStore) -> Result<String> {
        let posts: Vec<PostData> = store
            .index()
            .into_iter()
            .map(|(slug, post)| PostData::new(&self.config, slug, post))
            .collect();
        let categories: Vec<CategoryData> = store
            .categories()
            .into_iter()
            .map(|(name, count)| CategoryData { name, count })
            .collect();

        let mut context = self.base.clone();
        context.insert("posts", &posts);
        context.insert("categories", &categories);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render the not-found page for a request path
    pub fn render_not_found(&self, path: &str) -> Result<String> {
        let mut context = self.base.clone();
        context.insert("path", path);
        Ok(self.tera.render("not_found.html", &context)?)
    }
}

/// Site-wide values, URLs escaped for attributes
#[derive(Debug, Clone, Serialize)]
struct SiteData {
    title: String,
    home_url: String,
    blog_url: String,
    assets_url: String,
}

impl SiteData {
    fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            home_url: attr_url(config, "/"),
            blog_url: html_escape(&blog_index_url(config)),
            assets_url: attr_url(config, "/assets/"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PostData<'a> {
    slug: &'a str,
    url: String,
    title: &'a str,
    category: &'a str,
    date: &'a str,
    read_time: &'a str,
    author: &'a str,
    excerpt: &'a str,
    content: &'a TrustedMarkup,
}

impl<'a> PostData<'a> {
    fn new(config: &SiteConfig, slug: &'a str, post: &'a PostRecord) -> Self {
        Self {
            slug,
            url: html_escape(&post_url(config, slug)),
            title: &post.title,
            category: &post.category,
            date: &post.date,
            read_time: &post.read_time,
            author: &post.author,
            excerpt: &post.excerpt,
            content: &post.content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct CategoryData<'a> {
    name: &'a str,
    count: usize,
}

fn attr_url(config: &SiteConfig, path: &str) -> String {
    html_escape(&url_for(config, path))
}

/// Chrome with hrefs rooted and escaped for attributes
fn resolve_chrome(config: &SiteConfig) -> Chrome {
    let resolve = |link: &NavLink| NavLink {
        label: link.label.clone(),
        href: attr_url(config, &link.href),
    };

    let mut chrome = config.chrome.clone();
    for menu in &mut chrome.nav {
        menu.items = menu.items.iter().map(resolve).collect();
    }
    for group in &mut chrome.footer {
        group.links = group.links.iter().map(resolve).collect();
    }
    chrome.cta = resolve(&chrome.cta);
    chrome
}
