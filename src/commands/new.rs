//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{frontmatter, FrontMatter};
use crate::Site;

/// Options for a new post
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub author: &'a str,
    /// Overrides the slug derived from the title
    pub slug: Option<&'a str>,
}

/// Scaffold a markdown post in the content directory
pub fn create_post(site: &Site, options: &NewPost) -> Result<PathBuf> {
    let slug = match options.slug {
        Some(slug) => slug.to_string(),
        None => slug::slugify(options.title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", options.title);
    }

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let store = site.load_content()?;
    if store.contains(&slug) {
        tracing::warn!("Slug {:?} already exists and will be replaced", slug);
    }
    let id = store.iter().map(|(_, post)| post.id).max().unwrap_or(0) + 1;

    let front_matter = FrontMatter {
        slug: None,
        id,
        title: options.title.to_string(),
        category: options.category.to_string(),
        date: chrono::Local::now().format("%B %-d, %Y").to_string(),
        author: options.author.to_string(),
        excerpt: String::new(),
        read_time: None,
    };

    let body = format!("Write the introduction to \"{}\" here.\n", options.title);
    fs::write(&file_path, frontmatter::to_file(&front_matter, &body)?)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}
