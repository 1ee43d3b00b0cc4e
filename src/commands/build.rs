//! Export the site as static files

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{check_slug, ContentStore};
use crate::helpers::{full_url_for, post_url, squash_whitespace, strip_html, truncate};
use crate::templates::PageRenderer;
use crate::Site;

/// Maximum characters of post text kept per search entry
const SEARCH_TEXT_LEN: usize = 2000;

/// Export every page of the site to the public directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let store = site.load_content()?;
    tracing::info!("Loaded {} posts", store.len());

    let written = export(site, &store)?;

    let duration = start.elapsed();
    tracing::info!("Wrote {} files in {:.2}s", written, duration.as_secs_f64());
    Ok(())
}

/// Write pages for `store` below the public directory, returning the file count
pub fn export(site: &Site, store: &ContentStore) -> Result<usize> {
    let renderer = PageRenderer::new(&site.config)?;
    let blog_dir = site.public_dir.join(site.config.blog_segment());
    fs::create_dir_all(&blog_dir)?;

    let store = &exportable(store);
    let mut written = 0;

    fs::write(blog_dir.join("index.html"), renderer.render_index(store)?)?;
    written += 1;

    for (slug, post) in store.index() {
        let dir = blog_dir.join(slug);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.html"), renderer.render_post(slug, post)?)?;
        tracing::debug!("Generated {:?}", dir);
        written += 1;
    }

    let not_found_path = format!("/{}/404", site.config.blog_segment());
    fs::write(
        site.public_dir.join("404.html"),
        renderer.render_not_found(&not_found_path)?,
    )?;
    written += 1;

    write_search_index(site, store)?;
    written += 1;

    written += copy_assets(&site.assets_dir, &site.public_dir.join("assets"))?;

    Ok(written)
}

/// Posts whose slug can become a directory below the blog folder
fn exportable(store: &ContentStore) -> ContentStore {
    let mut builder = ContentStore::builder();
    for (slug, post) in store.iter() {
        match check_slug(slug) {
            Ok(()) => {
                builder.insert(slug, post.clone());
            }
            Err(e) => tracing::warn!("Skipping post {:?}: {}", post.title, e),
        }
    }
    builder.build()
}

/// Write search.json with the plain text of every post
fn write_search_index(site: &Site, store: &ContentStore) -> Result<()> {
    let search_data: Vec<serde_json::Value> = store
        .index()
        .into_iter()
        .map(|(slug, post)| {
            let text = squash_whitespace(&strip_html(post.content.as_str()));
            let url = post_url(&site.config, slug);
            serde_json::json!({
                "title": post.title,
                "permalink": full_url_for(&site.config, &url),
                "url": url,
                "category": post.category,
                "date": post.date,
                "content": truncate(&text, SEARCH_TEXT_LEN, None),
            })
        })
        .collect();

    let output_path = site.public_dir.join("search.json");
    let json = serde_json::to_string_pretty(&search_data)?;
    fs::write(&output_path, json)?;
    tracing::info!("Generated search.json");

    Ok(())
}

/// Copy static assets into the export
fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    if !from.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let dest = to.join(path.strip_prefix(from)?);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
        copied += 1;
    }

    Ok(copied)
}
