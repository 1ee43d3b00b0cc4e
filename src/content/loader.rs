//! Content loader - builds the content store at startup

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{
    builtin, check_slug, frontmatter, ContentStore, MarkdownRenderer, PostRecord, TrustedMarkup,
};
use crate::error::ContentError;
use crate::Site;

/// Loads the built-in posts and any posts from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Build the store. Posts from the content directory are added after the
    /// built-in ones and replace them on a slug clash.
    pub fn load(&self) -> Result<ContentStore> {
        let mut builder = ContentStore::builder();

        let builtin = builtin::posts()?;
        tracing::debug!("Loaded {} built-in posts", builtin.len());
        builder.extend(builtin);

        let on_disk = self.load_dir(&self.site.content_dir)?;
        if !on_disk.is_empty() {
            tracing::debug!(
                "Loaded {} posts from {:?}",
                on_disk.len(),
                self.site.content_dir
            );
        }
        builder.extend(on_disk);

        Ok(builder.build())
    }

    /// Load every `.md` and `.html` post below `dir`, in path order
    pub fn load_dir(&self, dir: &Path) -> Result<Vec<(String, PostRecord)>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || post_format(path).is_none() {
                continue;
            }
            match self.load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }

    /// Load a single post file
    pub fn load_post(&self, path: &Path) -> Result<(String, PostRecord), ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) =
            frontmatter::parse(&raw).ok_or_else(|| ContentError::MissingFrontMatter {
                path: path.to_path_buf(),
            })?;
        let fm = fm.map_err(|source| ContentError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

        let markup = match post_format(path) {
            Some(PostFormat::Markdown) => self.renderer.render(body),
            _ => body.to_string(),
        };

        let slug = fm.slug.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled")
                .to_string()
        });
        check_slug(&slug)?;

        let read_time = fm
            .read_time
            .unwrap_or_else(|| super::estimate_read_time(&markup));

        let post = PostRecord {
            id: fm.id,
            title: fm.title,
            category: fm.category,
            date: fm.date,
            read_time,
            author: fm.author,
            excerpt: fm.excerpt,
            content: TrustedMarkup::authored(markup),
        };

        Ok((slug, post))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostFormat {
    Markdown,
    Html,
}

fn post_format(path: &Path) -> Option<PostFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => Some(PostFormat::Markdown),
        Some("html") | Some("htm") => Some(PostFormat::Html),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "---\nid: 40\ntitle: Side Letters at Scale\ncategory: Compliance\ndate: April 9, 2025\nauthor: Legal Ops\nexcerpt: Tracking MFN terms.\n";

    fn site_in(dir: &TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    #[test]
    fn test_load_builtin_only() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let store = ContentLoader::new(&site).load().unwrap();
        assert!(store.contains("fund-administration-automation-reduces-costs"));
    }

    #[test]
    fn test_load_markdown_post() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(
            site.content_dir.join("side-letters.md"),
            format!("{}---\n\n## Why MFN matters\n\nBody text.\n", HEADER),
        )
        .unwrap();

        let store = ContentLoader::new(&site).load().unwrap();
        let post = store.resolve("side-letters").unwrap();
        assert_eq!(post.title, "Side Letters at Scale");
        assert_eq!(post.read_time, "1 min read");
        assert!(post.content.as_str().contains("<h2>Why MFN matters</h2>"));
    }

    #[test]
    fn test_load_html_post_verbatim() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(
            site.content_dir.join("raw.html"),
            format!(
                "{}slug: raw-post\nreadTime: 2 min read\n---\n<section class=\"cta-box\">*not markdown*</section>\n",
                HEADER
            ),
        )
        .unwrap();

        let store = ContentLoader::new(&site).load().unwrap();
        let post = store.resolve("raw-post").unwrap();
        assert_eq!(post.read_time, "2 min read");
        assert_eq!(
            post.content.as_str(),
            "<section class=\"cta-box\">*not markdown*</section>\n"
        );
    }

    #[test]
    fn test_disk_post_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(
            site.content_dir.join("capital-call-best-practices.md"),
            format!("{}---\nUpdated.\n", HEADER),
        )
        .unwrap();

        let store = ContentLoader::new(&site).load().unwrap();
        let post = store.resolve("capital-call-best-practices").unwrap();
        assert_eq!(post.title, "Side Letters at Scale");
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(site.content_dir.join("no-header.md"), "Just text\n").unwrap();
        fs::write(
            site.content_dir.join("missing-title.md"),
            "---\nid: 1\n---\nBody\n",
        )
        .unwrap();
        fs::write(
            site.content_dir.join("good.md"),
            format!("{}---\nBody\n", HEADER),
        )
        .unwrap();
        fs::write(site.content_dir.join("notes.txt"), "ignored").unwrap();

        let loader = ContentLoader::new(&site);
        let posts = loader.load_dir(&site.content_dir).unwrap();
        let slugs: Vec<_> = posts.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);
    }

    #[test]
    fn test_unsafe_slug_is_skipped() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        fs::create_dir_all(&site.content_dir).unwrap();
        for (file, slug) in [("empty.md", "''"), ("nested.md", "a/b"), ("escape.md", "../x")] {
            fs::write(
                site.content_dir.join(file),
                format!("{}slug: {}\n---\nBody\n", HEADER, slug),
            )
            .unwrap();
        }
        fs::write(
            site.content_dir.join("good.md"),
            format!("{}---\nBody\n", HEADER),
        )
        .unwrap();

        let loader = ContentLoader::new(&site);
        let posts = loader.load_dir(&site.content_dir).unwrap();
        let slugs: Vec<_> = posts.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);

        assert!(matches!(
            loader.load_post(&site.content_dir.join("escape.md")),
            Err(ContentError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_load_post_errors() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let loader = ContentLoader::new(&site);

        let missing = dir.path().join("missing.md");
        assert!(matches!(
            loader.load_post(&missing),
            Err(ContentError::Read { .. })
        ));

        let plain = dir.path().join("plain.md");
        fs::write(&plain, "no header").unwrap();
        assert!(matches!(
            loader.load_post(&plain),
            Err(ContentError::MissingFrontMatter { .. })
        ));
    }
}
