//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = site.load_content()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", store.len());
            for (slug, post) in store.index() {
                println!(
                    "  {:>3}  {:<18} {} [{}]",
                    post.id, post.date, post.title, slug
                );
            }
        }
        "category" | "categories" => {
            let mut categories: Vec<_> = store.categories().into_iter().collect();
            println!("Categories ({}):", categories.len());
            categories.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_type() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site, "tag").is_err());
        assert!(run(&site, "post").is_ok());
        assert!(run(&site, "categories").is_ok());
    }
}
