//! Posts compiled into the binary

use serde::Deserialize;

use super::{check_slug, PostRecord};
use crate::error::ContentError;

const BUILTIN_POSTS: &str = include_str!("../../content/posts.yml");

#[derive(Deserialize)]
struct BuiltinEntry {
    slug: String,
    #[serde(flatten)]
    post: PostRecord,
}

/// Parse the compiled-in posts, in definition order
pub fn posts() -> Result<Vec<(String, PostRecord)>, ContentError> {
    parse(BUILTIN_POSTS)
}

fn parse(source: &str) -> Result<Vec<(String, PostRecord)>, ContentError> {
    let entries: Vec<BuiltinEntry> =
        serde_yaml::from_str(source).map_err(ContentError::Builtin)?;
    entries
        .into_iter()
        .map(|e| {
            check_slug(&e.slug)?;
            Ok((e.slug, e.post))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_builtin_posts_parse() {
        let posts = posts().unwrap();
        assert!(!posts.is_empty());
        for (slug, post) in &posts {
            assert!(!slug.is_empty());
            assert!(!post.title.is_empty(), "{} has no title", slug);
            assert!(!post.content.is_empty(), "{} has no content", slug);
            assert!(post.published_on().is_some(), "{} has a bad date", slug);
        }
    }

    #[test]
    fn test_cost_reduction_post() {
        let mut builder = ContentStore::builder();
        builder.extend(posts().unwrap());
        let store = builder.build();

        let post = store
            .resolve("fund-administration-automation-reduces-costs")
            .unwrap();
        assert_eq!(
            post.title,
            "How Fund Administration Automation Reduces Costs by 60% in Private Markets"
        );
        assert_eq!(post.category, "Fund Administration");
        assert_eq!(post.date, "March 20, 2025");
    }

    #[test]
    fn test_duplicate_slug_keeps_last() {
        let source = r#"
- slug: dup
  id: 1
  title: First
  category: C
  date: March 1, 2025
  readTime: 1 min read
  author: A
  excerpt: E
  content: <p>first</p>
- slug: dup
  id: 2
  title: Second
  category: C
  date: March 2, 2025
  readTime: 1 min read
  author: A
  excerpt: E
  content: <p>second</p>
"#;
        let mut builder = ContentStore::builder();
        builder.extend(parse(source).unwrap());
        let store = builder.build();
        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve("dup").unwrap().title, "Second");
    }

    #[test]
    fn test_nested_slug_is_an_error() {
        let source = "- slug: guides/waterfall\n  id: 1\n  title: T\n  category: C\n  date: March 1, 2025\n  readTime: 1 min read\n  author: A\n  excerpt: E\n  content: <p>x</p>\n";
        assert!(matches!(
            parse(source),
            Err(ContentError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let source = "- slug: broken\n  id: 1\n  title: T\n";
        assert!(matches!(parse(source), Err(ContentError::Builtin(_))));
    }
}
