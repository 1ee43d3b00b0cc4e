//! Lint post content before it ships
//!
//! Post bodies are injected into pages as-is, so a markup mistake in a post
//! reaches visitors unchanged. This check catches unbalanced tags, empty
//! display fields and reused ids. Rendering never depends on it.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::content::{ContentStore, PostRecord};
use crate::Site;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref TAG: Regex =
        Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)(?:\s[^>]*?)?(/?)>"#).unwrap();
}

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A markup defect in a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupIssue {
    /// Opened and never closed
    Unclosed(String),
    /// Closed without being open
    Unexpected(String),
    /// Closed while another element was still open
    Mismatched { open: String, close: String },
}

impl fmt::Display for MarkupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupIssue::Unclosed(tag) => write!(f, "<{}> is never closed", tag),
            MarkupIssue::Unexpected(tag) => write!(f, "</{}> has no matching open tag", tag),
            MarkupIssue::Mismatched { open, close } => {
                write!(f, "</{}> closes <{}>", close, open)
            }
        }
    }
}

/// Find unbalanced tags in a markup string
pub fn markup_issues(markup: &str) -> Vec<MarkupIssue> {
    let markup = COMMENT.replace_all(markup, "");
    let mut open: Vec<String> = Vec::new();
    let mut issues = Vec::new();

    for caps in TAG.captures_iter(&markup) {
        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();
        let name = caps[2].to_ascii_lowercase();

        if VOID_ELEMENTS.contains(&name.as_str()) || self_closing {
            continue;
        }

        if !closing {
            open.push(name);
            continue;
        }

        match open.iter().rposition(|tag| *tag == name) {
            Some(pos) => {
                // Everything opened after the match was left unclosed
                for inner in open.drain(pos + 1..) {
                    issues.push(MarkupIssue::Mismatched {
                        open: inner,
                        close: name.clone(),
                    });
                }
                open.pop();
            }
            None => issues.push(MarkupIssue::Unexpected(name)),
        }
    }

    issues.extend(open.into_iter().map(MarkupIssue::Unclosed));
    issues
}

/// Problems found in one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProblem {
    pub slug: String,
    pub message: String,
}

/// Check every post in the store
pub fn check_store(store: &ContentStore) -> Vec<PostProblem> {
    let mut problems = Vec::new();
    let mut ids: BTreeMap<u32, Vec<&str>> = BTreeMap::new();

    for (slug, post) in store.iter() {
        ids.entry(post.id).or_default().push(slug);

        for field in empty_fields(post) {
            problems.push(PostProblem {
                slug: slug.to_string(),
                message: format!("{} is empty", field),
            });
        }

        for issue in markup_issues(post.content.as_str()) {
            problems.push(PostProblem {
                slug: slug.to_string(),
                message: issue.to_string(),
            });
        }
    }

    for (id, slugs) in ids {
        if slugs.len() > 1 {
            for slug in &slugs {
                problems.push(PostProblem {
                    slug: slug.to_string(),
                    message: format!("id {} is shared by {}", id, slugs.join(", ")),
                });
            }
        }
    }

    problems
}

fn empty_fields(post: &PostRecord) -> Vec<&'static str> {
    let fields = [
        ("title", post.title.as_str()),
        ("category", post.category.as_str()),
        ("date", post.date.as_str()),
        ("readTime", post.read_time.as_str()),
        ("author", post.author.as_str()),
        ("excerpt", post.excerpt.as_str()),
        ("content", post.content.as_str()),
    ];
    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Run the check command
pub fn run(site: &Site) -> Result<()> {
    let store = site.load_content()?;
    let problems = check_store(&store);

    if problems.is_empty() {
        println!("Checked {} posts, no problems found.", store.len());
        return Ok(());
    }

    for problem in &problems {
        println!("  {}: {}", problem.slug, problem.message);
    }
    anyhow::bail!(
        "{} problems found in {} posts",
        problems.len(),
        store.len()
    );
}
