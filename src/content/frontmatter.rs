//! Front-matter parsing for posts kept on disk

use serde::{Deserialize, Serialize};

/// Post metadata from the YAML block at the top of a content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    /// Defaults to the file stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub id: u32,
    pub title: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub excerpt: String,
    /// Estimated from the body when absent
    #[serde(
        default,
        alias = "read_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_time: Option<String>,
}

/// Split a content file into its YAML block and body.
///
/// Returns `None` when the file does not open with a `---` fence or the
/// fence is never closed.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();
    let rest = content.strip_prefix("---")?;
    let rest = rest.trim_start_matches([' ', '\t']);
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    // The closing fence may be the very first line of an empty block
    if let Some(body) = rest.strip_prefix("---") {
        return Some(("", body.trim_start_matches(['\n', '\r'])));
    }

    let end_pos = rest.find("\n---")?;
    let yaml = &rest[..end_pos];
    let body = &rest[end_pos + 4..];
    // Drop the remainder of the fence line
    let body = match body.find('\n') {
        Some(nl) if body[..nl].trim().is_empty() => &body[nl + 1..],
        Some(_) => return None,
        None if body.trim().is_empty() => "",
        None => return None,
    };

    Some((yaml, body))
}

/// Parse the front matter block of a file.
pub fn parse(content: &str) -> Option<(Result<FrontMatter, serde_yaml::Error>, &str)> {
    let (yaml, body) = split(content)?;
    Some((serde_yaml::from_str(yaml), body))
}

/// Render front matter and a body back into file form
pub fn to_file(front_matter: &FrontMatter, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(front_matter)?;
    Ok(format!("---\n{}---\n\n{}", yaml, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"---
id: 12
title: "NAV Calculation: A Primer"
category: Fund Accounting
date: April 2, 2025
author: Fund Accounting Team
excerpt: How net asset value comes together.
---

Body **here**.
"#;

    #[test]
    fn test_parse_front_matter() {
        let (fm, body) = parse(FILE).unwrap();
        let fm = fm.unwrap();
        assert_eq!(fm.id, 12);
        assert_eq!(fm.title, "NAV Calculation: A Primer");
        assert_eq!(fm.slug, None);
        assert_eq!(fm.read_time, None);
        assert_eq!(body.trim(), "Body **here**.");
    }

    #[test]
    fn test_parse_read_time_and_slug() {
        let file = FILE.replace("id: 12", "id: 12\nslug: nav-primer\nread_time: 3 min read");
        let (fm, _) = parse(&file).unwrap();
        let fm = fm.unwrap();
        assert_eq!(fm.slug.as_deref(), Some("nav-primer"));
        assert_eq!(fm.read_time.as_deref(), Some("3 min read"));
    }

    #[test]
    fn test_no_front_matter() {
        assert!(parse("Just a body").is_none());
        assert!(parse("---\ntitle: never closed\n").is_none());
    }

    #[test]
    fn test_missing_field() {
        let file = FILE.replace("author: Fund Accounting Team\n", "");
        let (fm, _) = parse(&file).unwrap();
        assert!(fm.is_err());
    }

    #[test]
    fn test_to_file_parses_back() {
        let (fm, _) = parse(FILE).unwrap();
        let fm = fm.unwrap();
        let file = to_file(&fm, "Hello\n").unwrap();
        let (again, body) = parse(&file).unwrap();
        assert_eq!(again.unwrap(), fm);
        assert_eq!(body.trim(), "Hello");
    }
}
