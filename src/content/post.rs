//! Post record and trusted markup types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format of post dates, e.g. "March 20, 2025"
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Markup written by site maintainers and injected into pages verbatim.
///
/// Nothing escapes or sanitizes this value on the way to the page. Inside the
/// crate only the content loaders wrap strings in it; other code gets one by
/// deserializing post files. Text that comes from visitors must never end up
/// in this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Wrap maintainer-authored markup
    pub(crate) fn authored(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A blog article. The slug is not part of the record; it is the key the
/// record is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Display-order identifier, not a lookup key
    pub id: u32,

    pub title: String,

    pub category: String,

    /// Display date, e.g. "March 20, 2025"
    pub date: String,

    /// Display read time, e.g. "8 min read"
    #[serde(alias = "read_time")]
    pub read_time: String,

    pub author: String,

    pub excerpt: String,

    /// Article body
    pub content: TrustedMarkup,
}

impl PostRecord {
    /// Parse the display date for ordering
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

/// Estimate a read time label from markup, at 200 words per minute
pub fn estimate_read_time(markup: &str) -> String {
    let words = crate::helpers::strip_html(markup).split_whitespace().count();
    let minutes = words.div_ceil(200).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PostRecord {
        PostRecord {
            id: 3,
            title: "Closing the Books Faster".to_string(),
            category: "Fund Accounting".to_string(),
            date: "March 5, 2025".to_string(),
            read_time: "6 min read".to_string(),
            author: "Operations Team".to_string(),
            excerpt: "A shorter close.".to_string(),
            content: TrustedMarkup::authored("<p>Body</p>"),
        }
    }

    #[test]
    fn test_published_on() {
        let post = sample();
        assert_eq!(
            post.published_on(),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn test_published_on_unparseable() {
        let mut post = sample();
        post.date = "Spring 2025".to_string();
        assert_eq!(post.published_on(), None);
    }

    #[test]
    fn test_parse_requires_every_field() {
        let yaml = r#"
id: 1
title: Missing author
category: Fund Administration
date: March 20, 2025
readTime: 5 min read
excerpt: Short
content: "<p>x</p>"
"#;
        let err = serde_yaml::from_str::<PostRecord>(yaml).unwrap_err();
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_parse_accepts_both_read_time_spellings() {
        let camel = "id: 1\ntitle: T\ncategory: C\ndate: D\nreadTime: 4 min read\nauthor: A\nexcerpt: E\ncontent: <p>x</p>\n";
        let snake = camel.replace("readTime", "read_time");
        let a: PostRecord = serde_yaml::from_str(camel).unwrap();
        let b: PostRecord = serde_yaml::from_str(&snake).unwrap();
        assert_eq!(a.read_time, "4 min read");
        assert_eq!(a, b);
    }

    #[test]
    fn test_estimate_read_time() {
        assert_eq!(estimate_read_time("<p>a few words</p>"), "1 min read");
        let long = "word ".repeat(401);
        assert_eq!(estimate_read_time(&long), "3 min read");
    }
}
