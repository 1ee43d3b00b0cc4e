//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'\'')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/site/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of the blog index
pub fn blog_index_url(config: &SiteConfig) -> String {
    url_for(config, &format!("{}/", config.blog_segment()))
}

/// URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_segment(), encode_segment(slug)),
    )
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/assets/site.css"), "/site/assets/site.css");
        assert_eq!(url_for(&config, "demo"), "/site/demo");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(
            url_for(&config, "https://status.example.com"),
            "https://status.example.com"
        );
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/"),
            "https://example.com/site/blog/"
        );
    }

    #[test]
    fn test_post_url() {
        let config = SiteConfig::default();
        assert_eq!(
            post_url(&config, "capital-call-best-practices"),
            "/blog/capital-call-best-practices"
        );
        assert_eq!(post_url(&config, "a b/c?"), "/blog/a%20b%2Fc%3F");
        assert_eq!(blog_index_url(&config), "/blog/");
    }
}
