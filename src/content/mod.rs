//! Content module - post records, the content store and its loaders

mod builtin;
pub mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod store;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{estimate_read_time, PostRecord, TrustedMarkup, DATE_FORMAT};
pub use store::{check_slug, ContentStore, ContentStoreBuilder};
