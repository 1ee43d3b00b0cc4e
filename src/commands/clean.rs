//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the exported site
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_after_build() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        site.build().unwrap();
        assert!(site.public_dir.exists());

        site.clean().unwrap();
        assert!(!site.public_dir.exists());
        // Cleaning twice is fine
        site.clean().unwrap();
    }
}
