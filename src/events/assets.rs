use std::path::PathBuf;

/// Capability to check whether a root-relative path exists in the served
/// static assets. The classifier only uses it for image fallback.
pub trait AssetStore: Send + Sync {
    fn exists(&self, path: &str) -> bool;
}

/// Asset store backed by the public directory on disk.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for FsAssetStore {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path.trim_start_matches('/')).is_file()
    }
}

/// No-check store: trusts every path. Used where the public directory is
/// not available (the CLI tool, some tests), accepting a broader fallback.
pub struct AssumePresent;

impl AssetStore for AssumePresent {
    fn exists(&self, _path: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_store_checks_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("hero.webp"), b"x").unwrap();

        let store = FsAssetStore::new(dir.path());
        assert!(store.exists("/images/hero.webp"));
        assert!(!store.exists("/images/missing.webp"));
        assert!(!store.exists("/images"));
    }
}
