//! Icon families
//!
//! An [`IconSet`] is a root directory plus the list of assets to produce
//! under it.

use brandkit_core::ImageFormat;
use std::path::{Component, Path, PathBuf};

/// File name of the full-size master icon in the standard family.
pub const MASTER_ICON: &str = "app_icon.png";

/// Lexically normalize `path`: drop `.` components and fold `name/..`.
///
/// The filesystem is not consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// One output asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl IconTarget {
    pub fn new<P: Into<PathBuf>>(path: P, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Output format, from the file extension (PNG when unknown)
    pub fn format(&self) -> ImageFormat {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Png)
    }
}

/// A family of icons rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    root: PathBuf,
    targets: Vec<IconTarget>,
}

impl IconSet {
    /// An empty set under `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            targets: Vec::new(),
        }
    }

    /// The standard web/PWA family: a 1024 master, manifest icons at
    /// 1024, 512 and 192, and a 180 apple-touch icon.
    pub fn standard<P: Into<PathBuf>>(root: P) -> Self {
        Self::new(root)
            .with_target(MASTER_ICON, 1024, 1024)
            .with_target("icons/icon-1024.png", 1024, 1024)
            .with_target("icons/icon-512.png", 512, 512)
            .with_target("icons/icon-192.png", 192, 192)
            .with_target("apple-touch-icon.png", 180, 180)
    }

    /// Add a target at `relative` under the root
    pub fn with_target<P: AsRef<Path>>(mut self, relative: P, width: u32, height: u32) -> Self {
        let path = self.root.join(relative);
        self.targets.push(IconTarget::new(path, width, height));
        self
    }

    /// Add a 64x64 `favicon.png`
    pub fn with_favicon(self) -> Self {
        self.with_target("favicon.png", 64, 64)
    }

    /// Drop every target written to `path`
    ///
    /// Paths are compared after [`normalize_path`], so `./a.png` and
    /// `b/../a.png` both name `a.png`.
    pub fn without<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = normalize_path(path.as_ref());
        self.targets.retain(|t| normalize_path(&t.path) != path);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn targets(&self) -> &[IconTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconTarget> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_family() {
        let set = IconSet::standard("public");
        let sizes: Vec<_> = set.iter().map(|t| (t.width, t.height)).collect();
        assert_eq!(
            sizes,
            vec![(1024, 1024), (1024, 1024), (512, 512), (192, 192), (180, 180)]
        );
        assert_eq!(set.targets()[0].path, Path::new("public").join(MASTER_ICON));
        assert_eq!(
            set.targets()[2].path,
            Path::new("public").join("icons/icon-512.png")
        );
    }

    #[test]
    fn test_favicon_and_without() {
        let set = IconSet::standard("out").with_favicon();
        assert_eq!(set.len(), 6);
        let last = &set.targets()[5];
        assert_eq!((last.width, last.height), (64, 64));

        let set = set.without(Path::new("out").join(MASTER_ICON));
        assert_eq!(set.len(), 5);
        assert!(IconSet::new("x").is_empty());
    }

    #[test]
    fn test_without_normalizes() {
        let set = IconSet::standard("public");
        assert_eq!(set.clone().without("./public/app_icon.png").len(), 4);
        assert_eq!(set.clone().without("public/icons/../app_icon.png").len(), 4);
        assert_eq!(set.without("icons/app_icon.png").len(), 5);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./a/./b.png")), Path::new("a/b.png"));
        assert_eq!(normalize_path(Path::new("a/c/../b.png")), Path::new("a/b.png"));
        assert_eq!(normalize_path(Path::new("../a.png")), Path::new("../a.png"));
        assert_eq!(normalize_path(Path::new("/../a.png")), Path::new("/a.png"));
    }

    #[test]
    fn test_target_format() {
        assert_eq!(IconTarget::new("a/b.png", 1, 1).format(), ImageFormat::Png);
        assert_eq!(IconTarget::new("a/b.JPG", 1, 1).format(), ImageFormat::Jpeg);
        assert_eq!(IconTarget::new("a/b", 1, 1).format(), ImageFormat::Png);
    }
}
