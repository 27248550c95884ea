//! On-disk asset catalog fixtures.

use iconcheck_lint::{CATALOG_DIR_NAME, MANIFEST_FILE_NAME};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Leading bytes of every PNG file; enough for files that are never decoded.
pub const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// A temporary project directory holding an `Assets.xcassets` catalog.
///
/// Everything is removed when the fixture is dropped.
pub struct CatalogFixture {
    project: TempDir,
    root: PathBuf,
}

impl CatalogFixture {
    /// Creates an empty catalog directory.
    pub fn new() -> Self {
        let fixture = Self::missing();
        fs::create_dir_all(&fixture.root).expect("Failed to create catalog root");
        fixture
    }

    /// Creates the project directory but not the catalog inside it.
    pub fn missing() -> Self {
        let project = TempDir::new().expect("Failed to create project dir");
        let root = project.path().join(CATALOG_DIR_NAME);
        Self { project, root }
    }

    /// Project directory containing the catalog.
    pub fn project_dir(&self) -> &Path {
        self.project.path()
    }

    /// Catalog root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates (or reopens) an icon set at `rel`, relative to the catalog root.
    pub fn icon_set(&self, rel: &str) -> IconSetFixture {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).expect("Failed to create icon set");
        IconSetFixture { path }
    }

    /// Creates a directory that is not an icon set (e.g. a color set).
    pub fn other_dir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}

impl Default for CatalogFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the contents of one icon set directory.
pub struct IconSetFixture {
    path: PathBuf,
}

impl IconSetFixture {
    /// Path of the icon set directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an Xcode-style manifest referencing `filenames`, plus one
    /// unpopulated slot.
    pub fn manifest(self, filenames: &[&str]) -> Self {
        let mut images: Vec<Value> = filenames
            .iter()
            .map(|name| {
                json!({
                    "filename": name,
                    "idiom": "universal",
                    "platform": "ios",
                    "size": "1024x1024"
                })
            })
            .collect();
        images.push(json!({"idiom": "iphone", "scale": "2x", "size": "60x60"}));

        let manifest = json!({
            "images": images,
            "info": {"author": "xcode", "version": 1}
        });
        let text = serde_json::to_string_pretty(&manifest).expect("manifest serializes");
        self.raw_manifest(&text)
    }

    /// Writes `contents` verbatim as the manifest.
    pub fn raw_manifest(self, contents: &str) -> Self {
        fs::write(self.path.join(MANIFEST_FILE_NAME), contents).expect("Failed to write manifest");
        self
    }

    /// Writes a file into the icon set. Image names get a PNG signature,
    /// everything else a line of text.
    pub fn file(self, name: &str) -> Self {
        let lower = name.to_lowercase();
        let contents: &[u8] = if lower.ends_with(".png") {
            PNG_SIGNATURE
        } else {
            b"placeholder\n"
        };
        fs::write(self.path.join(name), contents).expect("Failed to write file");
        self
    }

    /// Writes several files; see [`IconSetFixture::file`].
    pub fn files(self, names: &[&str]) -> Self {
        names.iter().fold(self, |set, name| set.file(name))
    }

    /// Creates a subdirectory inside the icon set.
    pub fn subdir(self, name: &str) -> Self {
        fs::create_dir_all(self.path.join(name)).expect("Failed to create subdirectory");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_round_trips_through_the_model() {
        let catalog = CatalogFixture::new();
        let set = catalog
            .icon_set("AppIcon.appiconset")
            .manifest(&["icon.png", "icon@2x.png"]);

        let manifest =
            iconcheck_lint::Manifest::load(&set.path().join(MANIFEST_FILE_NAME)).unwrap();
        assert_eq!(manifest.images.len(), 3);
        assert_eq!(manifest.referenced_files().len(), 2);
    }

    #[test]
    fn test_missing_catalog_is_not_created() {
        let catalog = CatalogFixture::missing();
        assert!(catalog.project_dir().is_dir());
        assert!(!catalog.root().exists());
    }
}
