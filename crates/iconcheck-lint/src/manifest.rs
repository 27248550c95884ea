//! Typed model of an icon set's `Contents.json` manifest.

use serde::{de, Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest exists but could not be read.
    #[error("Unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not JSON, or not shaped like a manifest.
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed `Contents.json`.
///
/// Only the `filename` of each image slot takes part in validation. Every
/// other key, including the `info` block, is ignored whatever its type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Image slots declared by the icon set.
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

/// One slot in the `images` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// File backing this slot. Absent for slots that have not been filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// The file is read in full before parsing, so the handle is closed on
    /// both the success and the parse-failure path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses manifest JSON that is already in memory.
    ///
    /// Derived struct deserializers also accept JSON arrays, so the object
    /// shape of the document and of each image slot is checked first.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(de::Error::custom("expected a JSON object at the top level"));
        }
        if let Some(images) = value.get("images").and_then(Value::as_array) {
            if images.iter().any(|image| !image.is_object()) {
                return Err(de::Error::custom(
                    "expected every entry in \"images\" to be an object",
                ));
            }
        }
        serde_json::from_value(value)
    }

    /// Set of non-empty file names referenced by the image slots.
    pub fn referenced_files(&self) -> BTreeSet<String> {
        self.images
            .iter()
            .filter_map(|image| image.filename.as_deref())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_xcode_manifest() {
        let manifest = Manifest::parse(
            r#"{
                "images": [
                    {"filename": "icon-1024.png", "idiom": "universal", "platform": "ios", "size": "1024x1024"},
                    {"idiom": "iphone", "scale": "2x", "size": "60x60"}
                ],
                "info": {"author": "xcode", "version": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[0].filename.as_deref(), Some("icon-1024.png"));
        assert_eq!(manifest.images[1].filename, None);
    }

    #[test]
    fn test_referenced_files_skips_unpopulated_slots() {
        let manifest = Manifest::parse(
            r#"{"images": [
                {"filename": "a.png"},
                {"idiom": "ipad"},
                {"filename": ""},
                {"filename": "a.png", "scale": "3x"},
                {"filename": "b.jpg"}
            ]}"#,
        )
        .unwrap();

        let expected: BTreeSet<String> = ["a.png", "b.jpg"].iter().map(|s| s.to_string()).collect();
        assert_eq!(manifest.referenced_files(), expected);
    }

    #[test]
    fn test_missing_images_key_defaults_to_empty() {
        let manifest = Manifest::parse(r#"{"info": {"version": 1}}"#).unwrap();
        assert!(manifest.images.is_empty());
        assert!(manifest.referenced_files().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(Manifest::parse("[]").is_err());
        assert!(Manifest::parse(r#"{"images": {}}"#).is_err());
        assert!(Manifest::parse(r#"{"images": ["icon.png"]}"#).is_err());
        assert!(Manifest::parse(r#"{"images": [["icon.png"]]}"#).is_err());
        assert!(Manifest::parse(r#"{"images": [{"filename": 7}]}"#).is_err());
        assert!(Manifest::parse("{ not json").is_err());
    }

    #[test]
    fn test_metadata_of_any_type_is_ignored() {
        let manifest = Manifest::parse(
            r#"{
                "images": [
                    {"filename": "icon.png", "scale": 2, "size": [60, 60], "idiom": null},
                    {"idiom": {"family": "watch"}}
                ],
                "info": {"version": "1", "author": 7},
                "properties": "pre-rendered"
            }"#,
        )
        .unwrap();

        let expected: BTreeSet<String> = ["icon.png"].iter().map(|s| s.to_string()).collect();
        assert_eq!(manifest.referenced_files(), expected);

        let manifest = Manifest::parse(r#"{"images": [], "info": "xcode"}"#).unwrap();
        assert!(manifest.images.is_empty());
    }

    #[test]
    fn test_load_reports_path_in_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Contents.json");

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));

        std::fs::write(&path, "{ broken").unwrap();
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        let message = err.to_string();
        assert!(message.starts_with("Invalid JSON in "), "{message}");
        assert!(message.contains("Contents.json"), "{message}");
    }
}
