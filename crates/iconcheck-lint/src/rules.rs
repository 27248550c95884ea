//! Icon set rule trait and the file and format rule modules.

use crate::report::{Finding, Severity};
use std::collections::BTreeSet;

pub mod files;
pub mod format;

/// Extensions (lowercase, with the dot) treated as image files.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Everything a rule needs to know about one icon set.
///
/// Built by the set validator after the manifest has been loaded.
pub struct IconSetContext<'a> {
    /// Directory name of the icon set (e.g. "AppIcon.appiconset").
    pub name: &'a str,
    /// Non-empty file names referenced by the manifest.
    pub referenced: &'a BTreeSet<String>,
    /// Regular files present in the directory, minus the manifest.
    pub actual: &'a BTreeSet<String>,
}

impl IconSetContext<'_> {
    /// Files on disk that the manifest does not mention.
    pub fn unreferenced(&self) -> impl Iterator<Item = &String> {
        self.actual.difference(self.referenced)
    }

    /// Files the manifest mentions that are not on disk.
    pub fn missing(&self) -> impl Iterator<Item = &String> {
        self.referenced.difference(self.actual)
    }
}

/// A check over one icon set that reports findings.
pub trait IconSetRule: Send + Sync {
    /// Unique identifier (e.g., "iconset/missing-file").
    fn id(&self) -> &'static str;

    /// Severity of the findings this rule emits.
    fn severity(&self) -> Severity;

    /// Run the check, return findings.
    fn check(&self, ctx: &IconSetContext) -> Vec<Finding>;

    /// Builds a finding for `filename` attributed to this rule.
    fn finding(&self, ctx: &IconSetContext, filename: &str, message: String) -> Finding {
        Finding::new(self.id(), self.severity(), message)
            .with_icon_set(ctx.name)
            .with_filename(filename)
    }
}

/// Returns all icon set rules in the order they run.
pub fn all_rules() -> Vec<Box<dyn IconSetRule>> {
    let mut rules = files::all_rules();
    rules.extend(format::all_rules());
    rules
}

/// True if `name` ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_image_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// True if `name` ends in `.png`, ignoring case.
pub fn is_png_file(name: &str) -> bool {
    name.to_lowercase().ends_with(".png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_ignore_case() {
        assert!(is_image_file("icon.png"));
        assert!(is_image_file("ICON.PNG"));
        assert!(is_image_file("photo.JpG"));
        assert!(is_image_file("photo.jpeg"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("icon.png.bak"));
        assert!(!is_image_file(".DS_Store"));
    }

    #[test]
    fn test_png_detection() {
        assert!(is_png_file("Icon-60@2x.PNG"));
        assert!(!is_png_file("icon.jpg"));
        assert!(!is_png_file("png"));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let rules = all_rules();
        let ids: BTreeSet<_> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), rules.len());
        assert!(ids.iter().all(|id| id.starts_with("iconset/")));
    }

    #[test]
    fn test_context_set_differences() {
        let referenced: BTreeSet<String> =
            ["a.png", "b.png"].iter().map(|s| s.to_string()).collect();
        let actual: BTreeSet<String> =
            ["b.png", "c.png"].iter().map(|s| s.to_string()).collect();
        let ctx = IconSetContext {
            name: "AppIcon.appiconset",
            referenced: &referenced,
            actual: &actual,
        };

        assert_eq!(ctx.unreferenced().collect::<Vec<_>>(), vec!["c.png"]);
        assert_eq!(ctx.missing().collect::<Vec<_>>(), vec!["a.png"]);
    }
}
