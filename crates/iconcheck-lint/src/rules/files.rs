//! Rules comparing the manifest's file references with the directory contents.

use crate::report::{Finding, Severity};
use crate::rules::{is_image_file, IconSetContext, IconSetRule};
use crate::MANIFEST_FILE_NAME;

/// Returns all file consistency rules.
pub fn all_rules() -> Vec<Box<dyn IconSetRule>> {
    vec![
        // Error-level rules
        Box::new(ExtraneousFileRule),
        Box::new(MissingFileRule),
        // Warning-level rules
        Box::new(UnreferencedImageRule),
    ]
}

/// Rule: iconset/extraneous-file
/// Flags files in the icon set that are neither referenced nor images.
pub struct ExtraneousFileRule;

impl IconSetRule for ExtraneousFileRule {
    fn id(&self) -> &'static str {
        "iconset/extraneous-file"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &IconSetContext) -> Vec<Finding> {
        ctx.unreferenced()
            .filter(|name| !is_image_file(name))
            .map(|name| {
                self.finding(
                    ctx,
                    name,
                    format!(
                        "Extraneous file {} in {} (not an icon or {})",
                        name, ctx.name, MANIFEST_FILE_NAME
                    ),
                )
            })
            .collect()
    }
}

/// Rule: iconset/missing-file
/// Flags manifest references to files that are not in the icon set.
pub struct MissingFileRule;

impl IconSetRule for MissingFileRule {
    fn id(&self) -> &'static str {
        "iconset/missing-file"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &IconSetContext) -> Vec<Finding> {
        ctx.missing()
            .map(|name| {
                self.finding(
                    ctx,
                    name,
                    format!(
                        "Missing file {} referenced in {}/{} does not exist on disk",
                        name, ctx.name, MANIFEST_FILE_NAME
                    ),
                )
            })
            .collect()
    }
}

/// Rule: iconset/unreferenced-image
/// Flags image files that sit in the icon set without a manifest slot.
pub struct UnreferencedImageRule;

impl IconSetRule for UnreferencedImageRule {
    fn id(&self) -> &'static str {
        "iconset/unreferenced-image"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &IconSetContext) -> Vec<Finding> {
        ctx.unreferenced()
            .filter(|name| is_image_file(name))
            .map(|name| {
                self.finding(
                    ctx,
                    name,
                    format!(
                        "Image file {} in {} is not referenced in {}",
                        name, ctx.name, MANIFEST_FILE_NAME
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(rule: &dyn IconSetRule, referenced: &[&str], actual: &[&str]) -> Vec<Finding> {
        let referenced = names(referenced);
        let actual = names(actual);
        let ctx = IconSetContext {
            name: "AppIcon.appiconset",
            referenced: &referenced,
            actual: &actual,
        };
        rule.check(&ctx)
    }

    #[test]
    fn test_extraneous_file_rule_triggers() {
        let findings = run(&ExtraneousFileRule, &["icon.png"], &["icon.png", "notes.txt"]);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "iconset/extraneous-file");
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].filename.as_deref(), Some("notes.txt"));
        assert_eq!(
            findings[0].message,
            "Extraneous file notes.txt in AppIcon.appiconset (not an icon or Contents.json)"
        );
    }

    #[test]
    fn test_extraneous_file_rule_ignores_images() {
        let findings = run(&ExtraneousFileRule, &[], &["old.PNG", "draft.jpeg"]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_extraneous_file_rule_ignores_referenced_non_images() {
        // A referenced .pdf is a format concern, not an extraneous file.
        let findings = run(&ExtraneousFileRule, &["icon.pdf"], &["icon.pdf"]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_file_rule_triggers() {
        let findings = run(&MissingFileRule, &["icon-60.png", "icon-76.png"], &["icon-76.png"]);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("icon-60.png"));
        assert!(findings[0].message.contains("does not exist"));
    }

    #[test]
    fn test_missing_file_rule_passes() {
        let findings = run(&MissingFileRule, &["a.png"], &["a.png", "b.png"]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_unreferenced_image_rule_triggers() {
        let findings = run(&UnreferencedImageRule, &["icon.png"], &["icon.png", "icon_old.png"]);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "iconset/unreferenced-image");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(
            findings[0].message,
            "Image file icon_old.png in AppIcon.appiconset is not referenced in Contents.json"
        );
    }

    #[test]
    fn test_unreferenced_image_rule_ignores_non_images() {
        let findings = run(&UnreferencedImageRule, &[], &["README.md"]);
        assert!(findings.is_empty());
    }
}
