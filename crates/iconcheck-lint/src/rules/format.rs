//! Icon file format rules.

use crate::report::{Finding, Severity};
use crate::rules::{is_png_file, IconSetContext, IconSetRule};

/// Returns all format rules.
pub fn all_rules() -> Vec<Box<dyn IconSetRule>> {
    vec![Box::new(NonPngIconRule)]
}

/// Rule: iconset/non-png
/// Flags referenced icons that are not PNG files.
///
/// Runs over every referenced name, whether or not the file exists.
pub struct NonPngIconRule;

impl IconSetRule for NonPngIconRule {
    fn id(&self) -> &'static str {
        "iconset/non-png"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &IconSetContext) -> Vec<Finding> {
        ctx.referenced
            .iter()
            .filter(|name| !is_png_file(name))
            .map(|name| {
                self.finding(
                    ctx,
                    name,
                    format!(
                        "Non-PNG icon file {} in {} (PNG is recommended)",
                        name, ctx.name
                    ),
                )
            })
            .collect()
    }
}
