//! Source file declarations of the product version
//!
//! The source file exposes two declarations:
//!
//! ```text
//! export const versionMajorMinor = "4.2";
//! export const version = `${versionMajorMinor}.0-dev`;
//! ```
//!
//! Both are located by fixed textual shape. Lookups distinguish a declaration
//! that is absent from one that is present but has an unexpected value.

use crate::config::SourceConfig;
use crate::domain::{Channel, PrereleaseIdentifier};
use crate::error::{PrereleaseError, Result};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Outcome of looking up a declaration in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Declaration present with a well-formed value
    Found(String),
    /// No declaration with the expected name
    NotFound,
    /// Declaration present but its value does not fit the expected shape
    Malformed(String),
}

/// Raw text of the source file exposing the version constants
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(SourceDocument {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path as shown in error messages
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

fn major_minor_head(names: &SourceConfig) -> String {
    format!("export const {} = \"", names.major_minor_constant)
}

fn template_head(names: &SourceConfig) -> String {
    format!("export const {} = `", names.version_constant)
}

fn template_ref(names: &SourceConfig) -> String {
    format!("${{{}}}.", names.major_minor_constant)
}

/// Human-readable shape of the major-minor declaration
pub fn major_minor_pattern(names: &SourceConfig) -> String {
    format!("{}<major>.<minor>\"", major_minor_head(names))
}

/// Human-readable shape of the version template declaration
pub fn version_template_pattern(names: &SourceConfig) -> String {
    format!(
        "{}{}<patch>[{}]`;",
        template_head(names),
        template_ref(names),
        names.dev_marker
    )
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_major_minor(s: &str) -> bool {
    matches!(s.split_once('.'), Some((major, minor)) if is_digits(major) && is_digits(minor))
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// Find the major-minor constant, e.g. `export const versionMajorMinor = "4.2"`
pub fn find_major_minor(text: &str, names: &SourceConfig) -> Lookup {
    let head = major_minor_head(names);
    let mut malformed = None;

    for (at, _) in text.match_indices(&head) {
        let start = at + head.len();
        let end = line_end(text, start);
        let line = &text[start..end];
        match line.find('"') {
            Some(close) if is_major_minor(&line[..close]) => {
                return Lookup::Found(line[..close].to_string());
            }
            Some(close) => {
                malformed.get_or_insert_with(|| line[..close].to_string());
            }
            None => {
                malformed.get_or_insert_with(|| line.to_string());
            }
        }
    }

    malformed.map_or(Lookup::NotFound, Lookup::Malformed)
}

/// A located version template declaration
#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplateSite {
    /// Byte range of the template contents between the backticks
    value: Range<usize>,
    /// Whether the template is closed by "`;" on the same line
    terminated: bool,
}

fn template_sites(text: &str, names: &SourceConfig) -> Vec<TemplateSite> {
    let head = template_head(names);

    text.match_indices(&head)
        .map(|(at, _)| {
            let start = at + head.len();
            let end = line_end(text, start);
            match text[start..end].find("`;") {
                Some(close) => TemplateSite {
                    value: start..start + close,
                    terminated: true,
                },
                None => TemplateSite {
                    value: start..end,
                    terminated: false,
                },
            }
        })
        .collect()
}

/// Extract the patch digit from a template value such as `${versionMajorMinor}.0-dev`
fn template_patch(value: &str, names: &SourceConfig) -> Option<String> {
    let rest = value.strip_prefix(&template_ref(names))?;
    let digit = rest.chars().next().filter(char::is_ascii_digit)?;
    let suffix = &rest[digit.len_utf8()..];

    if suffix.is_empty() || suffix == names.dev_marker {
        Some(digit.to_string())
    } else {
        None
    }
}

/// Find the patch digit of the version template declaration,
/// e.g. `` export const version = `${versionMajorMinor}.0`; ``
pub fn find_version_patch(text: &str, names: &SourceConfig) -> Lookup {
    let sites = template_sites(text, names);

    for site in sites.iter().filter(|site| site.terminated) {
        if let Some(patch) = template_patch(&text[site.value.clone()], names) {
            return Lookup::Found(patch);
        }
    }

    sites
        .first()
        .map_or(Lookup::NotFound, |site| {
            Lookup::Malformed(text[site.value.clone()].to_string())
        })
}

/// Replace the version template's value so it references the major-minor
/// constant followed by `identifier`.
///
/// Targets the first well-formed template declaration, or failing that the
/// first closed one that references the major-minor constant. Every other byte
/// of `text` is preserved.
///
/// # Returns
/// * `Ok(String)` - The rewritten text
/// * `Err(PatternNotFound)` - If no template declaration can be rewritten
/// * `Err(NoOpRewrite)` - If the rewritten text equals the input
pub fn rewrite_source(
    source: &SourceDocument,
    names: &SourceConfig,
    identifier: &PrereleaseIdentifier,
) -> Result<String> {
    let text = &source.text;
    let sites = template_sites(text, names);
    let reference = template_ref(names);

    let target = sites
        .iter()
        .filter(|site| site.terminated)
        .find(|site| template_patch(&text[site.value.clone()], names).is_some())
        .or_else(|| {
            sites
                .iter()
                .filter(|site| site.terminated)
                .find(|site| text[site.value.clone()].starts_with(&reference))
        })
        .ok_or_else(|| {
            PrereleaseError::pattern_not_found(
                source.display_path(),
                version_template_pattern(names),
                "no rewritable declaration",
            )
        })?;

    let mut rewritten = String::with_capacity(text.len() + 16);
    rewritten.push_str(&text[..target.value.start]);
    rewritten.push_str(&reference);
    rewritten.push_str(&identifier.to_string());
    rewritten.push_str(&text[target.value.end..]);

    if rewritten == *text {
        return Err(no_op(source, identifier.channel));
    }

    Ok(rewritten)
}

fn no_op(source: &SourceDocument, channel: Channel) -> PrereleaseError {
    PrereleaseError::NoOpRewrite {
        path: source.display_path(),
        channel: channel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use chrono::{TimeZone, Utc};

    const CORE_TS: &str = "namespace ts {\n    // Keep these two declarations in their current shape.\n    export const versionMajorMinor = \"4.2\";\n    /** The version of the TypeScript compiler release */\n    export const version = `${versionMajorMinor}.0-dev`;\n}\n";

    fn doc(text: &str) -> SourceDocument {
        SourceDocument {
            path: PathBuf::from("src/corePublic.ts"),
            text: text.to_string(),
        }
    }

    fn identifier(patch: &str) -> PrereleaseIdentifier {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap());
        PrereleaseIdentifier::compose(Channel::Dev, patch, &clock)
    }

    #[test]
    fn test_find_major_minor() {
        let names = SourceConfig::default();
        assert_eq!(
            find_major_minor(CORE_TS, &names),
            Lookup::Found("4.2".to_string())
        );
    }

    #[test]
    fn test_find_major_minor_absent() {
        let names = SourceConfig::default();
        assert_eq!(
            find_major_minor("export const other = \"4.2\";", &names),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_find_major_minor_malformed() {
        let names = SourceConfig::default();
        assert_eq!(
            find_major_minor("export const versionMajorMinor = \"4.x\";", &names),
            Lookup::Malformed("4.x".to_string())
        );
        assert_eq!(
            find_major_minor("export const versionMajorMinor = \"4.2.1\";", &names),
            Lookup::Malformed("4.2.1".to_string())
        );
    }

    #[test]
    fn test_find_major_minor_prefers_later_well_formed() {
        let names = SourceConfig::default();
        let text = "export const versionMajorMinor = \"?\";\nexport const versionMajorMinor = \"5.0\";\n";
        assert_eq!(
            find_major_minor(text, &names),
            Lookup::Found("5.0".to_string())
        );
    }

    #[test]
    fn test_find_version_patch_with_dev_marker() {
        let names = SourceConfig::default();
        assert_eq!(
            find_version_patch(CORE_TS, &names),
            Lookup::Found("0".to_string())
        );
    }

    #[test]
    fn test_find_version_patch_without_marker() {
        let names = SourceConfig::default();
        let text = "export const version = `${versionMajorMinor}.3`;";
        assert_eq!(
            find_version_patch(text, &names),
            Lookup::Found("3".to_string())
        );
    }

    #[test]
    fn test_find_version_patch_absent() {
        let names = SourceConfig::default();
        assert_eq!(
            find_version_patch("export const versionMajorMinor = \"4.2\";", &names),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_find_version_patch_rejects_processed_value() {
        let names = SourceConfig::default();
        let text = "export const version = `${versionMajorMinor}.0-dev.20240305`;";
        assert_eq!(
            find_version_patch(text, &names),
            Lookup::Malformed("${versionMajorMinor}.0-dev.20240305".to_string())
        );
    }

    #[test]
    fn test_find_version_patch_rejects_multi_digit_patch() {
        let names = SourceConfig::default();
        let text = "export const version = `${versionMajorMinor}.10`;";
        assert!(matches!(
            find_version_patch(text, &names),
            Lookup::Malformed(_)
        ));
    }

    #[test]
    fn test_find_version_patch_unterminated() {
        let names = SourceConfig::default();
        let text = "export const version = `${versionMajorMinor}.0\n`;";
        assert!(matches!(
            find_version_patch(text, &names),
            Lookup::Malformed(_)
        ));
    }

    #[test]
    fn test_custom_declaration_names() {
        let names = SourceConfig {
            major_minor_constant: "mm".to_string(),
            version_constant: "full".to_string(),
            dev_marker: "-nightly".to_string(),
        };
        let text = "export const mm = \"1.9\";\nexport const full = `${mm}.2-nightly`;\n";
        assert_eq!(find_major_minor(text, &names), Lookup::Found("1.9".to_string()));
        assert_eq!(find_version_patch(text, &names), Lookup::Found("2".to_string()));
    }

    #[test]
    fn test_rewrite_source_replaces_only_template() {
        let names = SourceConfig::default();
        let rewritten = rewrite_source(&doc(CORE_TS), &names, &identifier("0")).unwrap();

        let expected = CORE_TS.replace(
            "`${versionMajorMinor}.0-dev`",
            "`${versionMajorMinor}.0-dev.20240305`",
        );
        assert_eq!(rewritten, expected);

        let changed: Vec<_> = CORE_TS
            .lines()
            .zip(rewritten.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn test_rewrite_source_reapplied_is_no_op() {
        let names = SourceConfig::default();
        let id = identifier("0");
        let once = rewrite_source(&doc(CORE_TS), &names, &id).unwrap();

        let err = rewrite_source(&doc(&once), &names, &id).unwrap_err();
        assert!(matches!(err, PrereleaseError::NoOpRewrite { ref channel, .. } if channel == "dev"));
    }

    #[test]
    fn test_rewrite_source_without_declaration() {
        let names = SourceConfig::default();
        let err = rewrite_source(&doc("export const versionMajorMinor = \"4.2\";"), &names, &identifier("0"))
            .unwrap_err();
        assert!(matches!(err, PrereleaseError::PatternNotFound { .. }));
    }

    #[test]
    fn test_patterns_name_constants() {
        let names = SourceConfig::default();
        assert_eq!(
            major_minor_pattern(&names),
            "export const versionMajorMinor = \"<major>.<minor>\""
        );
        assert_eq!(
            version_template_pattern(&names),
            "export const version = `${versionMajorMinor}.<patch>[-dev]`;"
        );
    }
}
