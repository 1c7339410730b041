use crate::error::{PrereleaseError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Indentation used when writing the manifest back
const MANIFEST_INDENT: &[u8] = b"    ";

/// Parsed manifest (package.json style) with its fields kept in file order.
///
/// Only `version` is interpreted; every other field passes through as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub path: PathBuf,
    fields: Map<String, Value>,
}

impl ManifestDocument {
    /// Parse manifest JSON read from `path`
    ///
    /// # Returns
    /// * `Err(Manifest)` - If the text is not a JSON object with a string `version`
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let value: Value = serde_json::from_str(text).map_err(|e| {
            PrereleaseError::manifest(format!("{}: invalid JSON: {}", path.display(), e))
        })?;

        let Value::Object(fields) = value else {
            return Err(PrereleaseError::manifest(format!(
                "{}: expected a JSON object",
                path.display()
            )));
        };

        if !matches!(fields.get("version"), Some(Value::String(_))) {
            return Err(PrereleaseError::manifest(format!(
                "{}: missing string field 'version'",
                path.display()
            )));
        }

        Ok(ManifestDocument {
            path: path.to_path_buf(),
            fields,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(path, &text)
    }

    pub fn version(&self) -> &str {
        self.fields
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Copy of this manifest with `version` replaced in place
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert("version".to_string(), Value::String(version.into()));
        ManifestDocument {
            path: self.path.clone(),
            fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Render as JSON with 4-space indentation and the original field order
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(MANIFEST_INDENT));
        self.fields
            .serialize(&mut ser)
            .map_err(|e| PrereleaseError::manifest(e.to_string()))?;
        String::from_utf8(out).map_err(|e| PrereleaseError::manifest(e.to_string()))
    }
}
