use thiserror::Error;

/// Unified error type for configure-prerelease operations
#[derive(Error, Debug)]
pub enum PrereleaseError {
    #[error("Unexpected channel name '{0}': expected 'dev' or 'insiders'")]
    InvalidChannel(String),

    #[error("Malformed version '{version}': expected major.minor.patch")]
    MalformedVersion { version: String },

    #[error("{path}: no declaration matching '{pattern}' ({detail})")]
    PatternNotFound {
        path: String,
        pattern: String,
        detail: String,
    },

    #[error("{component} does not match. {path}: '{source_value}'; manifest: '{manifest_value}'")]
    VersionSkew {
        component: String,
        path: String,
        source_value: String,
        manifest_value: String,
    },

    #[error(
        "'{path}' was not updated while configuring for a prerelease publish for '{channel}'. \
         Ensure that you have not already run this tool; otherwise, erase your changes using \
         'git checkout -- \"{path}\"'"
    )]
    NoOpRewrite { path: String, channel: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in configure-prerelease
pub type Result<T> = std::result::Result<T, PrereleaseError>;

impl PrereleaseError {
    /// Create a malformed version error for the offending string
    pub fn malformed_version(version: impl Into<String>) -> Self {
        PrereleaseError::MalformedVersion {
            version: version.into(),
        }
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        PrereleaseError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PrereleaseError::Config(msg.into())
    }

    /// Create a pattern-not-found error for a source file
    pub fn pattern_not_found(
        path: impl Into<String>,
        pattern: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        PrereleaseError::PatternNotFound {
            path: path.into(),
            pattern: pattern.into(),
            detail: detail.into(),
        }
    }
}
