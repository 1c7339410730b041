//! Release channel embedded in the prerelease identifier

use crate::error::{PrereleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Release track tag (dev or insiders)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Nightly development builds
    Dev,
    /// Insiders preview builds
    Insiders,
}

impl Channel {
    /// Parse a channel from its command-line name
    ///
    /// Only the exact lowercase names "dev" and "insiders" are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Dev => "dev",
            Channel::Insiders => "insiders",
        }
    }
}

impl FromStr for Channel {
    type Err = PrereleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Channel::Dev),
            "insiders" => Ok(Channel::Insiders),
            other => Err(PrereleaseError::InvalidChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
