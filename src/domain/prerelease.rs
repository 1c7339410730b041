//! Prerelease identifier composition
//!
//! A prerelease identifier has the form `<patch>-<channel>.<YYYYMMDD>`, e.g.
//! `0-dev.20240305`. The date is the UTC calendar date of the injected clock.

use super::channel::Channel;
use super::clock::Clock;
use std::fmt;

/// Date stamp format: year, month and day with no separators
const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Patch identifier for a prerelease publish
///
/// # Examples
/// - patch "0", channel dev, 2024-03-05 -> "0-dev.20240305"
/// - patch "3", channel insiders, 2023-12-31 -> "3-insiders.20231231"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseIdentifier {
    /// The plain patch digits carried over from the manifest
    pub patch: String,
    /// The release channel
    pub channel: Channel,
    /// Eight-digit UTC date stamp
    pub date_stamp: String,
}

impl PrereleaseIdentifier {
    /// Compose the identifier for `patch` on `channel`, stamped with today's UTC date
    ///
    /// # Arguments
    /// * `channel` - Release channel
    /// * `patch` - Plain patch digits from the validated version
    /// * `clock` - Source of the current instant
    pub fn compose(channel: Channel, patch: &str, clock: &dyn Clock) -> Self {
        let date_stamp = clock.now().format(DATE_STAMP_FORMAT).to_string();

        PrereleaseIdentifier {
            patch: patch.to_string(),
            channel,
            date_stamp,
        }
    }

    /// Full manifest version for this identifier, e.g. "4.2.0-dev.20240305"
    pub fn full_version(&self, major_minor: &str) -> String {
        format!("{}.{}", major_minor, self)
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.patch, self.channel, self.date_stamp)
    }
}
