//! Domain logic - pure version rules independent of file I/O

pub mod channel;
pub mod clock;
pub mod prerelease;
pub mod version;

pub use channel::Channel;
pub use clock::{Clock, FixedClock, SystemClock};
pub use prerelease::PrereleaseIdentifier;
pub use version::{parse_manifest_version, VersionTriple};
