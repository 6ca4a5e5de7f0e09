pub mod cli;
pub mod config;
pub mod logging;
pub mod version;

pub use version::{CommonVersion, Version, VersionError, VersionPart, VersionPartAtom};
