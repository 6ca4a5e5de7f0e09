//! Conda version: epoch, main version and local version

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;
use crate::version::parser;
use crate::version::part::CommonVersion;
use crate::version::trailing::PrefixOrd;

/// A parsed version such as `1!2.0.1rc3+cuda11`.
///
/// Versions order by epoch first, then main version, then local version.
/// Equality follows that order, so `1.2` and `1.2.0` are equal (and hash
/// equal).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    epoch: u64,
    version: CommonVersion,
    local: CommonVersion,
}

impl Version {
    pub const EPOCH_DELIM: char = '!';
    pub const LOCAL_DELIM: char = '+';
    pub const PART_DELIM: char = '.';
    pub const PART_DELIM_ALT: char = '-';
    pub const PART_DELIM_SPECIAL: char = '_';

    pub fn new(epoch: u64, version: CommonVersion, local: CommonVersion) -> Self {
        Self {
            epoch,
            version,
            local,
        }
    }

    /// Parse a version string, e.g. `"1!1.2.3post1+local"`.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        parser::parse(input)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn version(&self) -> &CommonVersion {
        &self.version
    }

    pub fn local(&self) -> &CommonVersion {
        &self.local
    }

    /// Whether this version matches `prefix` read as a `prefix.*` pattern.
    ///
    /// - `1.2.3` starts with `1.2`
    /// - `1.2dev` starts with `1.2` (bare numerals match any literal)
    /// - `1.3` does not start with `1.2`
    ///
    /// Epoch and local version must match exactly.
    pub fn starts_with(&self, prefix: &Version) -> bool {
        self.epoch == prefix.epoch
            && self.version.prefix_cmp(&prefix.version) == Ordering::Equal
            && self.local == prefix.local
    }

    /// Whether `self` is a compatible upgrade of `older` at the given level.
    ///
    /// Both the main and the local versions must be equal, or greater with
    /// the first differing segment at index `level` or beyond. With
    /// `level = 1`, `1.3.0` is compatible with `1.2.5` but `2.0.0` is not.
    pub fn compatible_with(&self, older: &Version, level: usize) -> bool {
        fn compatible(newer: &CommonVersion, older: &CommonVersion, level: usize) -> bool {
            let divergence = newer.divergence(older);
            match divergence.ordering {
                Ordering::Equal => true,
                Ordering::Greater => divergence.index >= level,
                Ordering::Less => false,
            }
        }

        self.epoch == older.epoch
            && compatible(&self.version, &older.version, level)
            && compatible(&self.local, &older.local, level)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}{}", self.epoch, Self::EPOCH_DELIM)?;
        }
        write!(f, "{}", self.version)?;
        if !self.local.is_empty() {
            write!(f, "{}{}", Self::LOCAL_DELIM, self.local)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
