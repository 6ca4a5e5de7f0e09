//! Pick versions out of lists of candidate version strings
//!
//! Unparseable candidates are skipped with a warning so that one bad entry
//! in a repository listing does not hide every other version.

use tracing::warn;

use crate::version::conda::Version;

fn parse_candidates(available_versions: &[String]) -> impl Iterator<Item = Version> + '_ {
    available_versions.iter().filter_map(|text| {
        Version::parse(text)
            .inspect_err(|e| warn!("Skipping candidate version: {}", e))
            .ok()
    })
}

/// Parse and sort candidates in ascending order.
///
/// Equal versions (e.g. `1.2` and `1.2.0`) keep their input order.
pub fn sort_versions(available_versions: &[String]) -> Vec<Version> {
    let mut versions: Vec<Version> = parse_candidates(available_versions).collect();
    versions.sort();
    versions
}

/// The greatest candidate.
pub fn latest(available_versions: &[String]) -> Option<Version> {
    parse_candidates(available_versions).max()
}

/// The greatest candidate that starts with `prefix`.
///
/// Example: prefix `1.2` over `1.2.3`, `1.2.10`, `1.3.0` gives `1.2.10`.
pub fn latest_matching(prefix: &Version, available_versions: &[String]) -> Option<Version> {
    parse_candidates(available_versions)
        .filter(|v| v.starts_with(prefix))
        .max()
}

/// The greatest candidate that is a compatible upgrade of `current`.
///
/// Returns `None` if no candidate is newer than `current` within the
/// segments allowed to change from `level` onward.
pub fn latest_compatible(
    current: &Version,
    available_versions: &[String],
    level: usize,
) -> Option<Version> {
    parse_candidates(available_versions)
        .filter(|v| v > current && v.compatible_with(current, level))
        .max()
}
