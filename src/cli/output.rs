//! JSON shapes printed with `--json`

use std::cmp::Ordering;

use serde::Serialize;

use crate::version::Version;

#[derive(Debug, Serialize, PartialEq)]
pub struct ParsedVersion {
    pub input: String,
    pub canonical: Version,
    pub epoch: u64,
    pub version: Vec<String>,
    pub local: Vec<String>,
}

impl ParsedVersion {
    pub fn new(input: &str, version: Version) -> Self {
        Self {
            input: input.to_string(),
            epoch: version.epoch(),
            version: version.version().parts().iter().map(ToString::to_string).collect(),
            local: version.local().parts().iter().map(ToString::to_string).collect(),
            canonical: version,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderingName {
    Less,
    Equal,
    Greater,
}

impl OrderingName {
    pub fn symbol(self) -> &'static str {
        match self {
            OrderingName::Less => "<",
            OrderingName::Equal => "==",
            OrderingName::Greater => ">",
        }
    }
}

impl From<Ordering> for OrderingName {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => OrderingName::Less,
            Ordering::Equal => OrderingName::Equal,
            Ordering::Greater => OrderingName::Greater,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub lhs: Version,
    pub rhs: Version,
    pub ordering: OrderingName,
}

#[derive(Debug, Serialize)]
pub struct PrefixMatch {
    pub version: Version,
    pub prefix: Version,
    pub matches: bool,
}

#[derive(Debug, Serialize)]
pub struct Compatibility {
    pub newer: Version,
    pub older: Version,
    pub level: usize,
    pub compatible: bool,
}

#[derive(Debug, Serialize)]
pub struct LatestCompatible {
    pub current: Version,
    pub level: usize,
    pub latest: Option<Version>,
}
