//! Smallest unit of a version: a numeral followed by an optional literal

use std::cmp::Ordering;
use std::fmt;

use crate::version::trailing::PrefixOrd;

/// A numeral paired with a lowercase literal, e.g. `2post` or `0dev`.
///
/// The literal is normalized to lowercase on construction and cannot be
/// changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionPartAtom {
    numeral: u64,
    literal: String,
}

impl VersionPartAtom {
    /// The padding atom: numeral `0`, no literal.
    pub(crate) const EMPTY: VersionPartAtom = VersionPartAtom {
        numeral: 0,
        literal: String::new(),
    };

    pub fn new(numeral: u64) -> Self {
        Self {
            numeral,
            literal: String::new(),
        }
    }

    pub fn with_literal(numeral: u64, literal: impl AsRef<str>) -> Self {
        Self {
            numeral,
            literal: literal.as_ref().to_lowercase(),
        }
    }

    pub fn numeral(&self) -> u64 {
        self.numeral
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Ordering weight of reserved literals; `0` means an ordinary string.
fn literal_priority(literal: &str) -> i8 {
    match literal {
        "*" => -3,
        "dev" => -2,
        "_" => -1,
        "" => 1,
        "post" => 2,
        _ => 0,
    }
}

impl Ord for VersionPartAtom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeral.cmp(&other.numeral).then_with(|| {
            match (
                literal_priority(&self.literal),
                literal_priority(&other.literal),
            ) {
                (0, 0) => self.literal.as_bytes().cmp(other.literal.as_bytes()),
                (lhs, rhs) => lhs.cmp(&rhs),
            }
        })
    }
}

impl PartialOrd for VersionPartAtom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PrefixOrd for VersionPartAtom {
    /// A bare numeral is a prefix of any literal following the same numeral.
    fn prefix_cmp(&self, prefix: &Self) -> Ordering {
        if self.numeral == prefix.numeral && prefix.literal.is_empty() {
            return Ordering::Equal;
        }
        self.cmp(prefix)
    }
}

impl fmt::Display for VersionPartAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.numeral, self.literal)
    }
}
