//! Dot-delimited segments and the sequences they form

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::version::atom::VersionPartAtom;
use crate::version::trailing::{Divergence, PrefixOrd, Trailing, compare_padded, compare_trailing};

/// One delimiter-separated segment, decomposed into atoms (`3a2` -> `3a`, `2`).
///
/// Trailing `0` atoms are insignificant: `1a` equals `1a0`.
#[derive(Debug, Clone, Default)]
pub struct VersionPart(Vec<VersionPartAtom>);

impl VersionPart {
    pub(crate) const EMPTY: VersionPart = VersionPart(Vec::new());

    pub fn new(atoms: Vec<VersionPartAtom>) -> Self {
        Self(atoms)
    }

    pub fn atoms(&self) -> &[VersionPartAtom] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Atoms without the insignificant trailing empties.
    fn significant(&self) -> &[VersionPartAtom] {
        let end = self
            .0
            .iter()
            .rposition(|atom| !atom.is_empty())
            .map_or(0, |pos| pos + 1);
        &self.0[..end]
    }
}

impl From<Vec<VersionPartAtom>> for VersionPart {
    fn from(atoms: Vec<VersionPartAtom>) -> Self {
        Self(atoms)
    }
}

impl FromIterator<VersionPartAtom> for VersionPart {
    fn from_iter<I: IntoIterator<Item = VersionPartAtom>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_padded(&self.0, &other.0, &VersionPartAtom::EMPTY, Ord::cmp).ordering
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionPart {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionPart {}

impl Hash for VersionPart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl PrefixOrd for VersionPart {
    fn prefix_cmp(&self, prefix: &Self) -> Ordering {
        compare_trailing(
            &self.0,
            &prefix.0,
            Trailing::With(&VersionPartAtom::EMPTY),
            Trailing::AlwaysEqual,
            PrefixOrd::prefix_cmp,
        )
        .ordering
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|atom| write!(f, "{atom}"))
    }
}

/// An ordered sequence of segments, e.g. the `1.2.3rc1` in `1!1.2.3rc1+4`.
///
/// Trailing empty segments are insignificant: `1.2` equals `1.2.0`.
#[derive(Debug, Clone, Default)]
pub struct CommonVersion(Vec<VersionPart>);

impl CommonVersion {
    pub fn new(parts: Vec<VersionPart>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Padded comparison reporting where the two sequences first differ.
    pub(crate) fn divergence(&self, other: &Self) -> Divergence {
        compare_padded(&self.0, &other.0, &VersionPart::EMPTY, Ord::cmp)
    }

    fn significant(&self) -> &[VersionPart] {
        let end = self
            .0
            .iter()
            .rposition(|part| *part != VersionPart::EMPTY)
            .map_or(0, |pos| pos + 1);
        &self.0[..end]
    }
}

impl From<Vec<VersionPart>> for CommonVersion {
    fn from(parts: Vec<VersionPart>) -> Self {
        Self(parts)
    }
}

impl FromIterator<VersionPart> for CommonVersion {
    fn from_iter<I: IntoIterator<Item = VersionPart>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Ord for CommonVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.divergence(other).ordering
    }
}

impl PartialOrd for CommonVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CommonVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CommonVersion {}

impl Hash for CommonVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl PrefixOrd for CommonVersion {
    fn prefix_cmp(&self, prefix: &Self) -> Ordering {
        compare_trailing(
            &self.0,
            &prefix.0,
            Trailing::With(&VersionPart::EMPTY),
            Trailing::AlwaysEqual,
            PrefixOrd::prefix_cmp,
        )
        .ordering
    }
}

impl fmt::Display for CommonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn atom(numeral: u64, literal: &str) -> VersionPartAtom {
        VersionPartAtom::with_literal(numeral, literal)
    }

    fn part(atoms: &[(u64, &str)]) -> VersionPart {
        atoms.iter().map(|&(n, l)| atom(n, l)).collect()
    }

    fn common(parts: &[&[(u64, &str)]]) -> CommonVersion {
        parts.iter().map(|atoms| part(atoms)).collect()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(part(&[(1, "")]), part(&[(1, ""), (0, "")]), Ordering::Equal)]
    #[case(part(&[(1, "a")]), part(&[(1, "a"), (2, "")]), Ordering::Less)]
    #[case(part(&[(1, "a"), (2, "")]), part(&[(1, "b")]), Ordering::Less)]
    #[case(part(&[(1, "")]), part(&[(1, ""), (0, "dev")]), Ordering::Greater)]
    #[case(part(&[]), part(&[(0, "")]), Ordering::Equal)]
    fn part_cmp_pads_with_empty_atoms(
        #[case] lhs: VersionPart,
        #[case] rhs: VersionPart,
        #[case] expected: Ordering,
    ) {
        assert_eq!(lhs.cmp(&rhs), expected);
    }

    #[rstest]
    #[case(common(&[&[(1, "")], &[(2, "")]]), common(&[&[(1, "")], &[(2, "")], &[(0, "")]]), Ordering::Equal)]
    #[case(common(&[&[(1, "")], &[(2, "")]]), common(&[&[(1, "")], &[(0, "")], &[(2, "")]]), Ordering::Greater)]
    #[case(common(&[&[(1, "")], &[(1, "")]]), common(&[&[(1, "")], &[(2, "")], &[(0, "")]]), Ordering::Less)]
    #[case(common(&[&[(1, "")]]), common(&[&[(1, "")], &[(0, "dev")]]), Ordering::Greater)]
    #[case(common(&[&[(1, "")]]), common(&[&[(1, "")], &[(0, "post")]]), Ordering::Less)]
    fn common_version_cmp_pads_with_empty_parts(
        #[case] lhs: CommonVersion,
        #[case] rhs: CommonVersion,
        #[case] expected: Ordering,
    ) {
        assert_eq!(lhs.cmp(&rhs), expected);
    }

    #[test]
    fn divergence_reports_first_differing_segment() {
        let newer = common(&[&[(1, "")], &[(3, "")], &[(0, "")]]);
        let older = common(&[&[(1, "")], &[(2, "")], &[(5, "")]]);

        let result = newer.divergence(&older);

        assert_eq!(result.ordering, Ordering::Greater);
        assert_eq!(result.index, 1);
    }

    #[rstest]
    #[case(common(&[&[(1, "")], &[(2, "")], &[(3, "")]]), common(&[&[(1, "")], &[(2, "")]]), Ordering::Equal)]
    #[case(common(&[&[(1, "")], &[(2, "dev")]]), common(&[&[(1, "")], &[(2, "")]]), Ordering::Equal)]
    #[case(common(&[&[(1, "")], &[(3, "")]]), common(&[&[(1, "")], &[(2, "")]]), Ordering::Greater)]
    #[case(common(&[&[(1, "")]]), common(&[&[(1, "")], &[(2, "")]]), Ordering::Less)]
    #[case(common(&[&[(1, "")]]), common(&[&[(1, "")], &[(0, "")]]), Ordering::Equal)]
    fn common_version_prefix_cmp_ignores_extra_trailing_segments(
        #[case] version: CommonVersion,
        #[case] prefix: CommonVersion,
        #[case] expected: Ordering,
    ) {
        assert_eq!(version.prefix_cmp(&prefix), expected);
    }

    #[test]
    fn equal_values_hash_equal() {
        let short = common(&[&[(1, "")], &[(2, "a")]]);
        let long = common(&[&[(1, "")], &[(2, "a"), (0, "")], &[(0, "")], &[]]);

        assert_eq!(short, long);
        assert_eq!(hash_of(&short), hash_of(&long));
    }

    #[rstest]
    #[case(part(&[(3, "a"), (2, "")]), "3a2")]
    #[case(part(&[(0, "post"), (1, "")]), "0post1")]
    fn part_display_concatenates_atoms(#[case] part: VersionPart, #[case] expected: &str) {
        assert_eq!(part.to_string(), expected);
    }

    #[test]
    fn common_version_display_joins_with_dots() {
        let version = common(&[&[(1, "")], &[(2, "rc"), (1, "")], &[(0, "")]]);

        assert_eq!(version.to_string(), "1.2rc1.0");
    }
}
