//! Lexicographic comparison of sequences padded with trailing empty elements
//!
//! If `0` is the empty element, `[1, 2]`, `[1, 2, 0]` and `[1, 2, 0, 0]` all
//! compare equal while `[1, 2]` and `[1, 0, 2]` do not. Likewise `[1, 1]` is
//! less than `[1, 2, 0]` but greater than `[1, 1, -1]`.

use std::cmp::Ordering;

/// Three-way comparison where the right-hand side is read as a prefix.
///
/// Returns `Equal` when `self` starts with `prefix`.
pub(crate) trait PrefixOrd {
    fn prefix_cmp(&self, prefix: &Self) -> Ordering;
}

/// What an exhausted sequence is padded with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trailing<'a, T> {
    /// Keep comparing against this element.
    With(&'a T),
    /// Padding matches any element.
    AlwaysEqual,
}

/// Result of a padded comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Divergence {
    pub ordering: Ordering,
    /// Index of the first differing element, or the length walked when equal.
    pub index: usize,
}

/// Compare `lhs` and `rhs` element by element, padding whichever runs out
/// first according to its [`Trailing`] strategy.
pub(crate) fn compare_trailing<T, F>(
    lhs: &[T],
    rhs: &[T],
    lhs_pad: Trailing<'_, T>,
    rhs_pad: Trailing<'_, T>,
    cmp: F,
) -> Divergence
where
    F: Fn(&T, &T) -> Ordering,
{
    let common = lhs.len().min(rhs.len());
    for (index, (a, b)) in lhs.iter().zip(rhs).enumerate() {
        let ordering = cmp(a, b);
        if ordering != Ordering::Equal {
            return Divergence { ordering, index };
        }
    }

    if let Trailing::With(empty) = rhs_pad {
        for (index, a) in lhs.iter().enumerate().skip(common) {
            let ordering = cmp(a, empty);
            if ordering != Ordering::Equal {
                return Divergence { ordering, index };
            }
        }
    }

    if let Trailing::With(empty) = lhs_pad {
        for (index, b) in rhs.iter().enumerate().skip(common) {
            let ordering = cmp(empty, b);
            if ordering != Ordering::Equal {
                return Divergence { ordering, index };
            }
        }
    }

    Divergence {
        ordering: Ordering::Equal,
        index: lhs.len().max(rhs.len()),
    }
}

/// [`compare_trailing`] with the same padding element on both sides.
pub(crate) fn compare_padded<T, F>(lhs: &[T], rhs: &[T], empty: &T, cmp: F) -> Divergence
where
    F: Fn(&T, &T) -> Ordering,
{
    compare_trailing(lhs, rhs, Trailing::With(empty), Trailing::With(empty), cmp)
}
