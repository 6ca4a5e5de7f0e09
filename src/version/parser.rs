//! Version string parser
//!
//! Grammar:
//!
//! ```text
//! version := [epoch "!"] segment (delim segment)* ["+" segment (delim segment)*]
//! delim   := "." | "-" | "_"
//! segment := atom+
//! atom    := [digits] [non-digits]
//! ```
//!
//! `-` and `_` cannot be mixed in one version, except for a single trailing
//! `_` which is part of the last segment rather than a delimiter.

use crate::version::atom::VersionPartAtom;
use crate::version::conda::Version;
use crate::version::error::{FormatErrorReason, VersionError};
use crate::version::part::{CommonVersion, VersionPart};

const PART_DELIMS: [char; 3] = [
    Version::PART_DELIM,
    Version::PART_DELIM_ALT,
    Version::PART_DELIM_SPECIAL,
];

/// Parse a version string into a [`Version`].
///
/// Surrounding whitespace is ignored. Parsing is all-or-nothing: any
/// malformed piece rejects the whole input.
pub fn parse(input: &str) -> Result<Version, VersionError> {
    let input = input.trim();
    parse_trimmed(input).map_err(|reason| VersionError::invalid(input, reason))
}

fn parse_trimmed(input: &str) -> Result<Version, FormatErrorReason> {
    let (epoch, version_and_local) = parse_leading_epoch(input)?;
    let (version_str, local) = parse_trailing_local(version_and_local)?;
    if version_str.is_empty() {
        return Err(FormatErrorReason::EmptyVersion);
    }
    let version = parse_common_version(version_str)?;
    Ok(Version::new(epoch, version, local))
}

fn parse_leading_epoch(input: &str) -> Result<(u64, &str), FormatErrorReason> {
    let Some((epoch_str, rest)) = input.split_once(Version::EPOCH_DELIM) else {
        return Ok((0, input));
    };
    if epoch_str.is_empty() {
        return Err(FormatErrorReason::EmptyEpoch);
    }
    let invalid = || FormatErrorReason::InvalidEpoch(epoch_str.to_string());
    if !epoch_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let epoch = epoch_str.parse::<u64>().map_err(|_| invalid())?;
    Ok((epoch, rest))
}

fn parse_trailing_local(input: &str) -> Result<(&str, CommonVersion), FormatErrorReason> {
    let Some((version_str, local_str)) = input.rsplit_once(Version::LOCAL_DELIM) else {
        return Ok((input, CommonVersion::default()));
    };
    if local_str.is_empty() {
        return Err(FormatErrorReason::EmptyLocal);
    }
    Ok((version_str, parse_common_version(local_str)?))
}

fn check_common_version(input: &str) -> Result<(), FormatErrorReason> {
    let has_alt = input.contains(Version::PART_DELIM_ALT);
    let has_inner_special = input
        .find(Version::PART_DELIM_SPECIAL)
        .is_some_and(|pos| pos + 1 < input.len());
    if has_alt && has_inner_special {
        return Err(FormatErrorReason::MixedDelimiters(input.to_string()));
    }

    // `*` shows up in real package metadata, so it is accepted as a literal.
    let allowed = |c: char| c.is_ascii_alphanumeric() || PART_DELIMS.contains(&c) || c == '*';
    if !input.chars().all(allowed) {
        return Err(FormatErrorReason::InvalidCharacters(input.to_string()));
    }
    Ok(())
}

/// Position of the next segment delimiter, ignoring a `_` that ends the string.
fn find_part_delim(tail: &str) -> Option<usize> {
    tail.find(PART_DELIMS).filter(|&pos| {
        !(pos + 1 == tail.len() && tail[pos..].starts_with(Version::PART_DELIM_SPECIAL))
    })
}

fn parse_common_version(input: &str) -> Result<CommonVersion, FormatErrorReason> {
    check_common_version(input)?;

    let empty_part = || FormatErrorReason::EmptyPart(input.to_string());
    let mut parts = Vec::new();
    let mut tail = input;
    loop {
        match find_part_delim(tail) {
            Some(pos) if pos == 0 || pos + 1 == tail.len() => return Err(empty_part()),
            Some(pos) => {
                parts.push(parse_part(&tail[..pos])?);
                tail = &tail[pos + 1..];
            }
            None if tail.is_empty() => return Err(empty_part()),
            None => {
                parts.push(parse_part(tail)?);
                break;
            }
        }
    }
    Ok(CommonVersion::new(parts))
}

fn parse_part(segment: &str) -> Result<VersionPart, FormatErrorReason> {
    let mut atoms = Vec::new();
    let mut tail = segment;
    while !tail.is_empty() {
        let (atom, rest) = parse_leading_atom(tail)?;
        atoms.push(atom);
        tail = rest;
    }
    Ok(VersionPart::new(atoms))
}

/// Peel one atom (digit run, then non-digit run) off the front of `input`.
fn parse_leading_atom(input: &str) -> Result<(VersionPartAtom, &str), FormatErrorReason> {
    let (digits, rest) = split_leading(input, |c| c.is_ascii_digit());
    let numeral = if digits.is_empty() {
        0
    } else {
        digits
            .parse::<u64>()
            .map_err(|_| FormatErrorReason::NumeralOverflow(digits.to_string()))?
    };
    let (literal, rest) = split_leading(rest, |c| !c.is_ascii_digit());
    Ok((VersionPartAtom::with_literal(numeral, literal), rest))
}

fn split_leading(input: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = input.find(|c: char| !pred(c)).unwrap_or(input.len());
    input.split_at(end)
}
