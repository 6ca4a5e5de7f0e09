//! Conda version model: parsing, ordering and matching
//!
//! # Architecture
//!
//! ```text
//! "1!2.3rc1+cuda"  ──parse──▶  Version { epoch, version, local }
//!                                  │
//!                                  ▼
//!                            CommonVersion  (segments, `1.2.3`)
//!                                  │
//!                                  ▼
//!                             VersionPart   (atoms, `3rc1`)
//!                                  │
//!                                  ▼
//!                           VersionPartAtom (numeral + literal)
//! ```
//!
//! Comparison runs bottom-up: atoms compare by numeral then literal
//! priority, and parts and common versions reuse one padded lexicographic
//! algorithm (`trailing`) so that `1.2 == 1.2.0`.
//!
//! # Modules
//!
//! - [`atom`]: `VersionPartAtom` and literal priorities
//! - [`part`]: `VersionPart` and `CommonVersion`
//! - [`conda`]: `Version`, with `starts_with` and `compatible_with`
//! - [`parser`]: text to `Version`
//! - [`error`]: parse errors
//! - [`select`]: picking versions from candidate lists

pub mod atom;
pub mod conda;
pub mod error;
pub mod parser;
pub mod part;
pub mod select;
mod trailing;

pub use atom::VersionPartAtom;
pub use conda::Version;
pub use error::{FormatErrorReason, VersionError};
pub use parser::parse;
pub use part::{CommonVersion, VersionPart};
