//! Round-trip validators: decode, re-encode, compare.

pub mod fixtures;
pub mod kinds;
