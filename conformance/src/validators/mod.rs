//! Conformance validators.
//!
//! `vocab` checks the static vocabulary tables for internal consistency;
//! `roundtrip` checks that the engine decodes and re-encodes documents
//! without loss.

pub mod roundtrip;
pub mod vocab;
