//! Kind declarations, grouped by vocabulary area.
//!
//! Each sub-module encodes one area of the Activity Streams vocabulary as
//! static data. [`core`] must be read first: every other area extends one of
//! its kinds.

pub mod activity;
pub mod actor;
pub mod core;
pub mod link;
pub mod object;
