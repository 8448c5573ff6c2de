//! Vocabulary validators. These run against the live tables and need no
//! file I/O.

pub mod consistency;
pub mod inventory;
