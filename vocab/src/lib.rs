//! Activity Streams 2.0 vocabulary encoded as typed Rust data.
//!
//! The `astreams-vocab` crate provides every document kind of the Activity
//! Streams core and extended vocabulary (plus the ActivityPub actor
//! endpoints) as static declarations, and a read-only [`Registry`] that
//! resolves type-tag spellings to kinds and flattens inheritance.
//!
//! # Entry Point
//!
//! ```
//! use astreams_vocab::{Kind, Registry};
//!
//! let registry = Registry::global();
//! assert_eq!(registry.lookup("Note"), Some(Kind::Note));
//! assert!(registry.satisfies(Kind::Note, Kind::Object));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod kinds;
pub mod model;
pub mod properties;
pub mod registry;

pub use model::{Kind, KindDecl, PropertyDecl, Range};
pub use registry::{KindInfo, Registry};

impl Kind {
    /// Returns `true` if this kind is, or extends, `capability`.
    #[must_use]
    pub fn is_a(self, capability: Kind) -> bool {
        Registry::global().satisfies(self, capability)
    }

    /// Returns this kind's ancestors, nearest first, excluding itself.
    #[must_use]
    pub fn ancestors(self) -> &'static [Kind] {
        &Registry::global().info(self).lineage[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_count() {
        assert_eq!(Kind::ALL.len(), 54);
    }

    #[test]
    fn every_kind_declares_itself() {
        for kind in Kind::ALL {
            assert_eq!(kind.decl().kind, kind);
        }
    }

    #[test]
    fn all_kinds_descend_from_object_or_link() {
        for kind in Kind::ALL {
            assert!(
                kind.is_a(Kind::Object) || kind.is_a(Kind::Link),
                "{kind} is rooted nowhere"
            );
        }
    }

    #[test]
    fn property_names_unique_per_kind() {
        let registry = Registry::global();
        for kind in Kind::ALL {
            let mut names = std::collections::HashSet::new();
            for prop in &registry.info(kind).properties {
                assert!(names.insert(prop.name), "{kind} repeats {}", prop.name);
            }
        }
    }

    #[test]
    fn ancestors_exclude_self() {
        assert_eq!(Kind::Object.ancestors(), &[] as &[Kind]);
        assert_eq!(Kind::TentativeAccept.ancestors()[0], Kind::Accept);
        assert!(Kind::Question.ancestors().contains(&Kind::Activity));
    }
}
