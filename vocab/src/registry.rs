//! Process-wide type registry.
//!
//! The registry maps type-tag spellings to [`Kind`]s and caches, per kind,
//! the flattened view of its declarations: ancestry, effective property list
//! (inherited first, in declaration order, minus withheld properties) and
//! wire-key indexes. It is built once and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::model::{Kind, PropertyDecl, VOCABULARY_IRI, VOCABULARY_PREFIX};

/// Flattened, per-kind view of the vocabulary.
#[derive(Debug)]
pub struct KindInfo {
    /// The kind itself followed by every ancestor, nearest first, no repeats.
    pub lineage: Vec<Kind>,
    /// Effective properties in serialization order.
    pub properties: Vec<&'static PropertyDecl>,
    /// Property names withheld anywhere along the lineage.
    pub withholds: Vec<&'static str>,
    by_name: HashMap<&'static str, usize>,
    by_map_key: HashMap<String, usize>,
}

impl KindInfo {
    fn build(kind: Kind) -> Self {
        let lineage = lineage(kind);

        let mut withholds: Vec<&'static str> = Vec::new();
        for ancestor in &lineage {
            for name in ancestor.decl().withholds {
                if !withholds.contains(name) {
                    withholds.push(name);
                }
            }
        }

        // Root-most ancestors contribute first so that `id` leads every kind.
        let mut properties: Vec<&'static PropertyDecl> = Vec::new();
        for ancestor in lineage.iter().rev() {
            for decl in ancestor.decl().properties {
                let seen = properties.iter().any(|p| p.name == decl.name);
                if !seen && !withholds.contains(&decl.name) {
                    properties.push(decl);
                }
            }
        }

        let by_name = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name, i))
            .collect();
        let by_map_key = properties
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map_key().map(|key| (key, i)))
            .collect();

        Self {
            lineage,
            properties,
            withholds,
            by_name,
            by_map_key,
        }
    }

    /// Returns the position of the named property in [`KindInfo::properties`].
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns the position of the property whose language map uses `key`.
    #[must_use]
    pub fn index_of_map(&self, key: &str) -> Option<usize> {
        self.by_map_key.get(key).copied()
    }

    /// Returns `true` if `name` is withheld by this kind.
    #[must_use]
    pub fn withholds(&self, name: &str) -> bool {
        self.withholds.iter().any(|w| *w == name)
    }
}

/// Computes `kind` plus its ancestors in breadth-first order.
fn lineage(kind: Kind) -> Vec<Kind> {
    let mut out = vec![kind];
    let mut cursor = 0;
    while cursor < out.len() {
        for parent in out[cursor].decl().extends {
            if !out.contains(parent) {
                out.push(*parent);
            }
        }
        cursor += 1;
    }
    out
}

/// Read-only registry of every document kind.
#[derive(Debug)]
pub struct Registry {
    by_name: HashMap<&'static str, Kind>,
    // Indexed by discriminant; `Kind::ALL` is in declaration order.
    info: Vec<KindInfo>,
}

impl Registry {
    /// Builds a registry from [`Kind::ALL`].
    #[must_use]
    pub fn new() -> Self {
        let by_name = Kind::ALL.iter().map(|k| (k.name(), *k)).collect();
        let info = Kind::ALL.iter().map(|k| KindInfo::build(*k)).collect();
        Self { by_name, info }
    }

    /// Returns the process-wide registry, building it on first use.
    #[must_use]
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Looks up a kind by type-tag spelling. Accepts the bare name (`Note`),
    /// the compact form (`as:Note`) and the full vocabulary IRI.
    #[must_use]
    pub fn lookup(&self, type_name: &str) -> Option<Kind> {
        let local = type_name
            .strip_prefix(VOCABULARY_IRI)
            .or_else(|| type_name.strip_prefix(VOCABULARY_PREFIX))
            .unwrap_or(type_name);
        self.by_name.get(local).copied()
    }

    /// Resolves `type_name` to a kind that is, or extends, `capability`.
    ///
    /// Returns `None` if the name is unknown or the kind lacks the capability.
    #[must_use]
    pub fn resolve(&self, type_name: &str, capability: Kind) -> Option<Kind> {
        self.lookup(type_name)
            .filter(|kind| self.satisfies(*kind, capability))
    }

    /// Returns `true` if `kind` is, or extends, `capability`.
    #[must_use]
    pub fn satisfies(&self, kind: Kind, capability: Kind) -> bool {
        self.info(kind).lineage.contains(&capability)
    }

    /// Returns the flattened view of `kind`.
    #[must_use]
    pub fn info(&self, kind: Kind) -> &KindInfo {
        &self.info[kind as usize]
    }

    /// Iterates over every kind that is, or extends, `capability`.
    pub fn kinds_with(&self, capability: Kind) -> impl Iterator<Item = Kind> + '_ {
        Kind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.satisfies(*kind, capability))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_discriminant_order() {
        for (i, kind) in Kind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i, "{kind} out of order");
        }
    }

    #[test]
    fn every_kind_is_registered_by_name() {
        let registry = Registry::global();
        for kind in Kind::ALL {
            assert_eq!(registry.lookup(kind.name()), Some(kind));
        }
    }

    #[test]
    fn compact_and_full_iri_forms_resolve() {
        let registry = Registry::global();
        assert_eq!(registry.lookup("as:Note"), Some(Kind::Note));
        assert_eq!(
            registry.lookup("https://www.w3.org/ns/activitystreams#Person"),
            Some(Kind::Person)
        );
        assert_eq!(registry.lookup("Other"), None);
        assert_eq!(registry.lookup("as:Other"), None);
    }

    #[test]
    fn capability_filters_matches() {
        let registry = Registry::global();
        assert_eq!(registry.resolve("Note", Kind::Object), Some(Kind::Note));
        assert_eq!(registry.resolve("Note", Kind::Link), None);
        assert_eq!(registry.resolve("Mention", Kind::Link), Some(Kind::Mention));
        assert_eq!(registry.resolve("Image", Kind::Image), Some(Kind::Image));
        assert_eq!(registry.resolve("Video", Kind::Image), None);
        assert_eq!(registry.resolve("Nope", Kind::Object), None);
    }

    #[test]
    fn lineage_handles_multiple_parents() {
        let info = Registry::global().info(Kind::OrderedCollectionPage);
        assert_eq!(info.lineage[0], Kind::OrderedCollectionPage);
        for ancestor in [
            Kind::OrderedCollection,
            Kind::CollectionPage,
            Kind::Collection,
            Kind::Object,
        ] {
            assert!(info.lineage.contains(&ancestor), "missing {ancestor}");
        }
        let collections = info.lineage.iter().filter(|k| **k == Kind::Collection).count();
        assert_eq!(collections, 1);
    }

    #[test]
    fn inherited_properties_come_first() {
        let info = Registry::global().info(Kind::Create);
        assert_eq!(info.properties[0].name, "id");
        assert!(info.index_of("actor").is_some());
        assert!(info.index_of("name").unwrap() < info.index_of("actor").unwrap());
    }

    #[test]
    fn withheld_property_is_absent_from_effective_list() {
        let registry = Registry::global();
        for kind in [Kind::IntransitiveActivity, Kind::Arrive, Kind::Travel, Kind::Question] {
            let info = registry.info(kind);
            assert!(info.withholds("object"), "{kind} should withhold object");
            assert!(info.index_of("object").is_none());
            assert!(info.index_of("actor").is_some());
        }
        assert!(registry.info(Kind::Create).index_of("object").is_some());
    }

    #[test]
    fn map_keys_index_localized_properties() {
        let info = Registry::global().info(Kind::Note);
        let name = info.index_of("name");
        assert!(name.is_some());
        assert_eq!(info.index_of_map("nameMap"), name);
        assert!(info.index_of_map("idMap").is_none());
    }

    #[test]
    fn kinds_with_link_capability() {
        let links: Vec<Kind> = Registry::global().kinds_with(Kind::Link).collect();
        assert_eq!(links, vec![Kind::Link, Kind::Mention]);
    }
}
