//! Actor types.
//!
//! Actors are ordinary objects that also expose the inbox/outbox endpoints
//! and social collections.

use crate::model::{Kind, KindDecl, PropertyDecl};
use crate::properties as prop;

/// Endpoint and collection properties every actor kind introduces.
static ACTOR_PROPERTIES: [&PropertyDecl; 7] = [
    &prop::FOLLOWERS,
    &prop::FOLLOWING,
    &prop::INBOX,
    &prop::LIKED,
    &prop::OUTBOX,
    &prop::PREFERRED_USERNAME,
    &prop::STREAMS,
];

/// `Application`
pub static APPLICATION: KindDecl = KindDecl {
    kind: Kind::Application,
    comment: "Describes a software application.",
    extends: &[Kind::Object],
    properties: &ACTOR_PROPERTIES,
    withholds: &[],
};

/// `Group`
pub static GROUP: KindDecl = KindDecl {
    kind: Kind::Group,
    comment: "Represents a formal or informal collective of Actors.",
    extends: &[Kind::Object],
    properties: &ACTOR_PROPERTIES,
    withholds: &[],
};

/// `Organization`
pub static ORGANIZATION: KindDecl = KindDecl {
    kind: Kind::Organization,
    comment: "Represents an organization.",
    extends: &[Kind::Object],
    properties: &ACTOR_PROPERTIES,
    withholds: &[],
};

/// `Person`
pub static PERSON: KindDecl = KindDecl {
    kind: Kind::Person,
    comment: "Represents an individual person.",
    extends: &[Kind::Object],
    properties: &ACTOR_PROPERTIES,
    withholds: &[],
};

/// `Service`
pub static SERVICE: KindDecl = KindDecl {
    kind: Kind::Service,
    comment: "Represents a service of any kind.",
    extends: &[Kind::Object],
    properties: &ACTOR_PROPERTIES,
    withholds: &[],
};
