//! Core types: the roots every other kind extends, plus collections.
//!
//! `IntransitiveActivity` is the one kind here that withholds an inherited
//! property: it carries the full Activity shape minus `object`.

use crate::model::{Kind, KindDecl};
use crate::properties as prop;

/// `Object`
pub static OBJECT: KindDecl = KindDecl {
    kind: Kind::Object,
    comment: "Describes an object of any kind. The Object type serves as the base type \
              for most of the other kinds of objects defined in the vocabulary.",
    extends: &[],
    properties: &[
        &prop::ID,
        &prop::ATTACHMENT,
        &prop::ATTRIBUTED_TO,
        &prop::AUDIENCE,
        &prop::BCC,
        &prop::BTO,
        &prop::CC,
        &prop::CONTENT,
        &prop::CONTEXT,
        &prop::DURATION,
        &prop::END_TIME,
        &prop::GENERATOR,
        &prop::ICON,
        &prop::IMAGE,
        &prop::IN_REPLY_TO,
        &prop::LIKES,
        &prop::LOCATION,
        &prop::MEDIA_TYPE,
        &prop::NAME,
        &prop::PREVIEW,
        &prop::PUBLISHED,
        &prop::REPLIES,
        &prop::SHARES,
        &prop::SOURCE,
        &prop::START_TIME,
        &prop::SUMMARY,
        &prop::TAG,
        &prop::TO,
        &prop::UPDATED,
        &prop::URL,
    ],
    withholds: &[],
};

/// `Link`
pub static LINK: KindDecl = KindDecl {
    kind: Kind::Link,
    comment: "A Link is an indirect, qualified reference to a resource identified by a URL.",
    extends: &[],
    properties: &[
        &prop::ID,
        &prop::ATTRIBUTED_TO,
        &prop::HEIGHT,
        &prop::HREF,
        &prop::HREFLANG,
        &prop::MEDIA_TYPE,
        &prop::NAME,
        &prop::PREVIEW,
        &prop::REL,
        &prop::SUMMARY,
        &prop::WIDTH,
    ],
    withholds: &[],
};

/// `Activity`
pub static ACTIVITY: KindDecl = KindDecl {
    kind: Kind::Activity,
    comment: "An Activity is a subtype of Object that describes some form of action that \
              may happen, is currently happening, or has already happened.",
    extends: &[Kind::Object],
    properties: &[
        &prop::ACTOR,
        &prop::INSTRUMENT,
        &prop::OBJECT,
        &prop::ORIGIN,
        &prop::RESULT,
        &prop::TARGET,
    ],
    withholds: &[],
};

/// `IntransitiveActivity`
pub static INTRANSITIVE_ACTIVITY: KindDecl = KindDecl {
    kind: Kind::IntransitiveActivity,
    comment: "Instances of IntransitiveActivity are a subtype of Activity representing \
              intransitive actions. The object property is therefore inappropriate for \
              these activities.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &["object"],
};

/// `Collection`
pub static COLLECTION: KindDecl = KindDecl {
    kind: Kind::Collection,
    comment: "A Collection is a subtype of Object that represents ordered or unordered \
              sets of Object or Link instances.",
    extends: &[Kind::Object],
    properties: &[&prop::CURRENT, &prop::FIRST, &prop::ITEMS, &prop::LAST, &prop::TOTAL_ITEMS],
    withholds: &[],
};

/// `OrderedCollection`
pub static ORDERED_COLLECTION: KindDecl = KindDecl {
    kind: Kind::OrderedCollection,
    comment: "A subtype of Collection in which members of the logical collection are \
              assumed to always be strictly ordered.",
    extends: &[Kind::Collection],
    properties: &[&prop::ORDERED_ITEMS],
    withholds: &[],
};

/// `CollectionPage`
pub static COLLECTION_PAGE: KindDecl = KindDecl {
    kind: Kind::CollectionPage,
    comment: "Used to represent distinct subsets of items from a Collection.",
    extends: &[Kind::Collection],
    properties: &[&prop::NEXT, &prop::PART_OF, &prop::PREV],
    withholds: &[],
};

/// `OrderedCollectionPage`
pub static ORDERED_COLLECTION_PAGE: KindDecl = KindDecl {
    kind: Kind::OrderedCollectionPage,
    comment: "Used to represent ordered subsets of items from an OrderedCollection.",
    extends: &[Kind::OrderedCollection, Kind::CollectionPage],
    properties: &[&prop::START_INDEX],
    withholds: &[],
};
