//! Object types.

use crate::model::{Kind, KindDecl};
use crate::properties as prop;

/// `Relationship`
pub static RELATIONSHIP: KindDecl = KindDecl {
    kind: Kind::Relationship,
    comment: "Describes a relationship between two individuals. The subject and object \
              properties are used to identify the connected individuals.",
    extends: &[Kind::Object],
    properties: &[&prop::OBJECT, &prop::RELATIONSHIP, &prop::SUBJECT],
    withholds: &[],
};

/// `Article`
pub static ARTICLE: KindDecl = KindDecl {
    kind: Kind::Article,
    comment: "Represents any kind of multi-paragraph written work.",
    extends: &[Kind::Object],
    properties: &[],
    withholds: &[],
};

/// `Document`
pub static DOCUMENT: KindDecl = KindDecl {
    kind: Kind::Document,
    comment: "Represents a document of any kind.",
    extends: &[Kind::Object],
    properties: &[],
    withholds: &[],
};

/// `Audio`
pub static AUDIO: KindDecl = KindDecl {
    kind: Kind::Audio,
    comment: "Represents an audio document of any kind.",
    extends: &[Kind::Document],
    properties: &[],
    withholds: &[],
};

/// `Image`
pub static IMAGE: KindDecl = KindDecl {
    kind: Kind::Image,
    comment: "An image document of any kind.",
    extends: &[Kind::Document],
    properties: &[],
    withholds: &[],
};

/// `Video`
pub static VIDEO: KindDecl = KindDecl {
    kind: Kind::Video,
    comment: "Represents a video document of any kind.",
    extends: &[Kind::Document],
    properties: &[],
    withholds: &[],
};

/// `Note`
pub static NOTE: KindDecl = KindDecl {
    kind: Kind::Note,
    comment: "Represents a short written work typically less than a single paragraph in \
              length.",
    extends: &[Kind::Object],
    properties: &[],
    withholds: &[],
};

/// `Page`
pub static PAGE: KindDecl = KindDecl {
    kind: Kind::Page,
    comment: "Represents a Web Page.",
    extends: &[Kind::Document],
    properties: &[],
    withholds: &[],
};

/// `Event`
pub static EVENT: KindDecl = KindDecl {
    kind: Kind::Event,
    comment: "Represents any kind of event.",
    extends: &[Kind::Object],
    properties: &[],
    withholds: &[],
};

/// `Place`
pub static PLACE: KindDecl = KindDecl {
    kind: Kind::Place,
    comment: "Represents a logical or physical location.",
    extends: &[Kind::Object],
    properties: &[
        &prop::ACCURACY,
        &prop::ALTITUDE,
        &prop::LATITUDE,
        &prop::LONGITUDE,
        &prop::RADIUS,
        &prop::UNITS,
    ],
    withholds: &[],
};

/// `Profile`
pub static PROFILE: KindDecl = KindDecl {
    kind: Kind::Profile,
    comment: "A Profile is a content object that describes another Object, typically used to \
              describe Actor Type objects.",
    extends: &[Kind::Object],
    properties: &[&prop::DESCRIBES],
    withholds: &[],
};

/// `Tombstone`
pub static TOMBSTONE: KindDecl = KindDecl {
    kind: Kind::Tombstone,
    comment: "A Tombstone represents a content object that has been deleted. It can be used \
              in Collections to signify that there used to be an object at this position, \
              but it has been deleted.",
    extends: &[Kind::Object],
    properties: &[&prop::DELETED, &prop::FORMER_TYPE],
    withholds: &[],
};
