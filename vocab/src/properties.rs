//! Property declarations shared by the kind tables.
//!
//! Each property is declared once and referenced by every kind that
//! introduces it. Range order is resolution priority: nested kinds first,
//! then the bare reference, then literals, mirroring how values are tried on
//! the way in.

use crate::model::{Kind, PropertyDecl, Range};

/// Object, Link, or a bare reference: the range of most relational properties.
const OBJECT_OR_LINK: &[Range] = &[Range::Kind(Kind::Object), Range::Kind(Kind::Link), Range::Iri];

/// A collection or a reference to one.
const COLLECTION: &[Range] = &[Range::Kind(Kind::Collection), Range::Iri];

/// A page, a link to one, or a reference to one.
const PAGE_OR_LINK: &[Range] = &[
    Range::Kind(Kind::CollectionPage),
    Range::Kind(Kind::Link),
    Range::Iri,
];

/// An image, a link to one, or a reference to one.
const IMAGE_OR_LINK: &[Range] = &[Range::Kind(Kind::Image), Range::Kind(Kind::Link), Range::Iri];

/// A natural-language string, optionally with a per-language variant map.
const TEXT: &[Range] = &[Range::String, Range::LangString];

// ---------------------------------------------------------------------------
// Object
// ---------------------------------------------------------------------------

/// `id`
pub static ID: PropertyDecl = PropertyDecl {
    name: "id",
    comment: "Provides the globally unique identifier for an Object or Link.",
    functional: true,
    localized: false,
    range: &[Range::Iri],
};

/// `attachment`
pub static ATTACHMENT: PropertyDecl = PropertyDecl {
    name: "attachment",
    comment: "Identifies a resource attached or related to an object that potentially \
              requires special handling.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `attributedTo`
pub static ATTRIBUTED_TO: PropertyDecl = PropertyDecl {
    name: "attributedTo",
    comment: "Identifies one or more entities to which this object is attributed.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `audience`
pub static AUDIENCE: PropertyDecl = PropertyDecl {
    name: "audience",
    comment: "Identifies one or more entities that represent the total population of \
              entities for which the object can be considered to be relevant.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `bcc`
pub static BCC: PropertyDecl = PropertyDecl {
    name: "bcc",
    comment: "Identifies one or more Objects that are part of the private secondary \
              audience of this Object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `bto`
pub static BTO: PropertyDecl = PropertyDecl {
    name: "bto",
    comment: "Identifies an Object that is part of the private primary audience of this Object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `cc`
pub static CC: PropertyDecl = PropertyDecl {
    name: "cc",
    comment: "Identifies an Object that is part of the public secondary audience of this Object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `content`
pub static CONTENT: PropertyDecl = PropertyDecl {
    name: "content",
    comment: "The content or textual representation of the Object encoded as a JSON string.",
    functional: false,
    localized: true,
    range: TEXT,
};

/// `context`
pub static CONTEXT: PropertyDecl = PropertyDecl {
    name: "context",
    comment: "Identifies the context within which the object exists or an activity was performed.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `duration`
pub static DURATION: PropertyDecl = PropertyDecl {
    name: "duration",
    comment: "When the object describes a time-bound resource, the approximate duration \
              of the resource.",
    functional: true,
    localized: false,
    range: &[Range::Duration],
};

/// `endTime`
pub static END_TIME: PropertyDecl = PropertyDecl {
    name: "endTime",
    comment: "The date and time describing the actual or expected ending time of the object.",
    functional: true,
    localized: false,
    range: &[Range::DateTime],
};

/// `generator`
pub static GENERATOR: PropertyDecl = PropertyDecl {
    name: "generator",
    comment: "Identifies the entity that generated the object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `icon`
pub static ICON: PropertyDecl = PropertyDecl {
    name: "icon",
    comment: "Indicates an entity that describes an icon for this object.",
    functional: false,
    localized: false,
    range: IMAGE_OR_LINK,
};

/// `image`
pub static IMAGE: PropertyDecl = PropertyDecl {
    name: "image",
    comment: "Indicates an entity that describes an image for this object.",
    functional: false,
    localized: false,
    range: IMAGE_OR_LINK,
};

/// `inReplyTo`
pub static IN_REPLY_TO: PropertyDecl = PropertyDecl {
    name: "inReplyTo",
    comment: "Indicates one or more entities for which this object is considered a response.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `location`
pub static LOCATION: PropertyDecl = PropertyDecl {
    name: "location",
    comment: "Indicates one or more physical or logical locations associated with the object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `mediaType`
pub static MEDIA_TYPE: PropertyDecl = PropertyDecl {
    name: "mediaType",
    comment: "Identifies the MIME media type of the referenced resource.",
    functional: true,
    localized: false,
    range: &[Range::MediaType],
};

/// `name`
pub static NAME: PropertyDecl = PropertyDecl {
    name: "name",
    comment: "A simple, human-readable, plain-text name for the object.",
    functional: false,
    localized: true,
    range: TEXT,
};

/// `preview`
pub static PREVIEW: PropertyDecl = PropertyDecl {
    name: "preview",
    comment: "Identifies an entity that provides a preview of this object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `published`
pub static PUBLISHED: PropertyDecl = PropertyDecl {
    name: "published",
    comment: "The date and time at which the object was published.",
    functional: true,
    localized: false,
    range: &[Range::DateTime],
};

/// `replies`
pub static REPLIES: PropertyDecl = PropertyDecl {
    name: "replies",
    comment: "Identifies a Collection containing objects considered to be responses to this object.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `startTime`
pub static START_TIME: PropertyDecl = PropertyDecl {
    name: "startTime",
    comment: "The date and time describing the actual or expected starting time of the object.",
    functional: true,
    localized: false,
    range: &[Range::DateTime],
};

/// `summary`
pub static SUMMARY: PropertyDecl = PropertyDecl {
    name: "summary",
    comment: "A natural language summarization of the object encoded as HTML.",
    functional: false,
    localized: true,
    range: TEXT,
};

/// `tag`
pub static TAG: PropertyDecl = PropertyDecl {
    name: "tag",
    comment: "One or more tags that have been associated with an object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `to`
pub static TO: PropertyDecl = PropertyDecl {
    name: "to",
    comment: "Identifies an entity considered to be part of the public primary audience of an Object.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `updated`
pub static UPDATED: PropertyDecl = PropertyDecl {
    name: "updated",
    comment: "The date and time at which the object was updated.",
    functional: true,
    localized: false,
    range: &[Range::DateTime],
};

/// `url`
pub static URL: PropertyDecl = PropertyDecl {
    name: "url",
    comment: "Identifies one or more links to representations of the object.",
    functional: false,
    localized: false,
    range: &[Range::Iri, Range::Kind(Kind::Link)],
};

/// `likes`
pub static LIKES: PropertyDecl = PropertyDecl {
    name: "likes",
    comment: "A collection of Like activities received by this object.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `shares`
pub static SHARES: PropertyDecl = PropertyDecl {
    name: "shares",
    comment: "A collection of Announce activities received by this object.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `source`
pub static SOURCE: PropertyDecl = PropertyDecl {
    name: "source",
    comment: "The source from which the content markup was derived.",
    functional: true,
    localized: false,
    range: &[Range::Kind(Kind::Object), Range::Iri],
};

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// `href`
pub static HREF: PropertyDecl = PropertyDecl {
    name: "href",
    comment: "The target resource pointed to by a Link.",
    functional: true,
    localized: false,
    range: &[Range::Iri],
};

/// `rel`
pub static REL: PropertyDecl = PropertyDecl {
    name: "rel",
    comment: "A link relation associated with a Link.",
    functional: false,
    localized: false,
    range: &[Range::LinkRelation],
};

/// `hreflang`
pub static HREFLANG: PropertyDecl = PropertyDecl {
    name: "hreflang",
    comment: "Hints as to the language used by the target resource.",
    functional: true,
    localized: false,
    range: &[Range::LanguageTag],
};

/// `height`
pub static HEIGHT: PropertyDecl = PropertyDecl {
    name: "height",
    comment: "A hint as to the rendering height in device-independent pixels of the linked resource.",
    functional: true,
    localized: false,
    range: &[Range::NonNegativeInteger],
};

/// `width`
pub static WIDTH: PropertyDecl = PropertyDecl {
    name: "width",
    comment: "A hint as to the rendering width in device-independent pixels of the linked resource.",
    functional: true,
    localized: false,
    range: &[Range::NonNegativeInteger],
};

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// `actor`
pub static ACTOR: PropertyDecl = PropertyDecl {
    name: "actor",
    comment: "Describes one or more entities that either performed or are expected to \
              perform the activity.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `object`
pub static OBJECT: PropertyDecl = PropertyDecl {
    name: "object",
    comment: "Describes an object of any kind; the direct object of an activity, or the \
              object of a relationship.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `target`
pub static TARGET: PropertyDecl = PropertyDecl {
    name: "target",
    comment: "Describes the indirect object, or target, of the activity.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `result`
pub static RESULT: PropertyDecl = PropertyDecl {
    name: "result",
    comment: "Describes the result of the activity.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `origin`
pub static ORIGIN: PropertyDecl = PropertyDecl {
    name: "origin",
    comment: "Describes an indirect object of the activity from which the activity is directed.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `instrument`
pub static INSTRUMENT: PropertyDecl = PropertyDecl {
    name: "instrument",
    comment: "Identifies one or more objects used (or to be used) in the completion of an Activity.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `oneOf`
pub static ONE_OF: PropertyDecl = PropertyDecl {
    name: "oneOf",
    comment: "Identifies an exclusive option for a Question.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `anyOf`
pub static ANY_OF: PropertyDecl = PropertyDecl {
    name: "anyOf",
    comment: "Identifies an inclusive option for a Question.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `closed`
pub static CLOSED: PropertyDecl = PropertyDecl {
    name: "closed",
    comment: "Indicates that a question has been closed, and answers are no longer accepted.",
    functional: false,
    localized: false,
    range: &[
        Range::Kind(Kind::Object),
        Range::Kind(Kind::Link),
        Range::DateTime,
        Range::Boolean,
        Range::Iri,
    ],
};

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// `totalItems`
pub static TOTAL_ITEMS: PropertyDecl = PropertyDecl {
    name: "totalItems",
    comment: "The total number of items in a logical view of the collection.",
    functional: true,
    localized: false,
    range: &[Range::NonNegativeInteger],
};

/// `current`
pub static CURRENT: PropertyDecl = PropertyDecl {
    name: "current",
    comment: "The page that contains the most recently updated member items.",
    functional: true,
    localized: false,
    range: PAGE_OR_LINK,
};

/// `first`
pub static FIRST: PropertyDecl = PropertyDecl {
    name: "first",
    comment: "The furthest preceding page of items in the collection.",
    functional: true,
    localized: false,
    range: PAGE_OR_LINK,
};

/// `last`
pub static LAST: PropertyDecl = PropertyDecl {
    name: "last",
    comment: "The furthest proceeding page of the collection.",
    functional: true,
    localized: false,
    range: PAGE_OR_LINK,
};

/// `items`
pub static ITEMS: PropertyDecl = PropertyDecl {
    name: "items",
    comment: "Identifies the items contained in a collection.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `orderedItems`
pub static ORDERED_ITEMS: PropertyDecl = PropertyDecl {
    name: "orderedItems",
    comment: "Identifies the items contained in an ordered collection, in order.",
    functional: false,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `partOf`
pub static PART_OF: PropertyDecl = PropertyDecl {
    name: "partOf",
    comment: "Identifies the Collection to which a CollectionPage objects items belong.",
    functional: true,
    localized: false,
    range: &[Range::Kind(Kind::Collection), Range::Kind(Kind::Link), Range::Iri],
};

/// `next`
pub static NEXT: PropertyDecl = PropertyDecl {
    name: "next",
    comment: "Indicates the next page of items.",
    functional: true,
    localized: false,
    range: PAGE_OR_LINK,
};

/// `prev`
pub static PREV: PropertyDecl = PropertyDecl {
    name: "prev",
    comment: "Identifies the previous page of items.",
    functional: true,
    localized: false,
    range: PAGE_OR_LINK,
};

/// `startIndex`
pub static START_INDEX: PropertyDecl = PropertyDecl {
    name: "startIndex",
    comment: "A non-negative integer value identifying the relative position within the \
              logical view of a strictly ordered collection.",
    functional: true,
    localized: false,
    range: &[Range::NonNegativeInteger],
};

// ---------------------------------------------------------------------------
// Extended object types
// ---------------------------------------------------------------------------

/// `accuracy`
pub static ACCURACY: PropertyDecl = PropertyDecl {
    name: "accuracy",
    comment: "Indicates the accuracy of position coordinates on a Place objects, in percent.",
    functional: true,
    localized: false,
    range: &[Range::Float],
};

/// `altitude`
pub static ALTITUDE: PropertyDecl = PropertyDecl {
    name: "altitude",
    comment: "Indicates the altitude of a place, in `units`.",
    functional: true,
    localized: false,
    range: &[Range::Float],
};

/// `latitude`
pub static LATITUDE: PropertyDecl = PropertyDecl {
    name: "latitude",
    comment: "The latitude of a place.",
    functional: true,
    localized: false,
    range: &[Range::Float],
};

/// `longitude`
pub static LONGITUDE: PropertyDecl = PropertyDecl {
    name: "longitude",
    comment: "The longitude of a place.",
    functional: true,
    localized: false,
    range: &[Range::Float],
};

/// `radius`
pub static RADIUS: PropertyDecl = PropertyDecl {
    name: "radius",
    comment: "The radius from the given latitude and longitude for a Place.",
    functional: true,
    localized: false,
    range: &[Range::Float],
};

/// `units`
pub static UNITS: PropertyDecl = PropertyDecl {
    name: "units",
    comment: "Specifies the measurement units for the radius and altitude properties.",
    functional: true,
    localized: false,
    range: &[Range::Iri, Range::String],
};

/// `describes`
pub static DESCRIBES: PropertyDecl = PropertyDecl {
    name: "describes",
    comment: "On a Profile object, identifies the object described by the Profile.",
    functional: true,
    localized: false,
    range: &[Range::Kind(Kind::Object), Range::Iri],
};

/// `subject`
pub static SUBJECT: PropertyDecl = PropertyDecl {
    name: "subject",
    comment: "On a Relationship object, identifies the subject.",
    functional: true,
    localized: false,
    range: OBJECT_OR_LINK,
};

/// `relationship`
pub static RELATIONSHIP: PropertyDecl = PropertyDecl {
    name: "relationship",
    comment: "On a Relationship object, describes the type of relationship.",
    functional: false,
    localized: false,
    range: &[Range::Kind(Kind::Object), Range::Iri],
};

/// `formerType`
pub static FORMER_TYPE: PropertyDecl = PropertyDecl {
    name: "formerType",
    comment: "On a Tombstone object, identifies the type of the object that was deleted.",
    functional: false,
    localized: false,
    range: &[Range::Kind(Kind::Object), Range::String],
};

/// `deleted`
pub static DELETED: PropertyDecl = PropertyDecl {
    name: "deleted",
    comment: "On a Tombstone object, indicates the date and time at which the object was deleted.",
    functional: true,
    localized: false,
    range: &[Range::DateTime],
};

// ---------------------------------------------------------------------------
// Actor endpoints
// ---------------------------------------------------------------------------

/// `inbox`
pub static INBOX: PropertyDecl = PropertyDecl {
    name: "inbox",
    comment: "A reference to an OrderedCollection comprised of all the messages received by the actor.",
    functional: true,
    localized: false,
    range: &[Range::Kind(Kind::OrderedCollection), Range::Iri],
};

/// `outbox`
pub static OUTBOX: PropertyDecl = PropertyDecl {
    name: "outbox",
    comment: "An OrderedCollection comprised of all the messages produced by the actor.",
    functional: true,
    localized: false,
    range: &[Range::Kind(Kind::OrderedCollection), Range::Iri],
};

/// `following`
pub static FOLLOWING: PropertyDecl = PropertyDecl {
    name: "following",
    comment: "A link to a collection of the actors that this actor is following.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `followers`
pub static FOLLOWERS: PropertyDecl = PropertyDecl {
    name: "followers",
    comment: "A link to a collection of the actors that follow this actor.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `liked`
pub static LIKED: PropertyDecl = PropertyDecl {
    name: "liked",
    comment: "A link to a collection of objects this actor has liked.",
    functional: true,
    localized: false,
    range: COLLECTION,
};

/// `streams`
pub static STREAMS: PropertyDecl = PropertyDecl {
    name: "streams",
    comment: "A list of supplementary Collections which may be of interest.",
    functional: false,
    localized: false,
    range: COLLECTION,
};

/// `preferredUsername`
pub static PREFERRED_USERNAME: PropertyDecl = PropertyDecl {
    name: "preferredUsername",
    comment: "A short username which may be used to refer to the actor, with no uniqueness guarantees.",
    functional: true,
    localized: true,
    range: TEXT,
};
