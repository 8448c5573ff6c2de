//! Core vocabulary model types.
//!
//! These types describe the Activity Streams 2.0 vocabulary as typed Rust
//! data: which document kinds exist, what each kind extends, and which
//! properties it declares together with the ordered list of alternatives a
//! property value may take. All declarations are `'static` tables; the
//! top-level entry point is [`Registry::global()`](crate::Registry::global).

use std::fmt;

use crate::kinds;

/// Full IRI prefix of the Activity Streams vocabulary.
pub const VOCABULARY_IRI: &str = "https://www.w3.org/ns/activitystreams#";

/// Compact prefix of the Activity Streams vocabulary.
pub const VOCABULARY_PREFIX: &str = "as:";

/// Every document kind in the vocabulary.
///
/// The set is closed: name lookup happens once at the wire boundary through
/// the [`Registry`](crate::Registry), and everything after that works with
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Kind {
    // core
    Object,
    Link,
    Activity,
    IntransitiveActivity,
    Collection,
    OrderedCollection,
    CollectionPage,
    OrderedCollectionPage,
    // activities
    Accept,
    TentativeAccept,
    Add,
    Create,
    Delete,
    Follow,
    Ignore,
    Join,
    Leave,
    Like,
    Offer,
    Invite,
    Reject,
    TentativeReject,
    Remove,
    Undo,
    Update,
    View,
    Listen,
    Read,
    Move,
    Announce,
    Block,
    Flag,
    Dislike,
    Arrive,
    Travel,
    Question,
    // actors
    Application,
    Group,
    Organization,
    Person,
    Service,
    // objects
    Relationship,
    Article,
    Document,
    Audio,
    Image,
    Video,
    Note,
    Page,
    Event,
    Place,
    Profile,
    Tombstone,
    // links
    Mention,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 54] = [
        Kind::Object,
        Kind::Link,
        Kind::Activity,
        Kind::IntransitiveActivity,
        Kind::Collection,
        Kind::OrderedCollection,
        Kind::CollectionPage,
        Kind::OrderedCollectionPage,
        Kind::Accept,
        Kind::TentativeAccept,
        Kind::Add,
        Kind::Create,
        Kind::Delete,
        Kind::Follow,
        Kind::Ignore,
        Kind::Join,
        Kind::Leave,
        Kind::Like,
        Kind::Offer,
        Kind::Invite,
        Kind::Reject,
        Kind::TentativeReject,
        Kind::Remove,
        Kind::Undo,
        Kind::Update,
        Kind::View,
        Kind::Listen,
        Kind::Read,
        Kind::Move,
        Kind::Announce,
        Kind::Block,
        Kind::Flag,
        Kind::Dislike,
        Kind::Arrive,
        Kind::Travel,
        Kind::Question,
        Kind::Application,
        Kind::Group,
        Kind::Organization,
        Kind::Person,
        Kind::Service,
        Kind::Relationship,
        Kind::Article,
        Kind::Document,
        Kind::Audio,
        Kind::Image,
        Kind::Video,
        Kind::Note,
        Kind::Page,
        Kind::Event,
        Kind::Place,
        Kind::Profile,
        Kind::Tombstone,
        Kind::Mention,
    ];

    /// Returns the type-tag spelling of this kind (e.g. `"Note"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Object => "Object",
            Kind::Link => "Link",
            Kind::Activity => "Activity",
            Kind::IntransitiveActivity => "IntransitiveActivity",
            Kind::Collection => "Collection",
            Kind::OrderedCollection => "OrderedCollection",
            Kind::CollectionPage => "CollectionPage",
            Kind::OrderedCollectionPage => "OrderedCollectionPage",
            Kind::Accept => "Accept",
            Kind::TentativeAccept => "TentativeAccept",
            Kind::Add => "Add",
            Kind::Create => "Create",
            Kind::Delete => "Delete",
            Kind::Follow => "Follow",
            Kind::Ignore => "Ignore",
            Kind::Join => "Join",
            Kind::Leave => "Leave",
            Kind::Like => "Like",
            Kind::Offer => "Offer",
            Kind::Invite => "Invite",
            Kind::Reject => "Reject",
            Kind::TentativeReject => "TentativeReject",
            Kind::Remove => "Remove",
            Kind::Undo => "Undo",
            Kind::Update => "Update",
            Kind::View => "View",
            Kind::Listen => "Listen",
            Kind::Read => "Read",
            Kind::Move => "Move",
            Kind::Announce => "Announce",
            Kind::Block => "Block",
            Kind::Flag => "Flag",
            Kind::Dislike => "Dislike",
            Kind::Arrive => "Arrive",
            Kind::Travel => "Travel",
            Kind::Question => "Question",
            Kind::Application => "Application",
            Kind::Group => "Group",
            Kind::Organization => "Organization",
            Kind::Person => "Person",
            Kind::Service => "Service",
            Kind::Relationship => "Relationship",
            Kind::Article => "Article",
            Kind::Document => "Document",
            Kind::Audio => "Audio",
            Kind::Image => "Image",
            Kind::Video => "Video",
            Kind::Note => "Note",
            Kind::Page => "Page",
            Kind::Event => "Event",
            Kind::Place => "Place",
            Kind::Profile => "Profile",
            Kind::Tombstone => "Tombstone",
            Kind::Mention => "Mention",
        }
    }

    /// Returns the full vocabulary IRI of this kind.
    #[must_use]
    pub fn iri(self) -> String {
        format!("{VOCABULARY_IRI}{}", self.name())
    }

    /// Returns the static declaration of this kind.
    #[must_use]
    pub fn decl(self) -> &'static KindDecl {
        match self {
            Kind::Object => &kinds::core::OBJECT,
            Kind::Link => &kinds::core::LINK,
            Kind::Activity => &kinds::core::ACTIVITY,
            Kind::IntransitiveActivity => &kinds::core::INTRANSITIVE_ACTIVITY,
            Kind::Collection => &kinds::core::COLLECTION,
            Kind::OrderedCollection => &kinds::core::ORDERED_COLLECTION,
            Kind::CollectionPage => &kinds::core::COLLECTION_PAGE,
            Kind::OrderedCollectionPage => &kinds::core::ORDERED_COLLECTION_PAGE,
            Kind::Accept => &kinds::activity::ACCEPT,
            Kind::TentativeAccept => &kinds::activity::TENTATIVE_ACCEPT,
            Kind::Add => &kinds::activity::ADD,
            Kind::Create => &kinds::activity::CREATE,
            Kind::Delete => &kinds::activity::DELETE,
            Kind::Follow => &kinds::activity::FOLLOW,
            Kind::Ignore => &kinds::activity::IGNORE,
            Kind::Join => &kinds::activity::JOIN,
            Kind::Leave => &kinds::activity::LEAVE,
            Kind::Like => &kinds::activity::LIKE,
            Kind::Offer => &kinds::activity::OFFER,
            Kind::Invite => &kinds::activity::INVITE,
            Kind::Reject => &kinds::activity::REJECT,
            Kind::TentativeReject => &kinds::activity::TENTATIVE_REJECT,
            Kind::Remove => &kinds::activity::REMOVE,
            Kind::Undo => &kinds::activity::UNDO,
            Kind::Update => &kinds::activity::UPDATE,
            Kind::View => &kinds::activity::VIEW,
            Kind::Listen => &kinds::activity::LISTEN,
            Kind::Read => &kinds::activity::READ,
            Kind::Move => &kinds::activity::MOVE,
            Kind::Announce => &kinds::activity::ANNOUNCE,
            Kind::Block => &kinds::activity::BLOCK,
            Kind::Flag => &kinds::activity::FLAG,
            Kind::Dislike => &kinds::activity::DISLIKE,
            Kind::Arrive => &kinds::activity::ARRIVE,
            Kind::Travel => &kinds::activity::TRAVEL,
            Kind::Question => &kinds::activity::QUESTION,
            Kind::Application => &kinds::actor::APPLICATION,
            Kind::Group => &kinds::actor::GROUP,
            Kind::Organization => &kinds::actor::ORGANIZATION,
            Kind::Person => &kinds::actor::PERSON,
            Kind::Service => &kinds::actor::SERVICE,
            Kind::Relationship => &kinds::object::RELATIONSHIP,
            Kind::Article => &kinds::object::ARTICLE,
            Kind::Document => &kinds::object::DOCUMENT,
            Kind::Audio => &kinds::object::AUDIO,
            Kind::Image => &kinds::object::IMAGE,
            Kind::Video => &kinds::object::VIDEO,
            Kind::Note => &kinds::object::NOTE,
            Kind::Page => &kinds::object::PAGE,
            Kind::Event => &kinds::object::EVENT,
            Kind::Place => &kinds::object::PLACE,
            Kind::Profile => &kinds::object::PROFILE,
            Kind::Tombstone => &kinds::object::TOMBSTONE,
            Kind::Mention => &kinds::link::MENTION,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One alternative shape a property value may take.
///
/// A property declares an ordered slice of ranges; resolution tries them in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// A nested document whose kind is, or extends, the given kind.
    Kind(Kind),
    /// A bare absolute IRI reference (`xsd:anyURI`).
    Iri,
    /// `xsd:string`.
    String,
    /// `rdf:langString`: a map of language tag to string.
    LangString,
    /// `xsd:dateTime` in RFC 3339 form.
    DateTime,
    /// `xsd:duration` in ISO 8601 form.
    Duration,
    /// `xsd:float`.
    Float,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// An RFC 2045 MIME media type.
    MediaType,
    /// A BCP 47 language tag.
    LanguageTag,
    /// An RFC 5988 link relation.
    LinkRelation,
}

impl Range {
    /// Returns `true` for nested-document alternatives.
    #[must_use]
    pub fn is_kind(self) -> bool {
        matches!(self, Range::Kind(_))
    }

    /// Returns the compact datatype name used in diagnostics and inventories.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Range::Kind(kind) => kind.name(),
            Range::Iri => "xsd:anyURI",
            Range::String => "xsd:string",
            Range::LangString => "rdf:langString",
            Range::DateTime => "xsd:dateTime",
            Range::Duration => "xsd:duration",
            Range::Float => "xsd:float",
            Range::Boolean => "xsd:boolean",
            Range::NonNegativeInteger => "xsd:nonNegativeInteger",
            Range::MediaType => "rfc2045",
            Range::LanguageTag => "bcp47",
            Range::LinkRelation => "rfc5988",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property declaration.
#[derive(Debug)]
pub struct PropertyDecl {
    /// Wire key (e.g. `"attributedTo"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Whether a `<name>Map` language map accompanies the property.
    pub localized: bool,
    /// Alternatives in resolution priority order.
    pub range: &'static [Range],
}

impl PropertyDecl {
    /// Returns the wire key of the companion language map, if any.
    #[must_use]
    pub fn map_key(&self) -> Option<String> {
        self.localized.then(|| format!("{}Map", self.name))
    }

    /// Iterates over the nested-document alternatives, in priority order.
    pub fn kind_ranges(&self) -> impl Iterator<Item = Kind> + '_ {
        self.range.iter().filter_map(|r| match r {
            Range::Kind(kind) => Some(*kind),
            _ => None,
        })
    }
}

/// A document kind declaration.
#[derive(Debug)]
pub struct KindDecl {
    /// The kind being declared.
    pub kind: Kind,
    /// Description.
    pub comment: &'static str,
    /// Direct parent kinds.
    pub extends: &'static [Kind],
    /// Properties introduced by this kind (inherited ones are not repeated).
    pub properties: &'static [&'static PropertyDecl],
    /// Inherited property names this kind must behave as if it lacked.
    pub withholds: &'static [&'static str],
}
