//! Activity types.
//!
//! `Arrive`, `Travel` and `Question` extend `IntransitiveActivity` and
//! therefore inherit its withheld `object` property.

use crate::model::{Kind, KindDecl};
use crate::properties as prop;

/// `Accept`
pub static ACCEPT: KindDecl = KindDecl {
    kind: Kind::Accept,
    comment: "Indicates that the actor accepts the object. The target property can be used \
              in certain circumstances to indicate the context into which the object has \
              been accepted.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `TentativeAccept`
pub static TENTATIVE_ACCEPT: KindDecl = KindDecl {
    kind: Kind::TentativeAccept,
    comment: "A specialization of Accept indicating that the acceptance is tentative.",
    extends: &[Kind::Accept],
    properties: &[],
    withholds: &[],
};

/// `Add`
pub static ADD: KindDecl = KindDecl {
    kind: Kind::Add,
    comment: "Indicates that the actor has added the object to the target. If the target \
              property is not explicitly specified, the target would need to be determined \
              implicitly by context.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Create`
pub static CREATE: KindDecl = KindDecl {
    kind: Kind::Create,
    comment: "Indicates that the actor has created the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Delete`
pub static DELETE: KindDecl = KindDecl {
    kind: Kind::Delete,
    comment: "Indicates that the actor has deleted the object. If specified, the origin \
              indicates the context from which the object was deleted.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Follow`
pub static FOLLOW: KindDecl = KindDecl {
    kind: Kind::Follow,
    comment: "Indicates that the actor is following the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Ignore`
pub static IGNORE: KindDecl = KindDecl {
    kind: Kind::Ignore,
    comment: "Indicates that the actor is ignoring the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Join`
pub static JOIN: KindDecl = KindDecl {
    kind: Kind::Join,
    comment: "Indicates that the actor has joined the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Leave`
pub static LEAVE: KindDecl = KindDecl {
    kind: Kind::Leave,
    comment: "Indicates that the actor has left the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Like`
pub static LIKE: KindDecl = KindDecl {
    kind: Kind::Like,
    comment: "Indicates that the actor likes, recommends or endorses the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Offer`
pub static OFFER: KindDecl = KindDecl {
    kind: Kind::Offer,
    comment: "Indicates that the actor is offering the object. If specified, the target \
              indicates the entity to which the object is being offered.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Invite`
pub static INVITE: KindDecl = KindDecl {
    kind: Kind::Invite,
    comment: "A specialization of Offer in which the actor is extending an invitation for \
              the object to the target.",
    extends: &[Kind::Offer],
    properties: &[],
    withholds: &[],
};

/// `Reject`
pub static REJECT: KindDecl = KindDecl {
    kind: Kind::Reject,
    comment: "Indicates that the actor is rejecting the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `TentativeReject`
pub static TENTATIVE_REJECT: KindDecl = KindDecl {
    kind: Kind::TentativeReject,
    comment: "A specialization of Reject in which the rejection is considered tentative.",
    extends: &[Kind::Reject],
    properties: &[],
    withholds: &[],
};

/// `Remove`
pub static REMOVE: KindDecl = KindDecl {
    kind: Kind::Remove,
    comment: "Indicates that the actor is removing the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Undo`
pub static UNDO: KindDecl = KindDecl {
    kind: Kind::Undo,
    comment: "Indicates that the actor is undoing the object. In most cases, the object will \
              be an Activity describing some previously performed action.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Update`
pub static UPDATE: KindDecl = KindDecl {
    kind: Kind::Update,
    comment: "Indicates that the actor has updated the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `View`
pub static VIEW: KindDecl = KindDecl {
    kind: Kind::View,
    comment: "Indicates that the actor has viewed the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Listen`
pub static LISTEN: KindDecl = KindDecl {
    kind: Kind::Listen,
    comment: "Indicates that the actor has listened to the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Read`
pub static READ: KindDecl = KindDecl {
    kind: Kind::Read,
    comment: "Indicates that the actor has read the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Move`
pub static MOVE: KindDecl = KindDecl {
    kind: Kind::Move,
    comment: "Indicates that the actor has moved object from origin to target.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Announce`
pub static ANNOUNCE: KindDecl = KindDecl {
    kind: Kind::Announce,
    comment: "Indicates that the actor is calling the target's attention the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Block`
pub static BLOCK: KindDecl = KindDecl {
    kind: Kind::Block,
    comment: "Indicates that the actor is blocking the object.",
    extends: &[Kind::Ignore],
    properties: &[],
    withholds: &[],
};

/// `Flag`
pub static FLAG: KindDecl = KindDecl {
    kind: Kind::Flag,
    comment: "Indicates that the actor is flagging the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Dislike`
pub static DISLIKE: KindDecl = KindDecl {
    kind: Kind::Dislike,
    comment: "Indicates that the actor dislikes the object.",
    extends: &[Kind::Activity],
    properties: &[],
    withholds: &[],
};

/// `Arrive`
pub static ARRIVE: KindDecl = KindDecl {
    kind: Kind::Arrive,
    comment: "An IntransitiveActivity that indicates that the actor has arrived at the \
              location.",
    extends: &[Kind::IntransitiveActivity],
    properties: &[],
    withholds: &[],
};

/// `Travel`
pub static TRAVEL: KindDecl = KindDecl {
    kind: Kind::Travel,
    comment: "Indicates that the actor is traveling to target from origin.",
    extends: &[Kind::IntransitiveActivity],
    properties: &[],
    withholds: &[],
};

/// `Question`
pub static QUESTION: KindDecl = KindDecl {
    kind: Kind::Question,
    comment: "Represents a question being asked. Either of the anyOf and oneOf properties \
              may be used to express possible answers.",
    extends: &[Kind::IntransitiveActivity],
    properties: &[&prop::ANY_OF, &prop::CLOSED, &prop::ONE_OF],
    withholds: &[],
};
