//! Link subtypes.

use crate::model::{Kind, KindDecl};

/// `Mention`
pub static MENTION: KindDecl = KindDecl {
    kind: Kind::Mention,
    comment: "A specialized Link that represents an @mention.",
    extends: &[Kind::Link],
    properties: &[],
    withholds: &[],
};
