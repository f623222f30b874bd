//! Movie record shape used by the patch pipeline.

use crate::fields::{FieldDef, FieldKind};

/// Patchable fields of a movie, in declaration order.
///
/// The identifier and audit timestamps are deliberately absent: they belong
/// to the store and cannot be addressed by a patch document.
pub const FIELDS: [FieldDef; 3] = [
    FieldDef::new("title", FieldKind::Text),
    FieldDef::new("genre", FieldKind::Text),
    FieldDef::new("duration", FieldKind::Integer),
];
