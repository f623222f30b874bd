//! JSON-Patch-style partial updates over flat records.
//!
//! A patch document is an ordered list of [`PatchOp`]s applied to a record
//! held as a `serde_json::Map`. Operations run against a working copy in
//! document order, so later operations observe earlier effects, and the
//! first failure aborts the whole batch: the caller's record is never left
//! half-patched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::fields::{FieldDef, FieldKind};

/// A single patch operation, tagged by its `op` member.
///
/// Paths address top-level fields; a leading `/` is accepted and stripped,
/// so `"/duration"` and `"duration"` are equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Set the field at `path` to `value`.
    Replace {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    /// Same as `replace` here: the record shape is fixed, so `add` cannot
    /// create new fields.
    Add {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    /// Reset the field at `path` to its kind's default.
    Remove { path: String },
    /// Assert that the field at `path` currently equals `value`.
    Test {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    /// Copy the value at `from` to `path`, then reset `from` to its
    /// kind's default.
    Move { from: String, path: String },
    /// Copy the value at `from` to `path`.
    Copy { from: String, path: String },
}

/// Why a patch batch was rejected.
///
/// Every variant carries the zero-based index of the offending operation so
/// clients can point back into the document they sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchError {
    #[error("operation {index}: no field at path \"{path}\"")]
    PathNotFound { index: usize, path: String },

    #[error("operation {index}: test failed at \"{path}\": expected {expected}, found {actual}")]
    TestFailed {
        index: usize,
        path: String,
        expected: Value,
        actual: Value,
    },

    #[error("operation {index}: \"{path}\" expects a {expected} value")]
    TypeMismatch {
        index: usize,
        path: String,
        expected: FieldKind,
    },
}

impl PatchError {
    /// Zero-based index of the operation that failed.
    pub fn op_index(&self) -> usize {
        match self {
            PatchError::PathNotFound { index, .. }
            | PatchError::TestFailed { index, .. }
            | PatchError::TypeMismatch { index, .. } => *index,
        }
    }

    /// Stable machine-readable code for HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            PatchError::PathNotFound { .. } => "PATH_NOT_FOUND",
            PatchError::TestFailed { .. } => "TEST_FAILED",
            PatchError::TypeMismatch { .. } => "TYPE_MISMATCH",
        }
    }
}

/// Apply `ops` to `record` in order, returning the patched copy.
///
/// The record shape is fixed by `fields`; any path that does not resolve to
/// a declared field fails with [`PatchError::PathNotFound`]. On failure the
/// working copy is discarded and the caller's `record` is untouched.
pub fn apply(
    fields: &[FieldDef],
    record: &Map<String, Value>,
    ops: &[PatchOp],
) -> Result<Map<String, Value>, PatchError> {
    let mut patched = record.clone();

    for (index, op) in ops.iter().enumerate() {
        match op {
            PatchOp::Replace { path, value } | PatchOp::Add { path, value } => {
                let field = resolve(fields, path, index)?;
                check_kind(field, path, value, index)?;
                patched.insert(field.name.to_string(), value.clone());
            }
            PatchOp::Remove { path } => {
                let field = resolve(fields, path, index)?;
                patched.insert(field.name.to_string(), field.kind.default_value());
            }
            PatchOp::Test { path, value } => {
                let field = resolve(fields, path, index)?;
                check_kind(field, path, value, index)?;
                let actual = current(&patched, field);
                if actual != *value {
                    return Err(PatchError::TestFailed {
                        index,
                        path: path.clone(),
                        expected: value.clone(),
                        actual,
                    });
                }
            }
            PatchOp::Move { from, path } => {
                let (source, target) = resolve_pair(fields, from, path, index)?;
                let value = current(&patched, source);
                patched.insert(target.name.to_string(), value);
                // `move` onto itself must not wipe the field it just set.
                if source.name != target.name {
                    patched.insert(source.name.to_string(), source.kind.default_value());
                }
            }
            PatchOp::Copy { from, path } => {
                let (source, target) = resolve_pair(fields, from, path, index)?;
                let value = current(&patched, source);
                patched.insert(target.name.to_string(), value);
            }
        }
    }

    Ok(patched)
}

/// Resolve `path` to a declared field, stripping one leading `/`.
fn resolve<'a>(
    fields: &'a [FieldDef],
    path: &str,
    index: usize,
) -> Result<&'a FieldDef, PatchError> {
    let name = path.strip_prefix('/').unwrap_or(path);
    fields
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| PatchError::PathNotFound {
            index,
            path: path.to_string(),
        })
}

/// Resolve `from` and `path` for a `move`/`copy`, requiring matching kinds.
fn resolve_pair<'a>(
    fields: &'a [FieldDef],
    from: &str,
    path: &str,
    index: usize,
) -> Result<(&'a FieldDef, &'a FieldDef), PatchError> {
    let source = resolve(fields, from, index)?;
    let target = resolve(fields, path, index)?;
    if source.kind != target.kind {
        return Err(PatchError::TypeMismatch {
            index,
            path: path.to_string(),
            expected: target.kind,
        });
    }
    Ok((source, target))
}

fn check_kind(
    field: &FieldDef,
    path: &str,
    value: &Value,
    index: usize,
) -> Result<(), PatchError> {
    if field.kind.accepts(value) {
        Ok(())
    } else {
        Err(PatchError::TypeMismatch {
            index,
            path: path.to_string(),
            expected: field.kind,
        })
    }
}

/// Current value of `field` in the working copy; absent keys read as the
/// kind's default.
fn current(record: &Map<String, Value>, field: &FieldDef) -> Value {
    record
        .get(field.name)
        .cloned()
        .unwrap_or_else(|| field.kind.default_value())
}
