//! Violation collection for request validation.
//!
//! DTOs declare their constraints as `validator` derive rules; this module
//! flattens the resulting [`ValidationErrors`] into the `{field, message}`
//! pairs carried by HTTP error bodies. `validator` evaluates every rule
//! rather than stopping at the first failure, so one response lists every
//! violation at once.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Machine field name, as serialized on the wire.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// Flatten `errors` into violations, sorted by field then message so that
/// response bodies are deterministic.
///
/// Rules without an explicit message fall back to the validator code
/// (e.g. `length`).
pub fn collect_violations(errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations: Vec<Violation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(|error| Violation {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}
