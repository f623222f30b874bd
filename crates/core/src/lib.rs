//! Pure domain logic for the cinelog service.
//!
//! No I/O lives here: the field schema, the patch engine, and violation
//! collection all operate on in-memory values so they can be tested without
//! a database or an HTTP stack.

pub mod fields;
pub mod movie;
pub mod patch;
pub mod types;
pub mod validate;
