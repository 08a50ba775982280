//! Generic record field-copier.
//!
//! [`copy_fields`] shallow-copies all same-named, same-kinded fields from a
//! source record into a destination record, leaving everything else
//! untouched. Both records are transient and caller-owned; the destination is
//! mutated in place through `&mut`, so "destination must be mutable" is a
//! compile-time guarantee rather than a runtime check.
//!
//! Field correspondence is established over the serde data model: both values
//! are serialized to JSON objects, matching fields are transplanted, and the
//! merged object is deserialized back into the destination type. "Identical
//! type" therefore means "identical JSON value kind" (bool, number, string,
//! array, object); a `u16` and a `u64` port field are compatible, a string
//! and a number are not.
//!
//! Mismatch handling is an explicit caller choice:
//!
//! - [`CopyMode::BestEffort`] skips mismatched fields silently but records
//!   them in the returned [`CopyReport`], so the skip is observable.
//! - [`CopyMode::Strict`] fails on the first name-matched field whose kinds
//!   differ.
//!
//! The copy is one-shot, synchronous, and idempotent for identical inputs.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use websmith_core::record::{CopyMode, copy_fields};
//!
//! #[derive(Serialize)]
//! struct Incoming { name: String, port: u16 }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings { name: String, port: u16, mode: String }
//!
//! let src = Incoming { name: "billing".into(), port: 9000 };
//! let mut dst = Settings { name: "old".into(), port: 8888, mode: "debug".into() };
//!
//! let report = copy_fields(&src, &mut dst, CopyMode::BestEffort).unwrap();
//! assert_eq!(dst.name, "billing");
//! assert_eq!(dst.port, 9000);
//! assert_eq!(dst.mode, "debug");
//! assert_eq!(report.copied, vec!["name", "port"]);
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// How to treat a name-matched field whose value kinds differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// Skip mismatched fields; record them in [`CopyReport::skipped`].
    #[default]
    BestEffort,
    /// Fail on the first mismatched field.
    Strict,
}

/// Errors produced by [`copy_fields`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// Source or destination is not a plain record (does not serialize to a
    /// map of named fields).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Strict mode only: a name-matched field has a different value kind.
    #[error("field '{field}': source is {source_kind}, destination is {dest_kind}")]
    TypeMismatch {
        field: String,
        source_kind: &'static str,
        dest_kind: &'static str,
    },

    /// The serde round-trip failed (non-serializable value, custom
    /// deserializer rejecting the merged record).
    #[error("record serialization failed: {0}")]
    Serialization(String),
}

/// What a copy actually did, field by field.
///
/// `skipped` covers both source-only fields and (in best-effort mode)
/// kind-mismatched fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<String>,
    pub skipped: Vec<String>,
}

/// Copy all same-named, same-kinded fields from `source` into `dest`.
///
/// Fields are visited in the source's declaration order. Fields present only
/// in the source are skipped. See the module docs for mismatch semantics.
///
/// # Errors
///
/// - [`RecordError::InvalidArgument`] if either value is not a plain record.
/// - [`RecordError::TypeMismatch`] in strict mode on a kind mismatch.
/// - [`RecordError::Serialization`] if the serde round-trip fails.
pub fn copy_fields<S, D>(source: &S, dest: &mut D, mode: CopyMode) -> Result<CopyReport, RecordError>
where
    S: Serialize,
    D: Serialize + DeserializeOwned,
{
    let src = to_record(source, "source")?;
    let mut dst = to_record(&*dest, "destination")?;

    let mut report = CopyReport::default();

    for (name, value) in src {
        match dst.get(&name) {
            None => report.skipped.push(name),
            Some(existing) => {
                let src_kind = value_kind(&value);
                let dst_kind = value_kind(existing);
                if src_kind == dst_kind {
                    dst.insert(name.clone(), value);
                    report.copied.push(name);
                } else if mode == CopyMode::Strict {
                    return Err(RecordError::TypeMismatch {
                        field: name,
                        source_kind: src_kind,
                        dest_kind: dst_kind,
                    });
                } else {
                    report.skipped.push(name);
                }
            }
        }
    }

    *dest = serde_json::from_value(Value::Object(dst))
        .map_err(|e| RecordError::Serialization(e.to_string()))?;

    Ok(report)
}

/// Serialize a value and require it to be a JSON object.
fn to_record<T: Serialize>(
    value: &T,
    role: &'static str,
) -> Result<serde_json::Map<String, Value>, RecordError> {
    let value =
        serde_json::to_value(value).map_err(|e| RecordError::Serialization(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(RecordError::InvalidArgument(format!(
            "{role} must be a record with named fields, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
