//! Recursive masking over `serde_json` documents.
//!
//! Only scalar leaves (strings, numbers, booleans, null) are ever replaced, and
//! only when their immediate parent key is in the policy's [`KeySet`]. Objects
//! are walked wherever they appear as a field value or as an element of an
//! array field. Everything else passes through untouched:
//!
//! | Value under a masked key | Result |
//! |--------------------------|--------|
//! | string, number, bool, null | replaced by the replacement string |
//! | object | walked, not replaced |
//! | array | object elements walked, other elements untouched |
//!
//! Arrays of scalars are therefore never masked, even when the array's own key
//! matches. Arrays nested directly inside arrays are not descended into.
//!
//! [`KeySet`]: crate::KeySet

use serde_json::{Map, Value};

use crate::{error::MaskError, policy::MaskPolicy};

/// Masks a whole document, rejecting anything whose root is not an object.
pub fn mask_document(policy: &MaskPolicy, document: Value) -> Result<Value, MaskError> {
    match document {
        Value::Object(mut object) => {
            mask_object(policy, &mut object)?;
            Ok(Value::Object(object))
        }
        other => Err(MaskError::NotAnObject {
            found: kind_of(&other),
        }),
    }
}

/// Masks an object in place, treating it as the document root.
///
/// On error the object may already be partially rewritten; callers that need
/// all-or-nothing behavior should discard it, as the writer does.
pub fn mask_object(
    policy: &MaskPolicy,
    object: &mut Map<String, Value>,
) -> Result<(), MaskError> {
    walk(policy, object, 1)
}

fn walk(
    policy: &MaskPolicy,
    object: &mut Map<String, Value>,
    depth: usize,
) -> Result<(), MaskError> {
    if depth > policy.max_depth() {
        return Err(MaskError::DepthExceeded {
            limit: policy.max_depth(),
        });
    }

    for (key, value) in object.iter_mut() {
        match value {
            Value::Object(child) => walk(policy, child, depth + 1)?,
            Value::Array(elements) => {
                for element in elements.iter_mut() {
                    match element {
                        Value::Object(child) => walk(policy, child, depth + 1)?,
                        Value::Array(_)
                        | Value::Null
                        | Value::Bool(_)
                        | Value::Number(_)
                        | Value::String(_) => {}
                    }
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                if policy.keys().contains(key) {
                    *value = Value::String(policy.replacement().to_owned());
                }
            }
        }
    }

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
