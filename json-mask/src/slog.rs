//! Adapters for emitting masked payloads through `slog`.
//!
//! This module connects [`MaskPolicy`] with `slog` by providing a
//! `slog::Value` that serializes the masked document as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the masked document, never the
//!   original value.
//! - Avoiding fallible logging APIs: conversion or masking failures are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose which keys are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::policy::MaskPolicy;

/// Logged in place of values that cannot be converted to JSON.
pub const UNSERIALIZABLE_PLACEHOLDER: &str = "Failed to serialize value for masking";

/// Logged in place of documents the policy rejects.
pub const UNMASKABLE_PLACEHOLDER: &str = "Failed to mask value";

/// A `slog::Value` that emits an owned, already masked JSON document.
#[derive(Clone, Debug)]
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The masked document that will be logged.
    pub fn as_value(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl MaskPolicy {
    /// Converts `value` to JSON, masks it, and wraps it for logging.
    ///
    /// ## Example
    /// ```ignore
    /// let policy = MaskPolicy::new(["password"], "******");
    /// info!(logger, "login"; "request" => policy.masked_json(&request));
    /// ```
    pub fn masked_json<T>(&self, value: &T) -> MaskedJson
    where
        T: Serialize + ?Sized,
    {
        let masked = match serde_json::to_value(value) {
            Ok(json) => self
                .mask_value(json)
                .unwrap_or_else(|_| JsonValue::String(UNMASKABLE_PLACEHOLDER.to_string())),
            Err(_) => JsonValue::String(UNSERIALIZABLE_PLACEHOLDER.to_string()),
        };
        MaskedJson::new(masked)
    }
}
