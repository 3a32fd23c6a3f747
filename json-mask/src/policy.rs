//! Masking configuration.
//!
//! A [`MaskPolicy`] bundles the three knobs of the pipeline: which field names
//! to mask, what to replace their values with, and how deep the walker may go.
//! Policies are plain values; they never change once a writer owns one.

use std::borrow::Cow;

use serde_json::Value;

use crate::{error::MaskError, keys::KeySet, walker};

/// Placeholder substituted for masked values unless configured otherwise.
pub const DEFAULT_REPLACEMENT: &str = "******";

/// Deepest object nesting walked before giving up.
///
/// Matches the recursion limit `serde_json` applies while parsing, so a
/// document that parses with default settings also masks with default settings.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Which fields to mask and how.
///
/// The root object sits at depth 1 and every object entered below it adds one
/// level. A `max_depth` of zero therefore rejects every document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct MaskPolicy {
    keys: KeySet,
    #[cfg_attr(feature = "serde", serde(default = "default_replacement"))]
    replacement: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    max_depth: usize,
}

#[cfg(feature = "serde")]
fn default_replacement() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_REPLACEMENT)
}

#[cfg(feature = "serde")]
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl MaskPolicy {
    /// Masks `keys` with `replacement`, using [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn new<K, S, R>(keys: K, replacement: R) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
        R: Into<Cow<'static, str>>,
    {
        Self {
            keys: KeySet::new(keys),
            replacement: replacement.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the key set.
    #[must_use]
    pub fn with_keys(mut self, keys: KeySet) -> Self {
        self.keys = keys;
        self
    }

    /// Uses a different replacement literal.
    #[must_use]
    pub fn with_replacement<R>(mut self, replacement: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        self.replacement = replacement.into();
        self
    }

    /// Caps object nesting at `max_depth` levels.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Masks an already parsed document.
    ///
    /// The root must be an object. The value is rewritten in place and handed
    /// back; on error it is dropped, never returned half-masked.
    pub fn mask_value(&self, value: Value) -> Result<Value, MaskError> {
        walker::mask_document(self, value)
    }

    /// Parses `bytes`, masks the document and encodes it again.
    ///
    /// This is the whole write pipeline minus the downstream sink.
    pub fn mask_slice(&self, bytes: &[u8]) -> Result<Vec<u8>, MaskError> {
        let document: Value = serde_json::from_slice(bytes).map_err(MaskError::Parse)?;
        let masked = self.mask_value(document)?;
        serde_json::to_vec(&masked).map_err(MaskError::Serialize)
    }
}

impl Default for MaskPolicy {
    /// Masks nothing. Documents are only re-encoded.
    fn default() -> Self {
        Self::new(Vec::<String>::new(), DEFAULT_REPLACEMENT)
    }
}
