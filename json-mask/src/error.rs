//! Failures surfaced by the masking pipeline.
//!
//! Every stage of a write (parse, shape check, walk, encode, forward) maps to
//! exactly one variant. Nothing is forwarded downstream unless the first four
//! stages succeed.

use std::io;

/// Error returned by [`MaskWriter::write_masked`](crate::MaskWriter::write_masked)
/// and the in-memory helpers on [`MaskPolicy`](crate::MaskPolicy).
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// The input bytes are not one well-formed JSON document.
    #[error("invalid JSON payload: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document parsed, but its root is not an object.
    #[error("root must be an object, found {found}")]
    NotAnObject {
        /// JSON kind of the rejected root (`"array"`, `"string"`, ...).
        found: &'static str,
    },

    /// Object nesting went deeper than the policy allows.
    #[error("document nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The masked document could not be encoded again.
    #[error("failed to encode masked payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The downstream sink rejected the write.
    #[error("downstream write failed: {0}")]
    Sink(#[from] io::Error),

    /// The sink took part of a masked document, then failed.
    ///
    /// The first `accepted` bytes are already downstream; resending the same
    /// input duplicates them.
    #[error("downstream accepted {accepted} of {total} masked bytes before failing: {source}")]
    PartialWrite {
        accepted: usize,
        total: usize,
        #[source]
        source: io::Error,
    },
}

impl MaskError {
    /// Short, payload-free name of the failing stage.
    pub fn kind(&self) -> &'static str {
        match self {
            MaskError::Parse(_) => "parse",
            MaskError::NotAnObject { .. } => "type",
            MaskError::DepthExceeded { .. } => "depth",
            MaskError::Serialize(_) => "serialize",
            MaskError::Sink(_) | MaskError::PartialWrite { .. } => "sink",
        }
    }
}

impl From<MaskError> for io::Error {
    fn from(err: MaskError) -> Self {
        match err {
            // Sink errors belong to the caller's sink; hand them back untouched.
            MaskError::Sink(inner) => inner,
            MaskError::PartialWrite {
                accepted,
                total,
                source,
            } => {
                let kind = source.kind();
                io::Error::new(
                    kind,
                    MaskError::PartialWrite {
                        accepted,
                        total,
                        source,
                    },
                )
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
