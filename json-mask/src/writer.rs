//! A byte sink decorator that masks JSON documents on their way through.
//!
//! [`MaskWriter`] wraps any [`io::Write`] and treats every buffer handed to it
//! as one complete JSON document: parse, mask, encode, forward. A buffer that
//! fails any of the first three steps is rejected whole and nothing reaches
//! the wrapped sink.
//!
//! The sink can be owned (`MaskWriter<File>`) or borrowed
//! (`MaskWriter<&mut Vec<u8>>`); std implements `Write` for `&mut W`, so the
//! caller keeps control of the sink's lifetime in the borrowed case.
//!
//! Because every buffer must be a whole document, do not drive a `MaskWriter`
//! with `write!`/`writeln!`: formatting machinery splits output into pieces.
//! Serialize the payload first and write it in one call.

use std::{borrow::Cow, fmt, io};

use crate::{error::MaskError, policy::MaskPolicy};

/// Masks configured fields in each JSON document before forwarding it.
pub struct MaskWriter<W> {
    inner: W,
    policy: MaskPolicy,
    #[cfg(feature = "slog")]
    logger: slog::Logger,
}

impl<W> MaskWriter<W> {
    /// Wraps `inner`, masking `keys` with `replacement`.
    pub fn new<K, S, R>(inner: W, keys: K, replacement: R) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
        R: Into<Cow<'static, str>>,
    {
        Self::with_policy(inner, MaskPolicy::new(keys, replacement))
    }

    /// Wraps `inner` using a prepared policy.
    pub fn with_policy(inner: W, policy: MaskPolicy) -> Self {
        Self {
            inner,
            policy,
            #[cfg(feature = "slog")]
            logger: slog::Logger::root(slog::Discard, slog::o!()),
        }
    }

    /// Attaches a logger for the write path.
    ///
    /// Rejected payloads produce a `Warning` record naming the failing stage;
    /// forwarded ones produce an `Info` record with byte counts. Both levels
    /// pass slog's default compile-time filters in debug and release builds.
    /// Payload contents are never logged.
    #[cfg(feature = "slog")]
    #[must_use]
    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn policy(&self) -> &MaskPolicy {
        &self.policy
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutable access to the wrapped sink.
    ///
    /// Writing to it directly bypasses masking.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    #[cfg_attr(not(feature = "slog"), allow(clippy::unused_self))]
    fn rejected(&self, err: MaskError) -> MaskError {
        #[cfg(feature = "slog")]
        slog::warn!(self.logger, "rejected json payload"; "stage" => err.kind(), "error" => %err);
        err
    }

    #[cfg_attr(not(feature = "slog"), allow(clippy::unused_self))]
    fn forwarded(&self, input_bytes: usize, masked_bytes: usize, accepted_bytes: usize) {
        #[cfg(feature = "slog")]
        slog::info!(self.logger, "forwarded masked json";
            "input_bytes" => input_bytes,
            "masked_bytes" => masked_bytes,
            "accepted_bytes" => accepted_bytes,
        );
        #[cfg(not(feature = "slog"))]
        let _ = (input_bytes, masked_bytes, accepted_bytes);
    }
}

impl<W: io::Write> MaskWriter<W> {
    /// Masks one JSON document and forwards it with a single downstream
    /// `write` call.
    ///
    /// Returns the byte count the sink reports, which refers to the masked
    /// encoding and may differ from `buf.len()`. Sink failures come back as
    /// [`MaskError::Sink`] with the original `io::Error` inside.
    pub fn write_masked(&mut self, buf: &[u8]) -> Result<usize, MaskError> {
        let masked = self
            .policy
            .mask_slice(buf)
            .map_err(|err| self.rejected(err))?;

        let written = self.inner.write(&masked)?;
        self.forwarded(buf.len(), masked.len(), written);
        Ok(written)
    }

    /// Pushes all of `masked` downstream, retrying on `Interrupted`.
    ///
    /// A failure before any byte is accepted is the sink's own error. A
    /// failure after some bytes went through becomes
    /// [`MaskError::PartialWrite`] carrying the accepted count.
    fn forward_all(&mut self, masked: &[u8]) -> Result<(), MaskError> {
        let total = masked.len();
        let mut accepted = 0;
        while accepted < total {
            let source = match self.inner.write(&masked[accepted..]) {
                Ok(0) => io::Error::new(
                    io::ErrorKind::WriteZero,
                    "downstream sink accepted zero bytes",
                ),
                Ok(n) => {
                    accepted += n;
                    continue;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => err,
            };
            return Err(if accepted == 0 {
                MaskError::Sink(source)
            } else {
                MaskError::PartialWrite {
                    accepted,
                    total,
                    source,
                }
            });
        }
        Ok(())
    }
}

/// The `io::Write` view of the decorator.
///
/// `write` may not report more bytes than it was given, while a masked
/// document can be longer than its input. This impl therefore keeps writing
/// until the sink has taken the whole masked document, and only then reports
/// the input buffer as consumed.
///
/// Masking failures surface as [`io::ErrorKind::InvalidData`] wrapping a
/// [`MaskError`]. A sink failure before any byte was accepted is returned as
/// the sink produced it. A sink failure after part of the document went
/// through keeps the sink's error kind but wraps
/// [`MaskError::PartialWrite`], whose message carries the accepted count:
/// that fragment is already downstream and retrying the input resends it.
impl<W: io::Write> io::Write for MaskWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let masked = self
            .policy
            .mask_slice(buf)
            .map_err(|err| self.rejected(err))?;
        self.forward_all(&masked)?;
        self.forwarded(buf.len(), masked.len(), masked.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: fmt::Debug> fmt::Debug for MaskWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskWriter")
            .field("inner", &self.inner)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
