//! Key-based masking for JSON payloads.
//!
//! This crate sits in front of any byte sink and rewrites JSON documents on
//! their way through, replacing the values of configured fields with a fixed
//! placeholder so credentials and personal data never reach logs or output.
//!
//! It separates:
//! - **Keys**: which object field names are sensitive ([`KeySet`]).
//! - **Policy**: what to replace them with and how deep to walk ([`MaskPolicy`]).
//! - **Sink**: where masked documents go ([`MaskWriter`]).
//!
//! Key rules:
//! - Matching is by exact field name; values are never inspected.
//! - Only scalar leaves are replaced, always with a JSON string.
//! - Objects are walked wherever they appear, including inside arrays.
//! - Arrays of scalars are never masked, even under a sensitive key.
//! - The root must be an object; anything else is rejected whole.
//!
//! ```rust
//! use std::io::Write;
//!
//! use json_mask::MaskWriter;
//!
//! let mut writer = MaskWriter::new(Vec::new(), ["password"], "******");
//! writer.write_all(br#"{"password":"hunter2","user":"sam"}"#)?;
//! assert_eq!(writer.into_inner(), br#"{"password":"******","user":"sam"}"#);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! What it does not do:
//! - parse partial or streamed documents
//! - preserve key order (unless the `preserve_order` feature is enabled) or
//!   exact number formatting
//! - log anything unless a logger is attached (feature `slog`)

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
mod keys;
mod policy;
#[cfg(feature = "slog")]
pub mod slog;
mod walker;
mod writer;

// Re-exports
pub use error::MaskError;
pub use keys::KeySet;
pub use policy::{MaskPolicy, DEFAULT_MAX_DEPTH, DEFAULT_REPLACEMENT};
pub use walker::{mask_document, mask_object};
pub use writer::MaskWriter;
