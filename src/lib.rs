//! nbkit - generate, run and publish Python notebooks, and convert Markdown
//! to DOCX
//!
//! This library provides the workflows behind the `nbkit` CLI: turning an
//! instruction into a one-cell notebook via a language model, executing it,
//! pushing it to a GitHub repository for Colab, and converting Markdown
//! documents with pandoc.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{Error, Result};
