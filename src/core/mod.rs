//! Core domain logic for nbkit
//!
//! This module contains the domain types and workflow logic. All external
//! interactions (language model, interpreter, git, pandoc) are abstracted
//! through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Notebook, GeneratedArtifact, `PublishRecord`)
//! - `services/` - Workflow orchestration and pure helpers
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
