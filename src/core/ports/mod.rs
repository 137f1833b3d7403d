//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the workflows and the
//! external tools they sequence (language model, interpreter, git, pandoc).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The workflows depend only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Stub implementations for unit tests
//! - **Flexibility**: Swap a provider without changing the workflow
//! - **Clarity**: Clear boundaries between layers

mod converter;
mod executor;
mod generator;
mod publisher;

pub use converter::DocumentConverter;
pub use executor::CodeExecutor;
pub use generator::CodeGenerator;
pub use publisher::Publisher;
