//! Domain models for nbkit
//!
//! Pure data types with no I/O dependencies (except notebook file
//! persistence, which is a plain JSON write).

mod artifact;
mod execution;
mod notebook;
mod publish;
mod report;

pub use artifact::GeneratedArtifact;
pub use execution::{ExecutionResult, NO_OUTPUT};
pub use notebook::{Cell, CellType, Notebook, notebook_file_name};
pub use publish::{Publication, PublishRecord};
pub use report::RunReport;
