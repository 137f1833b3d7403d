//! Publish port
//!
//! Defines the interface for pushing a file to a version-control remote.

use std::path::Path;

use crate::core::models::Publication;
use crate::error::Result;

/// Version-control publish abstraction
pub trait Publisher {
    /// Copy, stage, commit and push `file`, returning where it can be opened
    ///
    /// Publishing a file with the same name again replaces the previous
    /// version at the destination.
    fn publish(&self, file: &Path) -> Result<Publication>;
}
