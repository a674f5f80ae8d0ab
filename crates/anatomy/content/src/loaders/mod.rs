//! Content loaders for reading anatomy data from files.
//!
//! Each loader parses one file into core prototype types; [`ContentFactory`]
//! combines them into a validated [`anatomy_core::PrototypeCatalog`].

pub mod bodies;
pub mod config;
pub mod factory;
pub mod mechanisms;
pub mod parts;

pub use bodies::{PresetLoader, TemplateLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use mechanisms::MechanismLoader;
pub use parts::PartLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
