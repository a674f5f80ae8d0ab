//! Data-driven anatomy content and loaders.
//!
//! This crate reads RON/TOML data files into the prototype catalog that
//! anatomy-core resolves ids through:
//! - Mechanism prototypes (`mechanisms.ron`)
//! - Body part prototypes (`parts.ron`)
//! - Body templates and presets (`templates.ron`, `presets.ron`)
//! - Workflow configuration (`config.toml`)
//!
//! Content is consumed through the core oracle traits and never appears in
//! live body state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MechanismLoader, PartLoader, PresetLoader,
    TemplateLoader,
};
