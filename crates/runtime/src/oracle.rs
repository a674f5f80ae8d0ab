//! Runtime wrapper around the static prototype catalog.
//!
//! The catalog is immutable at runtime; live bodies and parts are owned by
//! the [`crate::world::World`].

use std::sync::Arc;

use anatomy_content::{ContentFactory, LoadResult};
use anatomy_core::{AnatomyEnv, PrototypeCatalog};

/// Shares one prototype catalog and hands out [`AnatomyEnv`] views of it.
#[derive(Clone, Debug)]
pub struct OracleManager {
    catalog: Arc<PrototypeCatalog>,
}

impl OracleManager {
    pub fn new(catalog: PrototypeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads and validates the catalog from a content directory.
    pub fn load(factory: &ContentFactory) -> LoadResult<Self> {
        Ok(Self::new(factory.load_catalog()?))
    }

    pub fn as_anatomy_env(&self) -> AnatomyEnv<'_> {
        AnatomyEnv::from_catalog(&self.catalog)
    }

    pub fn catalog(&self) -> &PrototypeCatalog {
        &self.catalog
    }
}
