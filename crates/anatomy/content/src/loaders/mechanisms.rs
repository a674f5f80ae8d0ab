//! Mechanism catalog loader.

use std::path::Path;

use anatomy_core::MechanismPrototype;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Mechanism catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanismCatalog {
    pub mechanisms: Vec<MechanismPrototype>,
}

/// Loader for mechanism prototypes from RON files.
pub struct MechanismLoader;

impl MechanismLoader {
    /// Load mechanism prototypes from a RON file containing a [`MechanismCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<MechanismPrototype>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MechanismPrototype>> {
        let catalog: MechanismCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mechanism catalog RON: {}", e))?;

        Ok(catalog.mechanisms)
    }
}

#[cfg(test)]
mod tests {
    use anatomy_core::BodyPartCompatibility;

    use super::*;

    #[test]
    fn omitted_fields_use_prototype_defaults() {
        let mechanisms = MechanismLoader::parse(
            r#"(
                mechanisms: [
                    (id: "heart", name: "heart", size: 3, examine_message: "It beats."),
                    (id: "servo", name: "servo", compatibility: Mechanical),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(mechanisms.len(), 2);
        assert_eq!(mechanisms[0].size, 3);
        assert_eq!(mechanisms[0].durability, MechanismPrototype::default().durability);
        assert_eq!(mechanisms[1].size, 1);
        assert_eq!(mechanisms[1].compatibility, BodyPartCompatibility::Mechanical);
    }
}
