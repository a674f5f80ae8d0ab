//! Body template and preset loaders.

use std::path::Path;

use anatomy_core::{BodyPreset, BodyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Template catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<BodyTemplate>,
}

/// Preset catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub presets: Vec<BodyPreset>,
}

/// Loader for body templates (slot layouts).
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load templates and normalize their adjacency.
    ///
    /// Connections may be listed in one direction only; every template is
    /// made symmetric and rejected if it names an undeclared slot.
    pub fn load(path: &Path) -> LoadResult<Vec<BodyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BodyTemplate>> {
        let catalog: TemplateCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse body template RON: {}", e))?;

        let mut templates = catalog.templates;
        for template in &mut templates {
            template
                .normalize()
                .map_err(|e| anyhow::anyhow!("Invalid body template '{}': {}", template.id, e))?;
        }
        Ok(templates)
    }
}

/// Loader for body presets (which part fills which slot).
pub struct PresetLoader;

impl PresetLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BodyPreset>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BodyPreset>> {
        let catalog: PresetCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse body preset RON: {}", e))?;

        Ok(catalog.presets)
    }
}

#[cfg(test)]
mod tests {
    use anatomy_core::{BodyPartType, SlotName};

    use super::*;

    #[test]
    fn one_way_connections_become_symmetric() {
        let templates = TemplateLoader::parse(
            r#"(
                templates: [(
                    id: "humanoid",
                    name: "humanoid",
                    center_slot: "torso",
                    slots: { "torso": Torso, "head": Head },
                    connections: { "torso": ["head"] },
                )],
            )"#,
        )
        .unwrap();

        let template = &templates[0];
        assert_eq!(template.slot_type("head"), Some(BodyPartType::Head));
        assert_eq!(template.connections("head"), &[SlotName::from("torso")]);
    }

    #[test]
    fn dangling_connection_fails_the_load() {
        let err = TemplateLoader::parse(
            r#"(
                templates: [(
                    id: "broken",
                    name: "broken",
                    center_slot: "torso",
                    slots: { "torso": Torso },
                    connections: { "torso": ["tail"] },
                )],
            )"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Invalid body template 'broken'"));
    }

    #[test]
    fn presets_map_slots_to_parts() {
        let presets = PresetLoader::parse(
            r#"(
                presets: [(
                    id: "human",
                    name: "human",
                    template: "humanoid",
                    parts: { "torso": "torso", "head": "head" },
                )],
            )"#,
        )
        .unwrap();

        assert_eq!(presets[0].template, "humanoid");
        assert_eq!(presets[0].parts.get("head").map(String::as_str), Some("head"));
    }
}
