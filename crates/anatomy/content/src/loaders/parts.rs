//! Body part catalog loader.

use std::path::Path;

use anatomy_core::BodyPartPrototype;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Body part catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCatalog {
    pub parts: Vec<BodyPartPrototype>,
}

/// Loader for body part prototypes from RON files.
///
/// Mechanism references are not resolved here; [`super::ContentFactory`]
/// checks them once every file is loaded.
pub struct PartLoader;

impl PartLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BodyPartPrototype>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BodyPartPrototype>> {
        let catalog: PartCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse body part catalog RON: {}", e))?;

        Ok(catalog.parts)
    }
}

#[cfg(test)]
mod tests {
    use anatomy_core::{
        BodyPartCompatibility, BodyPartProperty, BodyPartType, DamageType, PropertyKind,
        SurgeryKind,
    };

    use super::*;

    const PARTS: &str = r#"(
        parts: [
            (
                id: "left_arm",
                name: "left arm",
                plural: "left arms",
                part_type: Arm,
                rsi_path: "Mobs/Species/Human/parts.rsi",
                rsi_state: "l_arm",
                durability: 40,
                destroy_threshold: -40,
                resistance: (resistances: { Blunt: (coefficient: 80, flat_reduction: 1) }),
                size: 10,
                properties: [Extension(reach: 2.0), Grasp],
                mechanisms: ["muscle", "muscle"],
            ),
            (
                id: "robot_leg",
                name: "robot leg",
                part_type: Leg,
                size: 6,
                compatibility: Mechanical,
                surgery: mechanical,
                properties: [Leg(speed: 2.5)],
            ),
        ],
    )"#;

    #[test]
    fn parses_full_and_sparse_parts() {
        let parts = PartLoader::parse(PARTS).unwrap();
        assert_eq!(parts.len(), 2);

        let arm = &parts[0];
        assert_eq!(arm.part_type, BodyPartType::Arm);
        assert_eq!(arm.mechanisms, vec!["muscle".to_string(), "muscle".to_string()]);
        assert_eq!(arm.resistance.resistance(DamageType::Blunt).coefficient, 80);
        assert_eq!(arm.surgery, SurgeryKind::Biological);
        assert!(arm.properties.iter().any(|p| p.kind() == PropertyKind::Grasp));

        let leg = &parts[1];
        assert_eq!(leg.compatibility, BodyPartCompatibility::Mechanical);
        assert_eq!(leg.surgery, SurgeryKind::Mechanical);
        assert_eq!(leg.properties, vec![BodyPartProperty::Leg { speed: 2.5 }]);
        assert!(leg.mechanisms.is_empty());
    }

    #[test]
    fn unknown_surgery_kind_is_rejected() {
        let err = PartLoader::parse(
            r#"(parts: [(id: "x", name: "x", surgery: reflective)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("body part catalog"));
    }
}
