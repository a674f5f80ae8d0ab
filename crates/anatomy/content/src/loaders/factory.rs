//! Content factory for building the prototype catalog from data files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anatomy_core::{AnatomyConfig, AnatomyEnv, Body, BodyPart, PrototypeCatalog};

use crate::loaders::{
    ConfigLoader, LoadResult, MechanismLoader, PartLoader, PresetLoader, TemplateLoader,
};

/// Content factory that loads all anatomy content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── mechanisms.ron
/// ├── parts.ron
/// ├── templates.ron
/// └── presets.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load workflow configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<AnatomyConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load every prototype file and cross-check the references between them.
    ///
    /// Fails if an id is declared twice, if a part names a mechanism that does
    /// not exist or cannot hold its starting mechanisms, or if a preset cannot
    /// be built into a body. A catalog returned from here spawns every preset.
    pub fn load_catalog(&self) -> LoadResult<PrototypeCatalog> {
        let mechanisms = MechanismLoader::load(&self.data_dir.join("mechanisms.ron"))?;
        let parts = PartLoader::load(&self.data_dir.join("parts.ron"))?;
        let templates = TemplateLoader::load(&self.data_dir.join("templates.ron"))?;
        let presets = PresetLoader::load(&self.data_dir.join("presets.ron"))?;

        ensure_unique("mechanism", mechanisms.iter().map(|m| m.id.as_str()))?;
        ensure_unique("body part", parts.iter().map(|p| p.id.as_str()))?;
        ensure_unique("body template", templates.iter().map(|t| t.id.as_str()))?;
        ensure_unique("body preset", presets.iter().map(|p| p.id.as_str()))?;

        let mut catalog = PrototypeCatalog::new();
        mechanisms
            .into_iter()
            .for_each(|m| catalog.insert_mechanism(m));
        templates.into_iter().for_each(|t| catalog.insert_template(t));

        for part in &parts {
            BodyPart::from_prototype(part, &catalog)
                .map_err(|e| anyhow::anyhow!("Invalid body part '{}': {}", part.id, e))?;
        }
        parts.into_iter().for_each(|p| catalog.insert_part(p));

        let preset_ids: Vec<String> = presets.iter().map(|p| p.id.clone()).collect();
        presets.into_iter().for_each(|p| catalog.insert_preset(p));

        let env = AnatomyEnv::from_catalog(&catalog);
        for id in &preset_ids {
            Body::from_preset(&env, id)
                .map_err(|e| anyhow::anyhow!("Invalid body preset '{}': {}", id, e))?;
        }

        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn ensure_unique<'a>(what: &str, ids: impl Iterator<Item = &'a str>) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", what, id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anatomy_core::{BodyOracle, BodyPartOracle, MechanismOracle};

    use super::*;

    const MECHANISMS: &str = r#"(mechanisms: [(id: "muscle", name: "muscle", size: 4)])"#;
    const PARTS: &str = r#"(
        parts: [
            (id: "torso", name: "torso", part_type: Torso, size: 20, is_vital: true),
            (id: "arm", name: "arm", part_type: Arm, size: 10, mechanisms: ["muscle", "muscle"]),
        ],
    )"#;
    const TEMPLATES: &str = r#"(
        templates: [(
            id: "humanoid",
            name: "humanoid",
            center_slot: "torso",
            slots: { "torso": Torso, "left arm": Arm },
            connections: { "torso": ["left arm"] },
        )],
    )"#;
    const PRESETS: &str = r#"(
        presets: [(
            id: "human",
            name: "human",
            template: "humanoid",
            parts: { "torso": "torso", "left arm": "arm" },
        )],
    )"#;

    fn write_dir(parts: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mechanisms.ron"), MECHANISMS).unwrap();
        fs::write(dir.path().join("parts.ron"), parts).unwrap();
        fs::write(dir.path().join("templates.ron"), TEMPLATES).unwrap();
        fs::write(dir.path().join("presets.ron"), PRESETS).unwrap();
        fs::write(dir.path().join("config.toml"), "slot_offer_ttl = 12\n").unwrap();
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_consistent_catalog() {
        let dir = write_dir(PARTS);
        let factory = ContentFactory::new(dir.path());

        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.part_count(), 2);
        assert!(catalog.mechanism("muscle").is_some());
        assert!(catalog.part("torso").unwrap().is_vital);
        assert!(catalog.template("humanoid").is_some());
        assert!(catalog.preset("human").is_some());

        assert_eq!(factory.load_config().unwrap().slot_offer_ttl, Some(12));
    }

    #[test]
    fn dangling_mechanism_reference_fails() {
        let dir = write_dir(
            r#"(parts: [
                (id: "torso", name: "torso", part_type: Torso, size: 20),
                (id: "arm", name: "arm", part_type: Arm, size: 10, mechanisms: ["tendon"]),
            ])"#,
        );

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("Invalid body part 'arm'"));
    }

    #[test]
    fn duplicate_ids_fail() {
        let dir = write_dir(
            r#"(parts: [
                (id: "torso", name: "torso", part_type: Torso, size: 20),
                (id: "torso", name: "torso", part_type: Torso, size: 20),
                (id: "arm", name: "arm", part_type: Arm, size: 10),
            ])"#,
        );

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("Duplicate body part id 'torso'"));
    }

    #[test]
    fn unbuildable_preset_fails() {
        // "arm" is declared as a leg, so it cannot fill the arm slot.
        let dir = write_dir(
            r#"(parts: [
                (id: "torso", name: "torso", part_type: Torso, size: 20),
                (id: "arm", name: "arm", part_type: Leg, size: 10),
            ])"#,
        );

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("Invalid body preset 'human'"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("mechanisms.ron"));
    }
}
