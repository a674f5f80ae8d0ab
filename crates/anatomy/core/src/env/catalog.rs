//! In-memory prototype catalog implementing every oracle.
//!
//! Loaders fill a catalog from data files; tests build one by hand.

use std::collections::HashMap;

use super::{BodyOracle, BodyPartOracle, BodyPartPrototype, MechanismOracle, MechanismPrototype};
use crate::body::{BodyPreset, BodyTemplate};

#[derive(Clone, Debug, Default)]
pub struct PrototypeCatalog {
    parts: HashMap<String, BodyPartPrototype>,
    mechanisms: HashMap<String, MechanismPrototype>,
    templates: HashMap<String, BodyTemplate>,
    presets: HashMap<String, BodyPreset>,
}

impl PrototypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a part prototype, keyed by its id.
    pub fn insert_part(&mut self, prototype: BodyPartPrototype) {
        self.parts.insert(prototype.id.clone(), prototype);
    }

    pub fn insert_mechanism(&mut self, prototype: MechanismPrototype) {
        self.mechanisms.insert(prototype.id.clone(), prototype);
    }

    pub fn insert_template(&mut self, template: BodyTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn insert_preset(&mut self, preset: BodyPreset) {
        self.presets.insert(preset.id.clone(), preset);
    }

    /// Adds a part prototype (builder pattern).
    #[must_use]
    pub fn with_part(mut self, prototype: BodyPartPrototype) -> Self {
        self.insert_part(prototype);
        self
    }

    #[must_use]
    pub fn with_mechanism(mut self, prototype: MechanismPrototype) -> Self {
        self.insert_mechanism(prototype);
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: BodyTemplate) -> Self {
        self.insert_template(template);
        self
    }

    #[must_use]
    pub fn with_preset(mut self, preset: BodyPreset) -> Self {
        self.insert_preset(preset);
        self
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn mechanism_count(&self) -> usize {
        self.mechanisms.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }
}

impl BodyPartOracle for PrototypeCatalog {
    fn part(&self, id: &str) -> Option<BodyPartPrototype> {
        self.parts.get(id).cloned()
    }
}

impl MechanismOracle for PrototypeCatalog {
    fn mechanism(&self, id: &str) -> Option<MechanismPrototype> {
        self.mechanisms.get(id).cloned()
    }
}

impl BodyOracle for PrototypeCatalog {
    fn template(&self, id: &str) -> Option<BodyTemplate> {
        self.templates.get(id).cloned()
    }

    fn preset(&self, id: &str) -> Option<BodyPreset> {
        self.presets.get(id).cloned()
    }
}
