//! Body templates (slot layout) and presets (which parts fill the slots).

use std::collections::BTreeMap;

use crate::env::LoadError;
use crate::part::BodyPartType;
use crate::types::SlotName;

/// Slot layout of a body: named slots, the part type each accepts and the
/// adjacency between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyTemplate {
    pub id: String,
    pub name: String,
    /// Slot every other part must stay connected to (usually the torso).
    pub center_slot: SlotName,
    pub slots: BTreeMap<SlotName, BodyPartType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connections: BTreeMap<SlotName, Vec<SlotName>>,
}

impl BodyTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        center_slot: impl Into<SlotName>,
        center_type: BodyPartType,
    ) -> Self {
        let center_slot = center_slot.into();
        let mut slots = BTreeMap::new();
        slots.insert(center_slot.clone(), center_type);
        Self {
            id: id.into(),
            name: name.into(),
            center_slot,
            slots,
            connections: BTreeMap::new(),
        }
    }

    /// Declares a slot accepting `part_type` (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<SlotName>, part_type: BodyPartType) -> Self {
        self.slots.insert(slot.into(), part_type);
        self
    }

    /// Connects two slots in both directions (builder pattern).
    #[must_use]
    pub fn connect(mut self, a: impl Into<SlotName>, b: impl Into<SlotName>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::link(&mut self.connections, &a, &b);
        Self::link(&mut self.connections, &b, &a);
        self
    }

    fn link(connections: &mut BTreeMap<SlotName, Vec<SlotName>>, from: &SlotName, to: &SlotName) {
        let entry = connections.entry(from.clone()).or_default();
        if !entry.contains(to) {
            entry.push(to.clone());
        }
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    pub fn slot_type(&self, slot: &str) -> Option<BodyPartType> {
        self.slots.get(slot).copied()
    }

    /// Slots adjacent to `slot`.
    pub fn connections(&self, slot: &str) -> &[SlotName] {
        self.connections.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks that every referenced slot exists and makes adjacency symmetric.
    ///
    /// Data files may list each connection once; after this call every edge
    /// is present in both directions.
    pub fn normalize(&mut self) -> Result<(), LoadError> {
        if !self.has_slot(self.center_slot.as_str()) {
            return Err(LoadError::UnknownSlot {
                owner: self.id.clone(),
                slot: self.center_slot.clone(),
            });
        }

        let edges: Vec<(SlotName, SlotName)> = self
            .connections
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from.clone(), to.clone())))
            .collect();

        for (from, to) in &edges {
            for slot in [from, to] {
                if !self.has_slot(slot.as_str()) {
                    return Err(LoadError::UnknownSlot {
                        owner: self.id.clone(),
                        slot: slot.clone(),
                    });
                }
            }
            Self::link(&mut self.connections, to, from);
        }

        Ok(())
    }
}

/// Which part prototype fills each slot of a template when a body spawns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyPreset {
    pub id: String,
    pub name: String,
    /// Template this preset fills.
    pub template: String,
    pub parts: BTreeMap<SlotName, String>,
}

impl BodyPreset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            template: template.into(),
            parts: BTreeMap::new(),
        }
    }

    /// Fills `slot` with the part prototype `part_id` (builder pattern).
    #[must_use]
    pub fn with_part(mut self, slot: impl Into<SlotName>, part_id: impl Into<String>) -> Self {
        self.parts.insert(slot.into(), part_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_makes_connections_symmetric() {
        let mut template = BodyTemplate::new("human", "human", "torso", BodyPartType::Torso)
            .with_slot("head", BodyPartType::Head);
        template
            .connections
            .insert(SlotName::from("torso"), vec![SlotName::from("head")]);

        template.normalize().unwrap();

        assert_eq!(template.connections("head"), &[SlotName::from("torso")]);
        assert_eq!(template.connections("torso"), &[SlotName::from("head")]);
    }

    #[test]
    fn normalize_rejects_unknown_slots() {
        let mut template = BodyTemplate::new("human", "human", "torso", BodyPartType::Torso)
            .connect("torso", "tail");

        let err = template.normalize().unwrap_err();
        assert!(matches!(err, LoadError::UnknownSlot { ref slot, .. } if slot.as_str() == "tail"));
    }
}
