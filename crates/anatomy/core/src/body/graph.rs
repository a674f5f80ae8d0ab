//! Reference slot graph: a template plus the parts currently filling it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{AttachError, AttachRejection, BodyManager, BodyPreset, BodyTemplate};
use crate::env::{BodyOracle, BodyPartOracle, Env, LoadError, MechanismOracle, OracleError};
use crate::part::{BodyPart, BodyPartType};
use crate::types::SlotName;

/// A body: named slots connected in a graph, each holding at most one part.
///
/// Every installed part stays reachable from the center slot through other
/// installed parts. Removing a part detaches whatever it was holding up.
#[derive(Debug)]
pub struct Body {
    template: BodyTemplate,
    parts: BTreeMap<SlotName, BodyPart>,
}

impl Body {
    /// Creates an empty body over `template`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnknownSlot` if the template's center or
    /// connections name slots it does not declare.
    pub fn new(mut template: BodyTemplate) -> Result<Self, LoadError> {
        template.normalize()?;
        Ok(Self {
            template,
            parts: BTreeMap::new(),
        })
    }

    /// Builds a fully populated body from a preset.
    ///
    /// Every part is loaded before anything is returned; any missing template,
    /// part or mechanism id fails the whole load.
    pub fn from_preset<P, M, B>(env: &Env<'_, P, M, B>, preset_id: &str) -> Result<Self, LoadError>
    where
        P: BodyPartOracle + ?Sized,
        M: MechanismOracle + ?Sized,
        B: BodyOracle + ?Sized,
    {
        let bodies = env.bodies()?;
        let preset = bodies
            .preset(preset_id)
            .ok_or_else(|| OracleError::PresetNotFound(preset_id.to_string()))?;
        let template = bodies
            .template(&preset.template)
            .ok_or_else(|| OracleError::TemplateNotFound(preset.template.clone()))?;

        let mut body = Self::new(template)?;
        body.populate(env, &preset)?;
        Ok(body)
    }

    fn populate<P, M, B>(&mut self, env: &Env<'_, P, M, B>, preset: &BodyPreset) -> Result<(), LoadError>
    where
        P: BodyPartOracle + ?Sized,
        M: MechanismOracle + ?Sized,
        B: BodyOracle + ?Sized,
    {
        let parts = env.parts()?;
        let mechanisms = env.mechanisms()?;

        for (slot, part_id) in &preset.parts {
            let expected = self
                .template
                .slot_type(slot.as_str())
                .ok_or_else(|| LoadError::UnknownSlot {
                    owner: preset.id.clone(),
                    slot: slot.clone(),
                })?;
            let prototype = parts
                .part(part_id)
                .ok_or_else(|| OracleError::PartNotFound(part_id.clone()))?;
            if prototype.part_type != expected {
                return Err(LoadError::SlotTypeMismatch {
                    preset: preset.id.clone(),
                    slot: slot.clone(),
                    expected: expected.to_string(),
                    found: prototype.part_type.to_string(),
                });
            }

            let part = BodyPart::from_prototype(&prototype, mechanisms)?;
            self.parts.insert(slot.clone(), part);
        }
        Ok(())
    }

    pub fn template(&self) -> &BodyTemplate {
        &self.template
    }

    pub fn center_slot(&self) -> &SlotName {
        &self.template.center_slot
    }

    pub fn center_part(&self) -> Option<&BodyPart> {
        self.parts.get(&self.template.center_slot)
    }

    pub fn part(&self, slot: &str) -> Option<&BodyPart> {
        self.parts.get(slot)
    }

    pub fn part_mut(&mut self, slot: &str) -> Option<&mut BodyPart> {
        self.parts.get_mut(slot)
    }

    /// Installed parts in slot order.
    pub fn parts(&self) -> impl Iterator<Item = (&SlotName, &BodyPart)> {
        self.parts.iter()
    }

    pub fn parts_of_type(&self, part_type: BodyPartType) -> impl Iterator<Item = (&SlotName, &BodyPart)> {
        self.parts
            .iter()
            .filter(move |(_, part)| part.part_type() == part_type)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Attaches `part` to an empty slot after checking every attachment rule.
    ///
    /// An empty body only accepts a part in its center slot. Otherwise the
    /// slot must be adjacent to an installed part whose surgery strategy
    /// accepts the newcomer.
    ///
    /// # Errors
    ///
    /// Returns the part unchanged inside [`AttachError`] when a rule fails.
    pub fn attach_part(&mut self, slot: &SlotName, part: BodyPart) -> Result<(), AttachError> {
        if let Err(reason) = self.check_attach(slot, &part) {
            return Err(AttachError::new(part, slot.clone(), reason));
        }
        self.parts.insert(slot.clone(), part);
        Ok(())
    }

    /// Runs every [`Body::attach_part`] rule without attaching anything.
    pub fn check_attach(&self, slot: &SlotName, part: &BodyPart) -> Result<(), AttachRejection> {
        let expected = self
            .template
            .slot_type(slot.as_str())
            .ok_or(AttachRejection::UnknownSlot)?;
        if self.parts.contains_key(slot) {
            return Err(AttachRejection::Occupied);
        }
        if expected != part.part_type() {
            return Err(AttachRejection::TypeMismatch {
                expected,
                found: part.part_type(),
            });
        }

        if self.parts.is_empty() {
            return if *slot == self.template.center_slot {
                Ok(())
            } else {
                Err(AttachRejection::CenterRequired)
            };
        }

        let accepted = self
            .part_connections(slot.as_str())
            .into_iter()
            .any(|neighbor| neighbor.can_attach_body_part(part));
        if accepted {
            Ok(())
        } else {
            Err(AttachRejection::NoCompatibleConnection)
        }
    }

    /// Puts `part` into `slot` without attachment checks, returning any part
    /// it displaced. Used when building bodies from trusted data.
    ///
    /// # Errors
    ///
    /// Only fails for slots the template does not declare.
    pub fn insert_part(
        &mut self,
        slot: &SlotName,
        part: BodyPart,
    ) -> Result<Option<BodyPart>, AttachError> {
        if !self.template.has_slot(slot.as_str()) {
            return Err(AttachError::new(
                part,
                slot.clone(),
                AttachRejection::UnknownSlot,
            ));
        }
        Ok(self.parts.insert(slot.clone(), part))
    }

    /// Removes the part in `slot` and every part that loses its path to the
    /// center as a result.
    ///
    /// The requested part comes first, followed by the cascade in slot order.
    /// An empty slot removes nothing.
    pub fn remove_part(&mut self, slot: &str) -> Vec<(SlotName, BodyPart)> {
        let Some((slot, part)) = self.parts.remove_entry(slot) else {
            return Vec::new();
        };
        let mut removed = vec![(slot, part)];

        let anchored = self.reachable_from_center();
        let stranded: Vec<SlotName> = self
            .parts
            .keys()
            .filter(|slot| !anchored.contains(*slot))
            .cloned()
            .collect();
        for slot in stranded {
            if let Some(part) = self.parts.remove(&slot) {
                removed.push((slot, part));
            }
        }
        removed
    }

    /// Whether the part in `slot` reaches the center through installed parts.
    pub fn connected_to_center(&self, slot: &str) -> bool {
        self.reachable_from_center().contains(slot)
    }

    fn reachable_from_center(&self) -> BTreeSet<SlotName> {
        let mut seen = BTreeSet::new();
        let center = &self.template.center_slot;
        if !self.parts.contains_key(center) {
            return seen;
        }

        let mut queue = VecDeque::from([center.clone()]);
        seen.insert(center.clone());
        while let Some(slot) = queue.pop_front() {
            for next in self.template.connections(slot.as_str()) {
                if self.parts.contains_key(next) && seen.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }
        seen
    }
}

impl BodyManager for Body {
    fn all_slots(&self) -> BTreeSet<SlotName> {
        self.template.slots.keys().cloned().collect()
    }

    fn occupied_slots(&self) -> BTreeSet<SlotName> {
        self.parts.keys().cloned().collect()
    }

    fn slot_type(&self, slot: &str) -> Option<BodyPartType> {
        self.template.slot_type(slot)
    }

    fn part_connections(&self, slot: &str) -> Vec<&BodyPart> {
        self.template
            .connections(slot)
            .iter()
            .filter_map(|neighbor| self.parts.get(neighbor))
            .collect()
    }

    fn install_body_part(&mut self, slot: &SlotName, part: BodyPart) -> Result<(), AttachError> {
        self.attach_part(slot, part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::attachment_candidates;
    use crate::env::{AnatomyEnv, BodyPartPrototype, MechanismPrototype, PrototypeCatalog};
    use crate::part::BodyPartCompatibility;

    fn humanoid() -> BodyTemplate {
        BodyTemplate::new("humanoid", "humanoid", "torso", BodyPartType::Torso)
            .with_slot("head", BodyPartType::Head)
            .with_slot("left arm", BodyPartType::Arm)
            .with_slot("left hand", BodyPartType::Hand)
            .with_slot("right arm", BodyPartType::Arm)
            .connect("torso", "head")
            .connect("torso", "left arm")
            .connect("left arm", "left hand")
            .connect("torso", "right arm")
    }

    fn catalog() -> PrototypeCatalog {
        PrototypeCatalog::new()
            .with_mechanism(MechanismPrototype::new("muscle", "muscle", 4))
            .with_part(BodyPartPrototype::new("torso", "torso", BodyPartType::Torso, 20))
            .with_part(BodyPartPrototype::new("head", "head", BodyPartType::Head, 5))
            .with_part(
                BodyPartPrototype::new("arm", "arm", BodyPartType::Arm, 10)
                    .with_mechanisms(["muscle", "muscle"]),
            )
            .with_part(BodyPartPrototype::new("hand", "hand", BodyPartType::Hand, 3))
            .with_part(
                BodyPartPrototype::new("robot arm", "robot arm", BodyPartType::Arm, 10)
                    .with_compatibility(BodyPartCompatibility::Mechanical),
            )
            .with_template(humanoid())
            .with_preset(
                BodyPreset::new("human", "human", "humanoid")
                    .with_part("torso", "torso")
                    .with_part("head", "head")
                    .with_part("left arm", "arm")
                    .with_part("left hand", "hand")
                    .with_part("right arm", "arm"),
            )
    }

    fn part(catalog: &PrototypeCatalog, id: &str) -> BodyPart {
        BodyPart::from_prototype(&catalog.part(id).unwrap(), catalog).unwrap()
    }

    fn human(catalog: &PrototypeCatalog) -> Body {
        Body::from_preset(&AnatomyEnv::from_catalog(catalog), "human").unwrap()
    }

    #[test]
    fn preset_populates_every_slot() {
        let catalog = catalog();
        let body = human(&catalog);

        assert_eq!(body.part_count(), 5);
        assert_eq!(body.center_part().map(BodyPart::part_type), Some(BodyPartType::Torso));
        assert_eq!(body.parts_of_type(BodyPartType::Arm).count(), 2);
        assert_eq!(body.part("left arm").unwrap().mechanisms().len(), 2);
        assert_eq!(body.occupied_slots(), body.all_slots());
    }

    #[test]
    fn preset_with_missing_part_is_fatal() {
        let catalog = catalog().with_preset(
            BodyPreset::new("broken", "broken", "humanoid").with_part("head", "ghost head"),
        );

        let err = Body::from_preset(&AnatomyEnv::from_catalog(&catalog), "broken").unwrap_err();
        assert_eq!(err, LoadError::Oracle(OracleError::PartNotFound("ghost head".into())));
    }

    #[test]
    fn preset_type_mismatch_is_fatal() {
        let catalog = catalog().with_preset(
            BodyPreset::new("odd", "odd", "humanoid").with_part("head", "hand"),
        );

        let err = Body::from_preset(&AnatomyEnv::from_catalog(&catalog), "odd").unwrap_err();
        assert!(matches!(err, LoadError::SlotTypeMismatch { ref slot, .. } if slot.as_str() == "head"));
    }

    #[test]
    fn missing_oracle_is_reported() {
        let catalog = catalog();
        let env: AnatomyEnv<'_> = Env::new(
            None,
            Some(&catalog as &dyn MechanismOracle),
            Some(&catalog as &dyn BodyOracle),
        );

        let err = Body::from_preset(&env, "human").unwrap_err();
        assert_eq!(err, LoadError::Oracle(OracleError::PartsNotAvailable));
    }

    #[test]
    fn removing_a_limb_cascades_to_its_children() {
        let catalog = catalog();
        let mut body = human(&catalog);

        let removed = body.remove_part("left arm");
        let slots: Vec<&str> = removed.iter().map(|(slot, _)| slot.as_str()).collect();

        assert_eq!(slots, ["left arm", "left hand"]);
        assert!(body.part("left arm").is_none());
        assert!(body.part("left hand").is_none());
        assert!(body.connected_to_center("right arm"));
        assert_eq!(removed[0].1.mechanisms().len(), 2);
    }

    #[test]
    fn removing_the_center_strands_everything() {
        let catalog = catalog();
        let mut body = human(&catalog);

        let removed = body.remove_part("torso");
        assert_eq!(removed.len(), 5);
        assert!(body.is_empty());
        assert!(body.remove_part("torso").is_empty());
    }

    #[test]
    fn attach_checks_slot_rules() {
        let catalog = catalog();
        let mut body = human(&catalog);
        body.remove_part("left arm");

        let err = body
            .attach_part(&SlotName::from("head"), part(&catalog, "arm"))
            .unwrap_err();
        assert_eq!(err.reason, AttachRejection::Occupied);

        let err = body
            .attach_part(&SlotName::from("left hand"), part(&catalog, "arm"))
            .unwrap_err();
        assert!(matches!(err.reason, AttachRejection::TypeMismatch { .. }));

        let err = body
            .attach_part(&SlotName::from("tail"), err.into_part())
            .unwrap_err();
        assert_eq!(err.reason, AttachRejection::UnknownSlot);

        body.attach_part(&SlotName::from("left arm"), err.into_part())
            .unwrap();
        assert!(body.connected_to_center("left arm"));
    }

    #[test]
    fn incompatible_neighbor_blocks_attachment() {
        let catalog = catalog();
        let mut body = human(&catalog);
        body.remove_part("left arm");

        let err = body
            .attach_part(&SlotName::from("left arm"), part(&catalog, "robot arm"))
            .unwrap_err();
        assert_eq!(err.reason, AttachRejection::NoCompatibleConnection);
        assert!(body.part("left arm").is_none());
    }

    #[test]
    fn empty_body_accepts_only_the_center() {
        let catalog = catalog();
        let mut body = Body::new(humanoid()).unwrap();

        let err = body
            .attach_part(&SlotName::from("head"), part(&catalog, "head"))
            .unwrap_err();
        assert_eq!(err.reason, AttachRejection::CenterRequired);

        body.attach_part(&SlotName::from("torso"), part(&catalog, "torso"))
            .unwrap();
        body.attach_part(&SlotName::from("head"), err.into_part())
            .unwrap();
        assert_eq!(body.part_count(), 2);
    }

    #[test]
    fn candidates_follow_the_graph() {
        let catalog = catalog();
        let mut body = human(&catalog);
        let arm = part(&catalog, "arm");

        assert!(attachment_candidates(&body, &arm).is_empty());

        body.remove_part("left arm");
        assert_eq!(attachment_candidates(&body, &arm), vec![SlotName::from("left arm")]);

        // The hand slot hangs off the missing arm, so it is not offered.
        let hand = part(&catalog, "hand");
        assert!(attachment_candidates(&body, &hand).is_empty());

        let robot = part(&catalog, "robot arm");
        assert!(attachment_candidates(&body, &robot).is_empty());
    }

    #[test]
    fn forced_insert_skips_rules_but_not_slots() {
        let catalog = catalog();
        let mut body = Body::new(humanoid()).unwrap();

        let displaced = body
            .insert_part(&SlotName::from("left hand"), part(&catalog, "hand"))
            .unwrap();
        assert!(displaced.is_none());
        assert!(!body.connected_to_center("left hand"));

        let err = body
            .insert_part(&SlotName::from("wing"), part(&catalog, "hand"))
            .unwrap_err();
        assert_eq!(err.reason, AttachRejection::UnknownSlot);
    }
}
