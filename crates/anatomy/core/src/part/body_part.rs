//! The runtime body part value.

use crate::env::{BodyPartPrototype, LoadError, MechanismOracle};
use crate::mechanism::{Mechanism, MechanismUid};
use crate::part::{
    BodyPartCompatibility, BodyPartProperty, BodyPartType, InstallError, InstallRejection,
    PartError, PropertyKind, PropertySet,
};
use crate::surgery::{Surgeon, SurgeryContext, SurgeryData, SurgeryKind, SurgeryType, ToolSet};
use crate::types::{DamageContainer, DamageType, EntityId, ResistanceSet};

/// A single limb such as an arm or a leg.
///
/// Held either by a body (in one of its slots) or by a dropped-part wrapper
/// entity. Mechanisms inside the part are only reachable through the
/// install/drop/destroy operations, which keep `size_used` equal to the sum
/// of installed mechanism sizes and never above `size`.
#[derive(Debug)]
pub struct BodyPart {
    prototype_id: String,
    name: String,
    plural: String,
    rsi_path: String,
    rsi_state: String,
    part_type: BodyPartType,
    compatibility: BodyPartCompatibility,
    size: u32,
    size_used: u32,
    max_durability: u32,
    destroy_threshold: i32,
    damage: DamageContainer,
    resistance: ResistanceSet,
    mechanisms: Vec<Mechanism>,
    properties: PropertySet,
    is_vital: bool,
    surgery: Box<dyn SurgeryData>,
}

impl BodyPart {
    /// Builds a part from its prototype, instantiating every starting mechanism.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingMechanism` if any mechanism id does not
    /// resolve, and `LoadError::CapacityExceeded` if the starting mechanisms
    /// do not fit. Nothing is built in either case.
    pub fn from_prototype<M>(prototype: &BodyPartPrototype, oracle: &M) -> Result<Self, LoadError>
    where
        M: MechanismOracle + ?Sized,
    {
        let templates = prototype
            .mechanisms
            .iter()
            .map(|id| {
                oracle
                    .mechanism(id)
                    .ok_or_else(|| LoadError::MissingMechanism {
                        part: prototype.id.clone(),
                        mechanism: id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let required = templates
            .iter()
            .fold(0u32, |acc, template| acc.saturating_add(template.size));
        if required > prototype.size {
            return Err(LoadError::CapacityExceeded {
                part: prototype.id.clone(),
                required,
                size: prototype.size,
            });
        }

        Ok(Self {
            prototype_id: prototype.id.clone(),
            name: prototype.name.clone(),
            plural: prototype.plural.clone(),
            rsi_path: prototype.rsi_path.clone(),
            rsi_state: prototype.rsi_state.clone(),
            part_type: prototype.part_type,
            compatibility: prototype.compatibility,
            size: prototype.size,
            size_used: required,
            max_durability: prototype.durability,
            destroy_threshold: prototype.destroy_threshold,
            damage: DamageContainer::new(),
            resistance: prototype.resistance.clone(),
            mechanisms: templates.iter().map(Mechanism::from_prototype).collect(),
            properties: PropertySet::from_properties(prototype.properties.iter().cloned()),
            is_vital: prototype.is_vital,
            surgery: prototype.surgery.create(),
        })
    }

    /// Overwrites every field of this part from `prototype`.
    ///
    /// On error the part is left exactly as it was.
    pub fn load_from_prototype<M>(
        &mut self,
        prototype: &BodyPartPrototype,
        oracle: &M,
    ) -> Result<(), LoadError>
    where
        M: MechanismOracle + ?Sized,
    {
        *self = Self::from_prototype(prototype, oracle)?;
        Ok(())
    }

    pub fn prototype_id(&self) -> &str {
        &self.prototype_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn rsi_path(&self) -> &str {
        &self.rsi_path
    }

    pub fn rsi_state(&self) -> &str {
        &self.rsi_state
    }

    pub fn part_type(&self) -> BodyPartType {
        self.part_type
    }

    pub fn compatibility(&self) -> BodyPartCompatibility {
        self.compatibility
    }

    pub fn is_vital(&self) -> bool {
        self.is_vital
    }

    /// Total mechanism capacity.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Capacity consumed by installed mechanisms.
    pub fn size_used(&self) -> u32 {
        self.size_used
    }

    pub fn free_capacity(&self) -> u32 {
        self.size - self.size_used
    }

    /// Installed mechanisms, in install order.
    pub fn mechanisms(&self) -> &[Mechanism] {
        &self.mechanisms
    }

    pub fn mechanism(&self, uid: MechanismUid) -> Option<&Mechanism> {
        self.mechanisms.iter().find(|m| m.uid() == uid)
    }

    pub fn has_mechanism(&self, uid: MechanismUid) -> bool {
        self.mechanism(uid).is_some()
    }

    // ===== attachment and installation =====

    /// Whether `candidate` may be attached next to this part.
    pub fn can_attach_body_part(&self, candidate: &BodyPart) -> bool {
        self.surgery
            .can_attach_body_part(self.compatibility, candidate)
    }

    /// Whether `mechanism` fits and the surgical state allows installing it.
    pub fn can_install_mechanism(&self, mechanism: &Mechanism) -> bool {
        self.check_install(mechanism).is_ok()
    }

    fn check_install(&self, mechanism: &Mechanism) -> Result<(), InstallRejection> {
        if self.size_used.saturating_add(mechanism.size()) > self.size {
            return Err(InstallRejection::InsufficientCapacity {
                required: mechanism.size(),
                available: self.free_capacity(),
            });
        }
        if self.has_mechanism(mechanism.uid()) {
            return Err(InstallRejection::AlreadyInstalled(mechanism.uid()));
        }
        if !self.surgery.can_install_mechanism(mechanism) {
            return Err(InstallRejection::SurgeryBlocked);
        }
        Ok(())
    }

    /// Installs `mechanism` if it fits and surgery allows it.
    ///
    /// # Errors
    ///
    /// On rejection the part is unchanged and the mechanism is returned
    /// inside the [`InstallError`].
    pub fn try_install_mechanism(&mut self, mechanism: Mechanism) -> Result<(), InstallError> {
        if let Err(reason) = self.check_install(&mechanism) {
            return Err(InstallError { mechanism, reason });
        }

        self.size_used += mechanism.size();
        self.mechanisms.push(mechanism);
        Ok(())
    }

    /// Removes a mechanism so it can be dropped into the world.
    ///
    /// # Errors
    ///
    /// Returns `PartError::MechanismNotInstalled` if the mechanism is not in this part.
    pub fn drop_mechanism(&mut self, uid: MechanismUid) -> Result<Mechanism, PartError> {
        self.remove_mechanism(uid)
            .ok_or(PartError::MechanismNotInstalled { uid })
    }

    /// Removes and discards a mechanism. Returns false if it was not installed.
    pub fn destroy_mechanism(&mut self, uid: MechanismUid) -> bool {
        self.remove_mechanism(uid).is_some()
    }

    fn remove_mechanism(&mut self, uid: MechanismUid) -> Option<Mechanism> {
        let index = self.mechanisms.iter().position(|m| m.uid() == uid)?;
        let mechanism = self.mechanisms.remove(index);
        self.size_used -= mechanism.size();
        Some(mechanism)
    }

    // ===== surgery =====

    pub fn surgery_kind(&self) -> SurgeryKind {
        self.surgery.kind()
    }

    /// Would `tool` produce a valid surgical step right now?
    pub fn surgery_check(&self, tool: SurgeryType) -> bool {
        self.surgery.check_surgery(tool)
    }

    pub fn valid_surgery_tools(&self) -> ToolSet {
        self.surgery.valid_tools()
    }

    pub fn is_surgically_closed(&self) -> bool {
        self.surgery.is_closed()
    }

    pub fn surgery_status(&self) -> &'static str {
        self.surgery.describe()
    }

    /// Performs one surgical step with `tool`.
    ///
    /// `target` is the container holding this part (a body or a dropped
    /// part). Follow-ups such as organ extraction are sent to `surgeon`.
    pub fn attempt_surgery(
        &mut self,
        tool: SurgeryType,
        target: EntityId,
        surgeon: &mut dyn Surgeon,
        performer: EntityId,
    ) -> bool {
        let mut ctx = SurgeryContext {
            target,
            performer,
            surgeon,
            mechanisms: &self.mechanisms,
        };
        self.surgery.perform_surgery(tool, &mut ctx)
    }

    // ===== health =====

    pub fn max_durability(&self) -> u32 {
        self.max_durability
    }

    pub fn destroy_threshold(&self) -> i32 {
        self.destroy_threshold
    }

    pub fn damage(&self) -> &DamageContainer {
        &self.damage
    }

    pub fn resistance(&self) -> &ResistanceSet {
        &self.resistance
    }

    pub fn current_durability(&self) -> i64 {
        i64::from(self.max_durability) - i64::from(self.damage.total())
    }

    pub fn is_destroyed(&self) -> bool {
        self.current_durability() <= i64::from(self.destroy_threshold)
    }

    /// Applies damage after resistances and returns the amount taken.
    pub fn take_damage(&mut self, kind: DamageType, amount: u32) -> u32 {
        let applied = self.resistance.apply(kind, amount);
        self.damage.add(kind, applied);
        applied
    }

    pub fn heal(&mut self, kind: DamageType, amount: u32) -> u32 {
        self.damage.heal(kind, amount)
    }

    // ===== properties =====

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    /// Adds a property unless one of the same kind exists.
    pub fn try_add_property(&mut self, property: BodyPartProperty) -> bool {
        self.properties.try_add(property)
    }

    pub fn property(&self, kind: PropertyKind) -> Option<&BodyPartProperty> {
        self.properties.get(kind)
    }

    pub fn has_property(&self, kind: PropertyKind) -> bool {
        self.properties.has(kind)
    }
}
