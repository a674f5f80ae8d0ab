//! Immutable templates that body parts and mechanisms are built from.

use crate::part::{BodyPartCompatibility, BodyPartProperty, BodyPartType};
use crate::surgery::SurgeryKind;
use crate::types::ResistanceSet;

/// Template for a mechanism (organ or implant).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MechanismPrototype {
    pub id: String,
    pub name: String,
    pub description: String,
    pub examine_message: String,
    /// Capacity consumed inside the host part.
    pub size: u32,
    pub durability: u32,
    pub destroy_threshold: i32,
    pub compatibility: BodyPartCompatibility,
}

impl MechanismPrototype {
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            ..Self::default()
        }
    }
}

impl Default for MechanismPrototype {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            examine_message: String::new(),
            size: 1,
            durability: 10,
            destroy_threshold: -10,
            compatibility: BodyPartCompatibility::Biological,
        }
    }
}

/// Template for a body part.
///
/// `mechanisms` lists mechanism prototype ids the part starts with; each is
/// resolved through a [`super::MechanismOracle`] when the part is loaded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyPartPrototype {
    pub id: String,
    pub name: String,
    pub plural: String,
    pub part_type: BodyPartType,
    pub rsi_path: String,
    pub rsi_state: String,
    pub durability: u32,
    pub destroy_threshold: i32,
    pub resistance: ResistanceSet,
    /// Total mechanism capacity.
    pub size: u32,
    pub compatibility: BodyPartCompatibility,
    pub surgery: SurgeryKind,
    pub properties: Vec<BodyPartProperty>,
    pub mechanisms: Vec<String>,
    /// Losing the last part of this type kills the body.
    pub is_vital: bool,
}

impl BodyPartPrototype {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        part_type: BodyPartType,
        size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            part_type,
            size,
            ..Self::default()
        }
    }

    /// Sets the starting mechanism ids (builder pattern).
    #[must_use]
    pub fn with_mechanisms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mechanisms = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets compatibility and the matching surgery strategy (builder pattern).
    #[must_use]
    pub fn with_compatibility(mut self, compatibility: BodyPartCompatibility) -> Self {
        self.compatibility = compatibility;
        if compatibility == BodyPartCompatibility::Mechanical {
            self.surgery = SurgeryKind::Mechanical;
        }
        self
    }
}

impl Default for BodyPartPrototype {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            plural: String::new(),
            part_type: BodyPartType::Other,
            rsi_path: String::new(),
            rsi_state: String::new(),
            durability: 50,
            destroy_threshold: -50,
            resistance: ResistanceSet::default(),
            size: 0,
            compatibility: BodyPartCompatibility::Biological,
            surgery: SurgeryKind::Biological,
            properties: Vec::new(),
            mechanisms: Vec::new(),
            is_vital: false,
        }
    }
}
