//! Mechanisms: sized organs and implants installed inside body parts.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::env::MechanismPrototype;
use crate::part::BodyPartCompatibility;
use crate::types::DamageContainer;

static NEXT_MECHANISM_UID: AtomicU64 = AtomicU64::new(1);

/// Identity of one mechanism instance.
///
/// Two mechanisms built from the same prototype are distinct. Uids are
/// allocated from a process-wide counter and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MechanismUid(pub u64);

impl MechanismUid {
    /// Allocates a fresh uid.
    pub fn next() -> Self {
        Self(NEXT_MECHANISM_UID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MechanismUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// An organ or implant occupying `size` units of a body part's capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mechanism {
    uid: MechanismUid,
    prototype_id: String,
    pub name: String,
    pub description: String,
    pub examine_message: String,
    size: u32,
    pub max_durability: u32,
    pub destroy_threshold: i32,
    pub compatibility: BodyPartCompatibility,
    pub damage: DamageContainer,
}

impl Mechanism {
    /// Instantiates a new mechanism with a fresh uid.
    pub fn from_prototype(prototype: &MechanismPrototype) -> Self {
        Self {
            uid: MechanismUid::next(),
            prototype_id: prototype.id.clone(),
            name: prototype.name.clone(),
            description: prototype.description.clone(),
            examine_message: prototype.examine_message.clone(),
            size: prototype.size,
            max_durability: prototype.durability,
            destroy_threshold: prototype.destroy_threshold,
            compatibility: prototype.compatibility,
            damage: DamageContainer::new(),
        }
    }

    pub fn uid(&self) -> MechanismUid {
        self.uid
    }

    pub fn prototype_id(&self) -> &str {
        &self.prototype_id
    }

    /// Capacity this mechanism consumes inside its part.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn current_durability(&self) -> i64 {
        i64::from(self.max_durability) - i64::from(self.damage.total())
    }
}
