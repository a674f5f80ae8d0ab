//! Primitive identifiers and value types shared by every module.
mod common;
mod damage;

pub use common::{EntityId, Position, SlotName, Tick};
pub use damage::{DamageContainer, DamageType, Resistance, ResistanceSet};
