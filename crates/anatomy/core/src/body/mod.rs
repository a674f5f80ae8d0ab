//! Body slot graphs and the capability that attachment workflows query.
//!
//! [`BodyManager`] is the narrow view a dropped part needs of whatever owns
//! the slot graph. [`Body`] is the in-crate implementation built from
//! templates and presets.
mod error;
mod graph;
mod movement;
mod template;

use std::collections::BTreeSet;

pub use error::{AttachError, AttachRejection};
pub use graph::Body;
pub use movement::MovementSpeed;
pub use template::{BodyPreset, BodyTemplate};

use crate::part::{BodyPart, BodyPartType};
use crate::types::SlotName;

/// Owner of a slot graph that body parts can be installed into.
pub trait BodyManager {
    /// Every slot the graph declares.
    fn all_slots(&self) -> BTreeSet<SlotName>;

    /// Slots currently holding a part.
    fn occupied_slots(&self) -> BTreeSet<SlotName>;

    /// Part type a slot accepts, if the slot exists.
    fn slot_type(&self, slot: &str) -> Option<BodyPartType>;

    /// Installed parts adjacent to `slot`.
    fn part_connections(&self, slot: &str) -> Vec<&BodyPart>;

    /// Installs a detached part, re-validating every attachment rule.
    fn install_body_part(&mut self, slot: &SlotName, part: BodyPart) -> Result<(), AttachError>;
}

/// Slots of `body` where `part` could be attached right now.
///
/// A slot qualifies when it is empty, accepts the part's type and is
/// adjacent to an installed part that accepts the newcomer.
pub fn attachment_candidates<B>(body: &B, part: &BodyPart) -> Vec<SlotName>
where
    B: BodyManager + ?Sized,
{
    let occupied = body.occupied_slots();
    body.all_slots()
        .into_iter()
        .filter(|slot| !occupied.contains(slot))
        .filter(|slot| body.slot_type(slot.as_str()) == Some(part.part_type()))
        .filter(|slot| {
            body.part_connections(slot.as_str())
                .into_iter()
                .any(|neighbor| neighbor.can_attach_body_part(part))
        })
        .collect()
}
