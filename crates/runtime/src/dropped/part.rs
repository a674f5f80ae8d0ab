//! A detached body part lying in the world, and its slot offer rounds.

use std::collections::BTreeMap;

use anatomy_core::{BodyPart, EntityId, SlotName, Tick};

use crate::ui::RequestBodyPartSlotSurgeryUiMessage;

/// Options offered to one user for one target body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOffer {
    pub user: EntityId,
    pub target: EntityId,
    pub opened_at: Tick,
    options: BTreeMap<u32, SlotName>,
}

impl SlotOffer {
    pub fn slot(&self, handle: u32) -> Option<&SlotName> {
        self.options.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the offer has outlived `ttl` ticks at `now`.
    pub fn is_expired(&self, now: Tick, ttl: u64) -> bool {
        now.since(self.opened_at) >= ttl
    }

    fn message(&self) -> RequestBodyPartSlotSurgeryUiMessage {
        RequestBodyPartSlotSurgeryUiMessage {
            options: self
                .options
                .iter()
                .map(|(&handle, slot)| (slot.clone(), handle))
                .collect(),
        }
    }
}

/// A resolved selection: attach to `slot` of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection {
    pub target: EntityId,
    pub slot: SlotName,
}

/// Why a selection could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no slot offer is pending")]
    NoOffer,

    #[error("the pending offer was made to {expected}, not {actual}")]
    WrongUser { expected: EntityId, actual: EntityId },

    #[error("handle {0} is not part of the pending offer")]
    UnknownHandle(u32),
}

/// Wrapper entity state for a body part that is in no body.
///
/// Each interaction starts a new offer round. Handles keep increasing across
/// rounds, so a handle from a replaced offer never names a fresh option.
///
/// The part is only missing while an install is in flight: it is taken out,
/// handed to the body and put back if the body refuses it.
#[derive(Debug)]
pub struct DroppedBodyPart {
    part: Option<BodyPart>,
    offer: Option<SlotOffer>,
    next_handle: u32,
}

impl DroppedBodyPart {
    pub fn new(part: BodyPart) -> Self {
        Self {
            part: Some(part),
            offer: None,
            next_handle: 0,
        }
    }

    pub fn contained(&self) -> Option<&BodyPart> {
        self.part.as_ref()
    }

    pub fn contained_mut(&mut self) -> Option<&mut BodyPart> {
        self.part.as_mut()
    }

    pub fn into_part(self) -> Option<BodyPart> {
        self.part
    }

    pub(crate) fn take_part(&mut self) -> Option<BodyPart> {
        self.part.take()
    }

    pub(crate) fn put_back(&mut self, part: BodyPart) {
        debug_assert!(self.part.is_none());
        self.part = Some(part);
    }

    pub fn pending_offer(&self) -> Option<&SlotOffer> {
        self.offer.as_ref()
    }

    /// Drops the pending offer, returning it so its UI can be closed.
    pub fn clear_offer(&mut self) -> Option<SlotOffer> {
        self.offer.take()
    }

    /// Starts an offer round over `slots`.
    ///
    /// Returns the UI message to send, or `None` (and no pending offer) when
    /// there is nothing to offer.
    pub fn offer(
        &mut self,
        user: EntityId,
        target: EntityId,
        slots: Vec<SlotName>,
        now: Tick,
    ) -> Option<RequestBodyPartSlotSurgeryUiMessage> {
        self.offer = None;
        if slots.is_empty() {
            return None;
        }

        let options = slots
            .into_iter()
            .map(|slot| {
                let handle = self.next_handle;
                self.next_handle = self.next_handle.wrapping_add(1);
                (handle, slot)
            })
            .collect();
        let offer = SlotOffer {
            user,
            target,
            opened_at: now,
            options,
        };
        let message = offer.message();
        self.offer = Some(offer);
        Some(message)
    }

    /// Resolves `handle` against the pending offer.
    ///
    /// An answer from anyone but the offered user is refused and leaves the
    /// offer pending. Otherwise the offer is consumed, whether or not the
    /// handle was valid.
    pub fn take_selection(
        &mut self,
        user: EntityId,
        handle: u32,
    ) -> Result<SlotSelection, SelectionError> {
        let offered = self.offer.as_ref().ok_or(SelectionError::NoOffer)?.user;
        if offered != user {
            return Err(SelectionError::WrongUser {
                expected: offered,
                actual: user,
            });
        }
        let offer = self.offer.take().ok_or(SelectionError::NoOffer)?;
        let slot = offer
            .slot(handle)
            .cloned()
            .ok_or(SelectionError::UnknownHandle(handle))?;
        Ok(SlotSelection {
            target: offer.target,
            slot,
        })
    }

    /// Drops the pending offer if it is older than `ttl` ticks.
    pub fn expire_offer(&mut self, now: Tick, ttl: u64) -> Option<SlotOffer> {
        if self.offer.as_ref()?.is_expired(now, ttl) {
            self.offer.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use anatomy_core::{BodyPartPrototype, BodyPartType, PrototypeCatalog};

    use super::*;

    const USER: EntityId = EntityId(1);
    const BODY: EntityId = EntityId(2);

    fn dropped_arm() -> DroppedBodyPart {
        let prototype = BodyPartPrototype::new("arm", "left arm", BodyPartType::Arm, 10);
        let part = BodyPart::from_prototype(&prototype, &PrototypeCatalog::new()).unwrap();
        DroppedBodyPart::new(part)
    }

    fn slots(names: &[&str]) -> Vec<SlotName> {
        names.iter().copied().map(SlotName::from).collect()
    }

    #[test]
    fn offer_assigns_one_handle_per_slot() {
        let mut dropped = dropped_arm();
        let message = dropped
            .offer(USER, BODY, slots(&["left arm", "right arm"]), Tick(5))
            .unwrap();

        assert_eq!(message.options.len(), 2);
        assert_eq!(message.options.get("left arm"), Some(&0));
        assert_eq!(message.options.get("right arm"), Some(&1));
        assert_eq!(dropped.pending_offer().unwrap().opened_at, Tick(5));
    }

    #[test]
    fn empty_offer_leaves_nothing_pending() {
        let mut dropped = dropped_arm();
        dropped.offer(USER, BODY, slots(&["left arm"]), Tick::ZERO);

        assert!(dropped.offer(USER, BODY, Vec::new(), Tick::ZERO).is_none());
        assert!(dropped.pending_offer().is_none());
    }

    #[test]
    fn selection_consumes_the_offer() {
        let mut dropped = dropped_arm();
        dropped.offer(USER, BODY, slots(&["left arm"]), Tick::ZERO);

        let selection = dropped.take_selection(USER, 0).unwrap();
        assert_eq!(selection.target, BODY);
        assert_eq!(selection.slot.as_str(), "left arm");
        assert_eq!(dropped.take_selection(USER, 0), Err(SelectionError::NoOffer));
    }

    #[test]
    fn handles_from_replaced_rounds_are_stale() {
        let mut dropped = dropped_arm();
        dropped.offer(USER, BODY, slots(&["left arm"]), Tick::ZERO);
        let second = dropped
            .offer(USER, BODY, slots(&["left arm"]), Tick::ZERO)
            .unwrap();

        assert_eq!(second.options.get("left arm"), Some(&1));
        assert_eq!(
            dropped.take_selection(USER, 0),
            Err(SelectionError::UnknownHandle(0))
        );
        assert!(dropped.pending_offer().is_none());
    }

    #[test]
    fn other_users_cannot_answer() {
        let mut dropped = dropped_arm();
        dropped.offer(USER, BODY, slots(&["left arm"]), Tick::ZERO);

        assert_eq!(
            dropped.take_selection(EntityId(9), 0),
            Err(SelectionError::WrongUser {
                expected: USER,
                actual: EntityId(9)
            })
        );
        assert_eq!(dropped.pending_offer().unwrap().user, USER);
        assert_eq!(dropped.take_selection(USER, 0).unwrap().slot.as_str(), "left arm");
    }

    #[test]
    fn refused_part_goes_back_into_the_wrapper() {
        let mut dropped = dropped_arm();

        let part = dropped.take_part().unwrap();
        assert!(dropped.contained().is_none());
        dropped.put_back(part);

        assert_eq!(dropped.contained().unwrap().name(), "left arm");
        assert_eq!(dropped.into_part().unwrap().name(), "left arm");
    }

    #[test]
    fn offers_expire_after_ttl() {
        let mut dropped = dropped_arm();
        dropped.offer(USER, BODY, slots(&["left arm"]), Tick(10));

        assert!(dropped.expire_offer(Tick(14), 5).is_none());
        assert!(dropped.pending_offer().is_some());
        assert!(dropped.expire_offer(Tick(15), 5).is_some());
        assert!(dropped.pending_offer().is_none());
    }
}
