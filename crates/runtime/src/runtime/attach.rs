//! Dropped body part attachment workflow.
//!
//! One round: `interact` offers the slots the part could go into right now,
//! and `receive_slot_selection` resolves the user's answer against that
//! offer. Every new interaction discards the previous offer, so answers are
//! always checked against the graph the offer was computed from.

use tracing::{debug, info, warn};

use anatomy_core::{BodyManager, EntityId, SlotName, attachment_candidates};

use super::{Runtime, dropped_part_mut};
use crate::dropped::SelectionError;
use crate::error::{Result, RuntimeError};
use crate::events::{BodyEvent, InterfaceEvent, Notice};
use crate::ui::{ReceiveBodyPartSlotSurgeryUiMessage, RequestBodyPartSlotSurgeryUiMessage};

/// How a slot selection was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The part is in `slot` of `body` and its wrapper is gone.
    Attached { body: EntityId, slot: SlotName },
    /// The slot no longer accepts the part; the wrapper is unchanged.
    Rejected { body: EntityId, slot: SlotName },
    /// The answer did not match the pending offer. An answer from the wrong
    /// user leaves the offer and its UI in place.
    Stale(SelectionError),
}

impl Runtime {
    /// `user` used the dropped part `dropped` on `target`.
    ///
    /// Returns the UI message sent to the user, or `None` when nothing was
    /// offered (target has no body, or no slot fits).
    pub fn interact(
        &mut self,
        user: EntityId,
        dropped: EntityId,
        target: EntityId,
    ) -> Result<Option<RequestBodyPartSlotSurgeryUiMessage>> {
        self.require_entity(user)?;
        let wrapper = dropped_part_mut(&mut self.world, dropped)?;
        if let Some(previous) = wrapper.clear_offer() {
            self.close_interface(dropped, previous.user);
        }
        self.close_interface(dropped, user);

        let Some(body) = self.world.body(target) else {
            debug!(entity = %target, "interaction target has no body");
            return Ok(None);
        };
        let part = self
            .world
            .dropped_part(dropped)
            .ok_or(RuntimeError::NotADroppedPart(dropped))?
            .contained()
            .ok_or(RuntimeError::EmptyWrapper(dropped))?;
        let candidates = attachment_candidates(body, part);
        let part_name = part.name().to_string();

        if candidates.is_empty() {
            debug!(wrapper = %dropped, body = %target, "no valid attachment slot");
            self.notify(user, Notice::NoValidAttachment { part: part_name });
            return Ok(None);
        }

        let now = self.clock;
        let message = dropped_part_mut(&mut self.world, dropped)?
            .offer(user, target, candidates, now);
        if let Some(message) = &message {
            debug!(wrapper = %dropped, user = %user, options = ?message.options, "offering slots");
            self.interfaces.open(dropped, user);
            self.events.publish(InterfaceEvent::Opened {
                wrapper: dropped,
                user,
                message: message.clone(),
            });
        }
        Ok(message)
    }

    /// `user` answered the slot UI of `dropped`.
    pub fn receive_slot_selection(
        &mut self,
        user: EntityId,
        dropped: EntityId,
        message: ReceiveBodyPartSlotSurgeryUiMessage,
    ) -> Result<SelectionOutcome> {
        self.close_interface(dropped, user);

        let wrapper = dropped_part_mut(&mut self.world, dropped)?;
        let part_name = wrapper
            .contained()
            .ok_or(RuntimeError::EmptyWrapper(dropped))?
            .name()
            .to_string();
        let selection = match wrapper.take_selection(user, message.selected_handle) {
            Ok(selection) => selection,
            Err(reason) => {
                warn!(wrapper = %dropped, user = %user, %reason, "stale slot selection");
                self.notify(user, Notice::StaleSelection);
                return Ok(SelectionOutcome::Stale(reason));
            }
        };

        let body = selection.target;
        let slot = selection.slot;
        match self.install_dropped_body_part(dropped, body, &slot) {
            Ok(true) => {
                self.notify(
                    user,
                    Notice::AttachSucceeded {
                        part: part_name,
                        slot: slot.clone(),
                    },
                );
                Ok(SelectionOutcome::Attached { body, slot })
            }
            Ok(false) => {
                self.notify(
                    user,
                    Notice::AttachFailed {
                        part: part_name,
                        slot: slot.clone(),
                    },
                );
                Ok(SelectionOutcome::Rejected { body, slot })
            }
            Err(err) => {
                warn!(wrapper = %dropped, body = %body, error = %err, "selected body is gone");
                self.notify(
                    user,
                    Notice::AttachFailed {
                        part: part_name,
                        slot: slot.clone(),
                    },
                );
                Ok(SelectionOutcome::Rejected { body, slot })
            }
        }
    }

    /// Attaches the part held by `dropped` to `slot` of `body`, then deletes
    /// the wrapper.
    ///
    /// The wrapper stays alive until the body has accepted the part. Returns
    /// `Ok(false)` with nothing changed when the body refuses it.
    pub fn install_dropped_body_part(
        &mut self,
        dropped: EntityId,
        body: EntityId,
        slot: &SlotName,
    ) -> Result<bool> {
        let target = self
            .world
            .get(body)
            .ok_or(RuntimeError::UnknownEntity(body))?
            .kind
            .as_body()
            .ok_or(RuntimeError::NotABody(body))?;
        let part = self
            .world
            .dropped_part(dropped)
            .ok_or(RuntimeError::NotADroppedPart(dropped))?
            .contained()
            .ok_or(RuntimeError::EmptyWrapper(dropped))?;
        if let Err(reason) = target.check_attach(slot, part) {
            warn!(wrapper = %dropped, body = %body, slot = %slot, %reason, "attachment refused");
            return Ok(false);
        }

        let part = dropped_part_mut(&mut self.world, dropped)?
            .take_part()
            .ok_or(RuntimeError::EmptyWrapper(dropped))?;
        let installed = match self.world.body_mut(body) {
            Some(target) => target.install_body_part(slot, part).map_err(|err| {
                warn!(wrapper = %dropped, body = %body, error = %err, "attachment failed after check");
                err.into_part()
            }),
            None => Err(part),
        };
        if let Err(part) = installed {
            dropped_part_mut(&mut self.world, dropped)?.put_back(part);
            return Ok(false);
        }
        self.world.delete(dropped);

        info!(wrapper = %dropped, body = %body, slot = %slot, "attached body part");
        for user in self.interfaces.users_of(dropped) {
            self.close_interface(dropped, user);
        }
        self.events.publish(BodyEvent::PartAttached {
            body,
            slot: slot.clone(),
            wrapper: dropped,
        });
        self.refresh_movement(body);
        Ok(true)
    }
}
