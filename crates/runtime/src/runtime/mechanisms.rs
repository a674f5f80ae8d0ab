//! Moving mechanisms between parts and the world.

use tracing::{debug, info, warn};

use anatomy_core::{EntityId, MechanismUid};

use super::{PartLocation, Runtime, locate_part};
use crate::dropped::DroppedMechanism;
use crate::error::{Result, RuntimeError};
use crate::events::{BodyEvent, Notice};
use crate::world::EntityKind;

impl Runtime {
    /// Takes mechanism `uid` out of the part at `location` and drops it at the
    /// container's position. Returns the new wrapper.
    pub fn drop_mechanism(&mut self, location: &PartLocation, uid: MechanismUid) -> Result<EntityId> {
        let container = location.container();
        let position = self
            .world
            .position(container)
            .ok_or(RuntimeError::UnknownEntity(container))?;
        let mechanism = locate_part(&mut self.world, location)?.drop_mechanism(uid)?;

        let name = self.config.anatomy.dropped_mechanism_prototype.clone();
        let wrapper = self.world.spawn(
            name,
            position,
            EntityKind::DroppedMechanism(DroppedMechanism::new(mechanism)),
        );
        debug!(container = %container, mechanism = %uid, wrapper = %wrapper, "dropped mechanism");
        self.events.publish(BodyEvent::MechanismRemoved {
            container,
            mechanism: uid,
            wrapper: Some(wrapper),
        });
        Ok(wrapper)
    }

    /// `user` puts the dropped mechanism `dropped` into the part at
    /// `location`.
    ///
    /// On success the wrapper is deleted. A rejection leaves both sides as
    /// they were and tells the user why.
    pub fn install_dropped_mechanism(
        &mut self,
        user: EntityId,
        location: &PartLocation,
        dropped: EntityId,
    ) -> Result<bool> {
        self.require_entity(user)?;
        let mechanism = self
            .world
            .dropped_mechanism(dropped)
            .ok_or(RuntimeError::NotADroppedMechanism(dropped))?
            .contained()
            .clone();
        let uid = mechanism.uid();
        let name = mechanism.name.clone();

        let part = locate_part(&mut self.world, location)?;
        let part_name = part.name().to_string();
        if let Err(err) = part.try_install_mechanism(mechanism) {
            warn!(user = %user, wrapper = %dropped, error = %err, "mechanism install rejected");
            self.notify(
                user,
                Notice::MechanismRejected {
                    mechanism: name,
                    part: part_name,
                    reason: err.reason,
                },
            );
            return Ok(false);
        }

        self.world.delete(dropped);
        info!(user = %user, mechanism = %uid, part = %part_name, "installed mechanism");
        self.events.publish(BodyEvent::MechanismInstalled {
            container: location.container(),
            mechanism: uid,
            wrapper: dropped,
        });
        self.notify(
            user,
            Notice::MechanismInstalled {
                mechanism: name,
                part: part_name,
            },
        );
        Ok(true)
    }

    /// Destroys mechanism `uid` in the part at `location`.
    ///
    /// Returns `false` when the part does not hold it.
    pub fn destroy_mechanism(&mut self, location: &PartLocation, uid: MechanismUid) -> Result<bool> {
        if !locate_part(&mut self.world, location)?.destroy_mechanism(uid) {
            return Ok(false);
        }
        debug!(container = %location.container(), mechanism = %uid, "destroyed mechanism");
        self.events.publish(BodyEvent::MechanismRemoved {
            container: location.container(),
            mechanism: uid,
            wrapper: None,
        });
        Ok(true)
    }
}
