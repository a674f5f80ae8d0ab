//! Synchronous runtime facade.
//!
//! The runtime owns the entity world, the prototype oracles and the event
//! bus. Every call handles one interaction to completion: gameplay checks
//! run against the live graph, effects are applied install-first and
//! delete-last, and the outcome is published on the bus.

mod attach;
mod mechanisms;
mod surgery;

pub use attach::SelectionOutcome;
pub use surgery::SurgeryOutcome;

use std::collections::BTreeMap;

use tokio::sync::broadcast;
use tracing::{debug, info};

use anatomy_content::{ContentFactory, LoadResult};
use anatomy_core::{Body, BodyPart, EntityId, MovementSpeed, Position, SlotName, Tick};

use crate::config::RuntimeConfig;
use crate::dropped::DroppedBodyPart;
use crate::error::{Result, RuntimeError};
use crate::events::{BodyEvent, Event, EventBus, InterfaceEvent, Notice, NotificationEvent, Topic};
use crate::oracle::OracleManager;
use crate::ui::OpenInterfaces;
use crate::world::{Actor, EntityKind, World};

/// Where a body part currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartLocation {
    /// Installed in `slot` of the body entity `body`.
    Slot { body: EntityId, slot: SlotName },
    /// Held by a dropped body part entity.
    Dropped(EntityId),
}

impl PartLocation {
    pub fn slot(body: EntityId, slot: impl Into<SlotName>) -> Self {
        PartLocation::Slot {
            body,
            slot: slot.into(),
        }
    }

    /// The entity holding the part.
    pub fn container(&self) -> EntityId {
        match self {
            PartLocation::Slot { body, .. } => *body,
            PartLocation::Dropped(wrapper) => *wrapper,
        }
    }
}

pub struct Runtime {
    config: RuntimeConfig,
    oracles: OracleManager,
    world: World,
    events: EventBus,
    interfaces: OpenInterfaces,
    clock: Tick,
    /// Last computed speed of every spawned body.
    movement: BTreeMap<EntityId, MovementSpeed>,
}

impl Runtime {
    pub fn new(config: RuntimeConfig, oracles: OracleManager) -> Self {
        let events = EventBus::with_capacity(config.event_buffer_size);
        Self {
            config,
            oracles,
            world: World::new(),
            events,
            interfaces: OpenInterfaces::new(),
            clock: Tick::ZERO,
            movement: BTreeMap::new(),
        }
    }

    /// Builds a runtime from a content directory (`config.toml` plus the
    /// prototype catalogs).
    pub fn from_content(factory: &ContentFactory) -> LoadResult<Self> {
        let anatomy = factory.load_config()?;
        let oracles = OracleManager::load(factory)?;
        Ok(Self::new(RuntimeConfig::new(anatomy), oracles))
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn interfaces(&self) -> &OpenInterfaces {
        &self.interfaces
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Current walk and sprint speed of `body`.
    pub fn movement_speed(&self, body: EntityId) -> Option<MovementSpeed> {
        self.movement.get(&body).copied()
    }

    /// A handle to the event bus, for subscribers living elsewhere.
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.events.subscribe(topic)
    }

    pub fn spawn_actor(&mut self, name: impl Into<String>, position: Position) -> EntityId {
        let name = name.into();
        let kind = EntityKind::Actor(Actor { name: name.clone() });
        self.world.spawn(name, position, kind)
    }

    /// Spawns a body entity fully populated from a preset.
    pub fn spawn_body(&mut self, preset_id: &str, position: Position) -> Result<EntityId> {
        let body = Body::from_preset(&self.oracles.as_anatomy_env(), preset_id)?;
        let speed = body.movement_speed();
        let id = self.world.spawn(preset_id, position, EntityKind::Body(body));
        self.movement.insert(id, speed);
        debug!(body = %id, preset = preset_id, walk = speed.walk, "spawned body");
        Ok(id)
    }

    /// Spawns a dropped wrapper holding `part`.
    pub fn spawn_dropped_part(&mut self, part: BodyPart, position: Position) -> EntityId {
        let name = self.config.anatomy.dropped_part_prototype.clone();
        self.world.spawn(
            name,
            position,
            EntityKind::DroppedBodyPart(DroppedBodyPart::new(part)),
        )
    }

    /// Removes the part in `slot` and everything that hung off it.
    ///
    /// Each removed part gets its own dropped wrapper at the body's position.
    /// The wrappers are returned in removal order, the requested part first.
    pub fn detach_part(&mut self, body: EntityId, slot: &SlotName) -> Result<Vec<EntityId>> {
        let position = self
            .world
            .position(body)
            .ok_or(RuntimeError::UnknownEntity(body))?;
        let removed = self
            .world
            .body_mut(body)
            .ok_or(RuntimeError::NotABody(body))?
            .remove_part(slot.as_str());
        if removed.is_empty() {
            return Err(RuntimeError::EmptySlot {
                body,
                slot: slot.clone(),
            });
        }

        let mut wrappers = Vec::with_capacity(removed.len());
        for (slot, part) in removed {
            info!(body = %body, slot = %slot, part = part.name(), "detached body part");
            let wrapper = self.spawn_dropped_part(part, position);
            self.events.publish(BodyEvent::PartDetached {
                body,
                slot,
                wrapper,
            });
            wrappers.push(wrapper);
        }
        self.refresh_movement(body);
        Ok(wrappers)
    }

    /// Moves the clock forward and expires slot offers older than the
    /// configured TTL. Returns how many offers expired.
    pub fn advance(&mut self, ticks: u64) -> usize {
        self.clock = self.clock + ticks;
        let Some(ttl) = self.config.anatomy.slot_offer_ttl else {
            return 0;
        };

        let now = self.clock;
        let mut expired = 0;
        for wrapper in self.world.dropped_part_ids() {
            let offer = self
                .world
                .dropped_part_mut(wrapper)
                .and_then(|dropped| dropped.expire_offer(now, ttl));
            if let Some(offer) = offer {
                debug!(wrapper = %wrapper, user = %offer.user, "slot offer expired");
                self.close_interface(wrapper, offer.user);
                self.notify(offer.user, Notice::OfferExpired);
                expired += 1;
            }
        }
        expired
    }

    /// Recomputes the speed of `body` and publishes it if it changed.
    fn refresh_movement(&mut self, body: EntityId) {
        let Some(speed) = self.world.body(body).map(Body::movement_speed) else {
            return;
        };
        if self.movement.insert(body, speed) != Some(speed) {
            debug!(body = %body, walk = speed.walk, sprint = speed.sprint, "movement speed changed");
            self.events
                .publish(BodyEvent::MovementChanged { body, speed });
        }
    }

    fn notify(&self, recipient: EntityId, notice: Notice) {
        self.events
            .publish(NotificationEvent::new(recipient, notice));
    }

    fn close_interface(&mut self, wrapper: EntityId, user: EntityId) {
        if self.interfaces.close(wrapper, user) {
            self.events
                .publish(InterfaceEvent::Closed { wrapper, user });
        }
    }

    fn require_entity(&self, id: EntityId) -> Result<()> {
        if self.world.contains(id) {
            Ok(())
        } else {
            Err(RuntimeError::UnknownEntity(id))
        }
    }
}

/// Resolves a part location to the part itself.
fn locate_part<'w>(world: &'w mut World, location: &PartLocation) -> Result<&'w mut BodyPart> {
    match location {
        PartLocation::Slot { body, slot } => {
            let entity = world
                .get_mut(*body)
                .ok_or(RuntimeError::UnknownEntity(*body))?;
            entity
                .kind
                .as_body_mut()
                .ok_or(RuntimeError::NotABody(*body))?
                .part_mut(slot.as_str())
                .ok_or_else(|| RuntimeError::EmptySlot {
                    body: *body,
                    slot: slot.clone(),
                })
        }
        PartLocation::Dropped(wrapper) => dropped_part_mut(world, *wrapper)?
            .contained_mut()
            .ok_or(RuntimeError::EmptyWrapper(*wrapper)),
    }
}

fn dropped_part_mut(world: &mut World, id: EntityId) -> Result<&mut DroppedBodyPart> {
    world
        .get_mut(id)
        .ok_or(RuntimeError::UnknownEntity(id))?
        .kind
        .as_dropped_part_mut()
        .ok_or(RuntimeError::NotADroppedPart(id))
}
