//! Entity storage for the runtime.

use std::collections::BTreeMap;

use anatomy_core::{Body, EntityId, Position};

use crate::dropped::{DroppedBodyPart, DroppedMechanism};

/// An entity that can interact but has no body graph of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
}

/// What an entity is.
#[derive(Debug)]
pub enum EntityKind {
    Actor(Actor),
    Body(Body),
    DroppedBodyPart(DroppedBodyPart),
    DroppedMechanism(DroppedMechanism),
}

impl EntityKind {
    pub fn as_body(&self) -> Option<&Body> {
        match self {
            EntityKind::Body(body) => Some(body),
            _ => None,
        }
    }

    pub fn as_body_mut(&mut self) -> Option<&mut Body> {
        match self {
            EntityKind::Body(body) => Some(body),
            _ => None,
        }
    }

    pub fn as_dropped_part(&self) -> Option<&DroppedBodyPart> {
        match self {
            EntityKind::DroppedBodyPart(dropped) => Some(dropped),
            _ => None,
        }
    }

    pub fn as_dropped_part_mut(&mut self) -> Option<&mut DroppedBodyPart> {
        match self {
            EntityKind::DroppedBodyPart(dropped) => Some(dropped),
            _ => None,
        }
    }

    pub fn as_dropped_mechanism(&self) -> Option<&DroppedMechanism> {
        match self {
            EntityKind::DroppedMechanism(dropped) => Some(dropped),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Entity {
    pub name: String,
    pub position: Position,
    pub kind: EntityKind,
}

/// All live entities, keyed by id.
///
/// Ids are handed out in increasing order and never reused, so an id held
/// after its entity was deleted resolves to nothing.
#[derive(Debug)]
pub struct World {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn spawn(&mut self, name: impl Into<String>, position: Position, kind: EntityKind) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(
            id,
            Entity {
                name: name.into(),
                position,
                kind,
            },
        );
        id
    }

    /// Removes an entity and hands it back.
    pub fn delete(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn position(&self, id: EntityId) -> Option<Position> {
        self.get(id).map(|entity| entity.position)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.get(id)?.kind.as_body()
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.get_mut(id)?.kind.as_body_mut()
    }

    pub fn dropped_part(&self, id: EntityId) -> Option<&DroppedBodyPart> {
        self.get(id)?.kind.as_dropped_part()
    }

    pub fn dropped_part_mut(&mut self, id: EntityId) -> Option<&mut DroppedBodyPart> {
        self.get_mut(id)?.kind.as_dropped_part_mut()
    }

    pub fn dropped_mechanism(&self, id: EntityId) -> Option<&DroppedMechanism> {
        self.get(id)?.kind.as_dropped_mechanism()
    }

    /// Ids of every dropped body part, in id order.
    pub fn dropped_part_ids(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, entity)| matches!(entity.kind, EntityKind::DroppedBodyPart(_)))
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(&id, entity)| (id, entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(name: &str) -> EntityKind {
        EntityKind::Actor(Actor {
            name: name.to_string(),
        })
    }

    #[test]
    fn ids_are_never_reused() {
        let mut world = World::new();
        let a = world.spawn("a", Position::ORIGIN, actor("a"));
        world.delete(a).unwrap();
        let b = world.spawn("b", Position::ORIGIN, actor("b"));

        assert_ne!(a, b);
        assert!(world.get(a).is_none());
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn typed_lookups_check_the_kind() {
        let mut world = World::new();
        let a = world.spawn("a", Position::new(2, 3), actor("a"));

        assert!(world.body(a).is_none());
        assert!(world.dropped_part(a).is_none());
        assert_eq!(world.position(a), Some(Position::new(2, 3)));
        assert!(world.dropped_part_ids().is_empty());
    }
}
