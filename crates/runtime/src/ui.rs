//! Slot selection UI messages and bookkeeping of open interfaces.

use std::collections::{BTreeMap, BTreeSet};

use anatomy_core::{EntityId, SlotName};
use serde::{Deserialize, Serialize};

/// Server to client: the slots a dropped part can be attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBodyPartSlotSurgeryUiMessage {
    pub options: BTreeMap<SlotName, u32>,
}

/// Client to server: the handle of the chosen slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveBodyPartSlotSurgeryUiMessage {
    pub selected_handle: u32,
}

impl ReceiveBodyPartSlotSurgeryUiMessage {
    pub fn new(selected_handle: u32) -> Self {
        Self { selected_handle }
    }
}

/// Open slot UIs, at most one per (wrapper, user) pair.
#[derive(Debug, Clone, Default)]
pub struct OpenInterfaces {
    open: BTreeSet<(EntityId, EntityId)>,
}

impl OpenInterfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the UI open. Returns false if it already was.
    pub fn open(&mut self, wrapper: EntityId, user: EntityId) -> bool {
        self.open.insert((wrapper, user))
    }

    /// Marks the UI closed. Returns false if it was not open.
    pub fn close(&mut self, wrapper: EntityId, user: EntityId) -> bool {
        self.open.remove(&(wrapper, user))
    }

    pub fn is_open(&self, wrapper: EntityId, user: EntityId) -> bool {
        self.open.contains(&(wrapper, user))
    }

    /// Users with an open UI for `wrapper`.
    pub fn users_of(&self, wrapper: EntityId) -> Vec<EntityId> {
        self.open
            .iter()
            .filter(|(w, _)| *w == wrapper)
            .map(|&(_, user)| user)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_interface_per_pair() {
        let mut interfaces = OpenInterfaces::new();
        let (wrapper, user) = (EntityId(3), EntityId(1));

        assert!(interfaces.open(wrapper, user));
        assert!(!interfaces.open(wrapper, user));
        assert_eq!(interfaces.len(), 1);

        assert!(interfaces.open(wrapper, EntityId(2)));
        assert_eq!(interfaces.users_of(wrapper), vec![user, EntityId(2)]);

        assert!(interfaces.close(wrapper, user));
        assert!(!interfaces.close(wrapper, user));
        assert!(!interfaces.is_open(wrapper, user));
    }

    #[test]
    fn messages_keep_their_wire_shape() {
        let mut options = BTreeMap::new();
        options.insert(SlotName::from("left arm"), 4);
        let request = RequestBodyPartSlotSurgeryUiMessage { options };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"options":{"left arm":4}}"#);

        let reply: ReceiveBodyPartSlotSurgeryUiMessage =
            serde_json::from_str(r#"{"selected_handle":4}"#).unwrap();
        assert_eq!(reply, ReceiveBodyPartSlotSurgeryUiMessage::new(4));
    }
}
