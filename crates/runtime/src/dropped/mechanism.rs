//! A mechanism removed from its part and lying in the world.

use anatomy_core::Mechanism;

/// Wrapper entity state for a mechanism outside any part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedMechanism {
    mechanism: Mechanism,
}

impl DroppedMechanism {
    pub fn new(mechanism: Mechanism) -> Self {
        Self { mechanism }
    }

    pub fn contained(&self) -> &Mechanism {
        &self.mechanism
    }

    pub fn into_mechanism(self) -> Mechanism {
        self.mechanism
    }
}
