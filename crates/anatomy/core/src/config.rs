/// Tunable parameters of the attachment workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnatomyConfig {
    /// Ticks an unanswered slot offer stays valid. `None` keeps offers open
    /// until the next interaction replaces them.
    pub slot_offer_ttl: Option<u64>,
    /// Entity name given to wrappers spawned for detached body parts.
    pub dropped_part_prototype: String,
    /// Entity name given to wrappers spawned for removed mechanisms.
    pub dropped_mechanism_prototype: String,
}

impl AnatomyConfig {
    pub const DEFAULT_DROPPED_PART_PROTOTYPE: &'static str = "BaseDroppedBodyPart";
    pub const DEFAULT_DROPPED_MECHANISM_PROTOTYPE: &'static str = "BaseDroppedMechanism";

    pub fn new() -> Self {
        Self {
            slot_offer_ttl: None,
            dropped_part_prototype: Self::DEFAULT_DROPPED_PART_PROTOTYPE.to_string(),
            dropped_mechanism_prototype: Self::DEFAULT_DROPPED_MECHANISM_PROTOTYPE.to_string(),
        }
    }

    pub fn with_slot_offer_ttl(mut self, ticks: u64) -> Self {
        self.slot_offer_ttl = Some(ticks);
        self
    }
}

impl Default for AnatomyConfig {
    fn default() -> Self {
        Self::new()
    }
}
