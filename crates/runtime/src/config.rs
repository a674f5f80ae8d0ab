use anatomy_core::AnatomyConfig;
use serde::{Deserialize, Serialize};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub anatomy: AnatomyConfig,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

    pub fn new(anatomy: AnatomyConfig) -> Self {
        Self {
            anatomy,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(AnatomyConfig::default())
    }
}
