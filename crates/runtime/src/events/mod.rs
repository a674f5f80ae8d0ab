//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Delivery is best-effort.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BodyEvent, InterfaceEvent, Notice, NotificationEvent};
