//! Runtime orchestration for body graphs in a world of entities.
//!
//! This crate drives the pure model in `anatomy-core` against live entities:
//! bodies built from presets, dropped body parts waiting to be reattached,
//! and loose mechanisms. Consumers embed [`Runtime`] and subscribe to its
//! [`EventBus`] for notifications, UI traffic and body changes.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the facade and the per-workflow operations
//! - [`dropped`] holds the wrapper state of detached parts and mechanisms
//! - [`events`] provides the topic-based event bus
//! - [`ui`] carries the slot selection UI messages
//! - [`world`] stores entities
//! - [`oracle`] adapts loaded content to the core oracle traits
pub mod config;
pub mod dropped;
pub mod error;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod ui;
pub mod world;

pub use config::RuntimeConfig;
pub use dropped::{DroppedBodyPart, DroppedMechanism, SelectionError, SlotOffer, SlotSelection};
pub use error::{Result, RuntimeError};
pub use events::{BodyEvent, Event, EventBus, InterfaceEvent, Notice, NotificationEvent, Topic};
pub use oracle::OracleManager;
pub use runtime::{PartLocation, Runtime, SelectionOutcome, SurgeryOutcome};
pub use ui::{
    OpenInterfaces, ReceiveBodyPartSlotSurgeryUiMessage, RequestBodyPartSlotSurgeryUiMessage,
};
pub use world::{Actor, Entity, EntityKind, World};
