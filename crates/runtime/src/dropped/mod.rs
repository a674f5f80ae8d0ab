//! Wrapper entities for parts and mechanisms that are not installed anywhere.
mod mechanism;
mod part;

pub use mechanism::DroppedMechanism;
pub use part::{DroppedBodyPart, SelectionError, SlotOffer, SlotSelection};
