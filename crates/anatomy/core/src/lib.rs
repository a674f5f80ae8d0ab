//! Pure body model and surgical rules.
//!
//! `anatomy-core` defines body parts, the mechanisms installed inside them,
//! the per-part surgery strategies and the slot graph parts attach to. It
//! performs no I/O: prototype data arrives through the oracle traits in
//! [`env`], and every effect beyond a value's own state is returned to the
//! caller (see [`surgery::SurgeryRequest`]).
//!
//! The capacity invariant is owned by [`part::BodyPart`]: installed
//! mechanism sizes never sum past the part's size, and every install, drop
//! or destroy keeps the running total in step.
pub mod body;
pub mod config;
pub mod env;
pub mod error;
pub mod mechanism;
pub mod part;
pub mod surgery;
pub mod types;

pub use body::{
    AttachError, AttachRejection, Body, BodyManager, BodyPreset, BodyTemplate, MovementSpeed,
    attachment_candidates,
};
pub use config::AnatomyConfig;
pub use env::{
    AnatomyEnv, BodyOracle, BodyPartOracle, BodyPartPrototype, Env, LoadError, MechanismOracle,
    MechanismPrototype, OracleError, PrototypeCatalog,
};
pub use error::{AnatomyError, ErrorContext, ErrorSeverity};
pub use mechanism::{Mechanism, MechanismUid};
pub use part::{
    BodyPart, BodyPartCompatibility, BodyPartProperty, BodyPartType, InstallError,
    InstallRejection, PartError, PropertyKind, PropertySet,
};
pub use surgery::{
    BiologicalStage, BiologicalSurgery, MechanicalStage, MechanicalSurgery, Surgeon,
    SurgeryContext, SurgeryData, SurgeryKind, SurgeryRequest, SurgeryType, ToolSet,
};
pub use types::{
    DamageContainer, DamageType, EntityId, Position, Resistance, ResistanceSet, SlotName, Tick,
};
