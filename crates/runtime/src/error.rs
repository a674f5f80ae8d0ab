//! Unified error type surfaced by the runtime API.
//!
//! Gameplay rejections (full part, closed skin, stale selection) are not
//! errors here: they come back as `Ok(false)` or an outcome value plus a
//! notification. `RuntimeError` covers calls that name the wrong entities or
//! content that fails to load.

use anatomy_core::{AnatomyError, EntityId, ErrorSeverity, LoadError, PartError, SlotName};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error("entity {0} has no body")]
    NotABody(EntityId),

    #[error("entity {0} is not a dropped body part")]
    NotADroppedPart(EntityId),

    #[error("dropped body part {0} holds no part")]
    EmptyWrapper(EntityId),

    #[error("entity {0} is not a dropped mechanism")]
    NotADroppedMechanism(EntityId),

    #[error("slot '{slot}' of body {body} is empty")]
    EmptySlot { body: EntityId, slot: SlotName },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Part(#[from] PartError),
}

impl AnatomyError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Load(err) => err.severity(),
            RuntimeError::Part(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::UnknownEntity(_) => "RUNTIME_UNKNOWN_ENTITY",
            RuntimeError::NotABody(_) => "RUNTIME_NOT_A_BODY",
            RuntimeError::NotADroppedPart(_) => "RUNTIME_NOT_A_DROPPED_PART",
            RuntimeError::EmptyWrapper(_) => "RUNTIME_EMPTY_WRAPPER",
            RuntimeError::NotADroppedMechanism(_) => "RUNTIME_NOT_A_DROPPED_MECHANISM",
            RuntimeError::EmptySlot { .. } => "RUNTIME_EMPTY_SLOT",
            RuntimeError::Load(err) => err.error_code(),
            RuntimeError::Part(err) => err.error_code(),
        }
    }
}
