//! Oracle access and prototype loading errors.
//!
//! Both are configuration failures: content references something that does
//! not exist. They are fatal to the load that triggered them and are never
//! retried during play.

use crate::error::{AnatomyError, ErrorSeverity};
use crate::types::SlotName;

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// BodyPartOracle is not available in the environment.
    #[error("BodyPartOracle not available")]
    PartsNotAvailable,

    /// MechanismOracle is not available in the environment.
    #[error("MechanismOracle not available")]
    MechanismsNotAvailable,

    /// BodyOracle is not available in the environment.
    #[error("BodyOracle not available")]
    BodiesNotAvailable,

    #[error("body part prototype '{0}' not found")]
    PartNotFound(String),

    #[error("mechanism prototype '{0}' not found")]
    MechanismNotFound(String),

    #[error("body template '{0}' not found")]
    TemplateNotFound(String),

    #[error("body preset '{0}' not found")]
    PresetNotFound(String),
}

impl AnatomyError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            PartsNotAvailable => "ORACLE_PARTS_NOT_AVAILABLE",
            MechanismsNotAvailable => "ORACLE_MECHANISMS_NOT_AVAILABLE",
            BodiesNotAvailable => "ORACLE_BODIES_NOT_AVAILABLE",
            PartNotFound(_) => "ORACLE_PART_NOT_FOUND",
            MechanismNotFound(_) => "ORACLE_MECHANISM_NOT_FOUND",
            TemplateNotFound(_) => "ORACLE_TEMPLATE_NOT_FOUND",
            PresetNotFound(_) => "ORACLE_PRESET_NOT_FOUND",
        }
    }
}

/// Errors raised while building parts and bodies from prototypes.
///
/// A load that fails produces nothing: callers never observe a partially
/// populated part or body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadError {
    #[error("body part '{part}' references unknown mechanism '{mechanism}'")]
    MissingMechanism { part: String, mechanism: String },

    #[error("mechanisms of body part '{part}' need {required} capacity but the part holds {size}")]
    CapacityExceeded {
        part: String,
        required: u32,
        size: u32,
    },

    #[error("'{owner}' references unknown slot '{slot}'")]
    UnknownSlot { owner: String, slot: SlotName },

    #[error("preset '{preset}' puts a {found} into slot '{slot}' which accepts {expected}")]
    SlotTypeMismatch {
        preset: String,
        slot: SlotName,
        expected: String,
        found: String,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl AnatomyError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use LoadError::*;
        match self {
            MissingMechanism { .. } => "LOAD_MISSING_MECHANISM",
            CapacityExceeded { .. } => "LOAD_CAPACITY_EXCEEDED",
            UnknownSlot { .. } => "LOAD_UNKNOWN_SLOT",
            SlotTypeMismatch { .. } => "LOAD_SLOT_TYPE_MISMATCH",
            Oracle(inner) => inner.error_code(),
        }
    }
}
