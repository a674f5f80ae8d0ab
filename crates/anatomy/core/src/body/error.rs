//! Body graph attachment errors.

use crate::error::{AnatomyError, ErrorContext, ErrorSeverity};
use crate::part::{BodyPart, BodyPartType};
use crate::types::SlotName;

/// Why a part could not be attached to a slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachRejection {
    #[error("the body has no such slot")]
    UnknownSlot,

    #[error("the slot is already occupied")]
    Occupied,

    #[error("the slot accepts {expected}, not {found}")]
    TypeMismatch {
        expected: BodyPartType,
        found: BodyPartType,
    },

    #[error("an empty body only accepts its center slot")]
    CenterRequired,

    #[error("no adjacent part accepts it")]
    NoCompatibleConnection,
}

/// A rejected attachment. The part is handed back untouched.
#[derive(Debug, thiserror::Error)]
#[error("cannot attach '{}' to slot '{slot}': {reason}", .part.name())]
pub struct AttachError {
    pub part: BodyPart,
    pub slot: SlotName,
    pub reason: AttachRejection,
    context: ErrorContext,
}

impl AttachError {
    pub fn new(part: BodyPart, slot: SlotName, reason: AttachRejection) -> Self {
        let context = ErrorContext::new().with_slot(slot.clone());
        Self {
            part,
            slot,
            reason,
            context,
        }
    }

    pub fn into_part(self) -> BodyPart {
        self.part
    }
}

impl AnatomyError for AttachError {
    fn severity(&self) -> ErrorSeverity {
        match self.reason {
            AttachRejection::NoCompatibleConnection => ErrorSeverity::Recoverable,
            AttachRejection::UnknownSlot
            | AttachRejection::Occupied
            | AttachRejection::TypeMismatch { .. }
            | AttachRejection::CenterRequired => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        Some(&self.context)
    }

    fn error_code(&self) -> &'static str {
        match self.reason {
            AttachRejection::UnknownSlot => "ATTACH_UNKNOWN_SLOT",
            AttachRejection::Occupied => "ATTACH_OCCUPIED",
            AttachRejection::TypeMismatch { .. } => "ATTACH_TYPE_MISMATCH",
            AttachRejection::CenterRequired => "ATTACH_CENTER_REQUIRED",
            AttachRejection::NoCompatibleConnection => "ATTACH_NO_COMPATIBLE_CONNECTION",
        }
    }
}
