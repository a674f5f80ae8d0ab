//! Body part operation errors.

use crate::error::{AnatomyError, ErrorSeverity};
use crate::mechanism::{Mechanism, MechanismUid};

/// Why a mechanism could not be installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstallRejection {
    #[error("needs {required} capacity but only {available} is free")]
    InsufficientCapacity { required: u32, available: u32 },

    #[error("the part's surgical state does not allow it")]
    SurgeryBlocked,

    #[error("mechanism {0} is already installed")]
    AlreadyInstalled(MechanismUid),
}

/// A rejected install. The mechanism is handed back untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot install mechanism '{}': {reason}", .mechanism.name)]
pub struct InstallError {
    pub mechanism: Mechanism,
    pub reason: InstallRejection,
}

impl InstallError {
    pub fn into_mechanism(self) -> Mechanism {
        self.mechanism
    }
}

impl AnatomyError for InstallError {
    fn severity(&self) -> ErrorSeverity {
        match self.reason {
            InstallRejection::InsufficientCapacity { .. } | InstallRejection::SurgeryBlocked => {
                ErrorSeverity::Recoverable
            }
            InstallRejection::AlreadyInstalled(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.reason {
            InstallRejection::InsufficientCapacity { .. } => "INSTALL_INSUFFICIENT_CAPACITY",
            InstallRejection::SurgeryBlocked => "INSTALL_SURGERY_BLOCKED",
            InstallRejection::AlreadyInstalled(_) => "INSTALL_ALREADY_INSTALLED",
        }
    }
}

/// Errors from removing mechanisms out of a part.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartError {
    #[error("mechanism {uid} is not installed in this part")]
    MechanismNotInstalled { uid: MechanismUid },
}

impl AnatomyError for PartError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            PartError::MechanismNotInstalled { .. } => "PART_MECHANISM_NOT_INSTALLED",
        }
    }
}
