//! Common error infrastructure for anatomy-core.
//!
//! Domain-specific errors (e.g. [`crate::part::InstallError`],
//! [`crate::body::AttachError`]) live next to the operations that produce them.
//! This module only provides the shared classification used by all of them.
//!
//! # Design Principles
//!
//! - **Gameplay failures are values**: capacity, compatibility and surgical
//!   step failures are recoverable and never abort the caller
//! - **Configuration failures are fatal**: a missing prototype reference means
//!   the content is broken and loading must stop
//! - **Nothing is lost**: errors from mutating operations hand the rejected
//!   value back to the caller

use crate::types::{EntityId, SlotName};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed later (e.g. after surgery opens the part)
/// - **Validation**: the request is malformed for the current graph and should not be retried as-is
/// - **Internal**: bookkeeping disagrees with itself and should be investigated
/// - **Fatal**: content or configuration is broken; loading cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the world changes.
    ///
    /// Examples: part is full, part is not surgically opened
    Recoverable,

    /// Validation error - invalid request, should not retry without changes.
    ///
    /// Examples: unknown slot, slot already occupied
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - content is broken, cannot continue.
    ///
    /// Examples: unresolvable mechanism id in a body part prototype
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error means loading or play must stop.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Entity that owns the body or part involved (if known).
    pub entity: Option<EntityId>,

    /// Slot involved in the failed operation (if any).
    pub slot: Option<SlotName>,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an entity to this context (builder pattern).
    #[must_use]
    pub fn with_entity(mut self, entity: EntityId) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Attaches a slot to this context (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: SlotName) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Attaches a static message to this context (builder pattern).
    #[must_use]
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all anatomy-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait AnatomyError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a stable identifier for this error variant.
    ///
    /// Used as a localization key suffix and in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
