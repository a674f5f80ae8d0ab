//! Event types for different topics.

use anatomy_core::{EntityId, InstallRejection, MechanismUid, MovementSpeed, SlotName, SurgeryType};
use serde::{Deserialize, Serialize};

use crate::ui::RequestBodyPartSlotSurgeryUiMessage;

/// A popup shown to one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub recipient: EntityId,
    pub notice: Notice,
}

impl NotificationEvent {
    pub fn new(recipient: EntityId, notice: Notice) -> Self {
        Self { recipient, notice }
    }
}

/// What a popup says. Clients look the text up by [`Notice::key`] and fill
/// it from the variant's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The interacted body has no slot the dropped part could go into.
    NoValidAttachment { part: String },
    AttachSucceeded { part: String, slot: SlotName },
    AttachFailed { part: String, slot: SlotName },
    /// The selected option belongs to an offer that no longer exists.
    StaleSelection,
    OfferExpired,
    MechanismInstalled { mechanism: String, part: String },
    MechanismRejected {
        mechanism: String,
        part: String,
        reason: InstallRejection,
    },
    SurgeryStep { tool: SurgeryType, status: String },
    SurgeryNoEffect { tool: SurgeryType },
}

impl Notice {
    /// Stable localization key.
    pub fn key(&self) -> &'static str {
        match self {
            Notice::NoValidAttachment { .. } => "dropped-body-part-component-no-valid-attachment",
            Notice::AttachSucceeded { .. } => "dropped-body-part-component-attach-success",
            Notice::AttachFailed { .. } => "dropped-body-part-component-cannot-attach",
            Notice::StaleSelection => "dropped-body-part-component-selection-invalid",
            Notice::OfferExpired => "dropped-body-part-component-selection-expired",
            Notice::MechanismInstalled { .. } => "dropped-mechanism-component-install-success",
            Notice::MechanismRejected { .. } => "dropped-mechanism-component-cannot-install",
            Notice::SurgeryStep { .. } => "body-part-surgery-step",
            Notice::SurgeryNoEffect { .. } => "body-part-surgery-no-effect",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Notice::NoValidAttachment { .. }
                | Notice::AttachFailed { .. }
                | Notice::StaleSelection
                | Notice::OfferExpired
                | Notice::MechanismRejected { .. }
                | Notice::SurgeryNoEffect { .. }
        )
    }
}

/// The single-user slot selection UI of a dropped body part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterfaceEvent {
    Opened {
        wrapper: EntityId,
        user: EntityId,
        message: RequestBodyPartSlotSurgeryUiMessage,
    },
    Closed { wrapper: EntityId, user: EntityId },
}

/// Changes to body graphs and part contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyEvent {
    /// A dropped part was attached; `wrapper` has been deleted.
    PartAttached {
        body: EntityId,
        slot: SlotName,
        wrapper: EntityId,
    },
    /// A part left its body and now lives in `wrapper`.
    PartDetached {
        body: EntityId,
        slot: SlotName,
        wrapper: EntityId,
    },
    /// A dropped mechanism went into the part held by `container`.
    MechanismInstalled {
        container: EntityId,
        mechanism: MechanismUid,
        wrapper: EntityId,
    },
    /// A mechanism left its part, dropped into `wrapper` or destroyed.
    MechanismRemoved {
        container: EntityId,
        mechanism: MechanismUid,
        wrapper: Option<EntityId>,
    },
    SurgeryPerformed {
        performer: EntityId,
        container: EntityId,
        tool: SurgeryType,
    },
    /// Walk or sprint speed of `body` changed after its legs or feet did.
    MovementChanged { body: EntityId, speed: MovementSpeed },
}
