//! Surgery on flesh: skin must be cut, vessels clamped and the wound
//! retracted before anything inside can be reached.

use super::{SurgeryContext, SurgeryData, SurgeryKind, SurgeryRequest, SurgeryType, ToolSet};
use crate::mechanism::Mechanism;
use crate::part::{BodyPart, BodyPartCompatibility};

/// Progress of a biological procedure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BiologicalStage {
    #[default]
    Closed,
    /// Skin is open and bleeding.
    Incised,
    /// Vessels are clamped.
    Clamped,
    /// Skin is retracted; organs are reachable.
    Exposed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiologicalSurgery {
    stage: BiologicalStage,
}

impl BiologicalSurgery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> BiologicalStage {
        self.stage
    }
}

impl SurgeryData for BiologicalSurgery {
    fn kind(&self) -> SurgeryKind {
        SurgeryKind::Biological
    }

    fn can_attach_body_part(&self, host: BodyPartCompatibility, candidate: &BodyPart) -> bool {
        self.stage == BiologicalStage::Closed
            && host.is_compatible_with(candidate.compatibility())
    }

    fn can_install_mechanism(&self, mechanism: &Mechanism) -> bool {
        self.stage == BiologicalStage::Exposed
            && mechanism
                .compatibility
                .is_compatible_with(BodyPartCompatibility::Biological)
    }

    fn valid_tools(&self) -> ToolSet {
        match self.stage {
            BiologicalStage::Closed => ToolSet::INCISION,
            BiologicalStage::Incised => ToolSet::VESSEL_COMPRESSION | ToolSet::CAUTERIZATION,
            BiologicalStage::Clamped => ToolSet::RETRACTION | ToolSet::CAUTERIZATION,
            BiologicalStage::Exposed => {
                ToolSet::INCISION | ToolSet::AMPUTATION | ToolSet::CAUTERIZATION
            }
        }
    }

    fn perform_surgery(&mut self, tool: SurgeryType, ctx: &mut SurgeryContext<'_>) -> bool {
        use BiologicalStage::*;

        if !self.check_surgery(tool) {
            return false;
        }

        self.stage = match (self.stage, tool) {
            (Closed, SurgeryType::Incision) => Incised,
            (Incised, SurgeryType::VesselCompression) => Clamped,
            (Clamped, SurgeryType::Retraction) => Exposed,
            (Exposed, SurgeryType::Incision) => {
                ctx.surgeon.request(SurgeryRequest::ExtractMechanism {
                    target: ctx.target,
                    performer: ctx.performer,
                    options: ctx.mechanisms.iter().map(Mechanism::uid).collect(),
                });
                Exposed
            }
            (Exposed, SurgeryType::Amputation) => {
                ctx.surgeon.request(SurgeryRequest::DetachPart {
                    target: ctx.target,
                    performer: ctx.performer,
                });
                // The stump is sealed as the limb comes away.
                Closed
            }
            (_, SurgeryType::Cauterization) => Closed,
            (stage, _) => stage,
        };

        true
    }

    fn is_closed(&self) -> bool {
        self.stage == BiologicalStage::Closed
    }

    fn describe(&self) -> &'static str {
        match self.stage {
            BiologicalStage::Closed => "The skin is intact.",
            BiologicalStage::Incised => "The skin is cut open and bleeding.",
            BiologicalStage::Clamped => "The incision is open and its vessels are clamped.",
            BiologicalStage::Exposed => "The skin is pulled back, exposing the organs.",
        }
    }
}
