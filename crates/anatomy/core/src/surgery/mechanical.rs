//! Surgery on prosthetics: bolts are drilled out and the casing pried open.
//! Welding (cauterization) reseals the casing.

use super::{SurgeryContext, SurgeryData, SurgeryKind, SurgeryRequest, SurgeryType, ToolSet};
use crate::mechanism::Mechanism;
use crate::part::{BodyPart, BodyPartCompatibility};

/// Progress of a mechanical procedure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MechanicalStage {
    #[default]
    Sealed,
    /// Bolts are out but the casing is still shut.
    Unbolted,
    /// Casing is pried open; internals are reachable.
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MechanicalSurgery {
    stage: MechanicalStage,
}

impl MechanicalSurgery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> MechanicalStage {
        self.stage
    }
}

impl SurgeryData for MechanicalSurgery {
    fn kind(&self) -> SurgeryKind {
        SurgeryKind::Mechanical
    }

    // Limbs can be bolted on while the frame is unbolted, but not while the casing is open.
    fn can_attach_body_part(&self, host: BodyPartCompatibility, candidate: &BodyPart) -> bool {
        self.stage != MechanicalStage::Open && host.is_compatible_with(candidate.compatibility())
    }

    fn can_install_mechanism(&self, mechanism: &Mechanism) -> bool {
        self.stage == MechanicalStage::Open
            && mechanism
                .compatibility
                .is_compatible_with(BodyPartCompatibility::Mechanical)
    }

    fn valid_tools(&self) -> ToolSet {
        match self.stage {
            MechanicalStage::Sealed => ToolSet::DRILLING,
            MechanicalStage::Unbolted => ToolSet::RETRACTION | ToolSet::CAUTERIZATION,
            MechanicalStage::Open => {
                ToolSet::DRILLING | ToolSet::AMPUTATION | ToolSet::CAUTERIZATION
            }
        }
    }

    fn perform_surgery(&mut self, tool: SurgeryType, ctx: &mut SurgeryContext<'_>) -> bool {
        use MechanicalStage::*;

        if !self.check_surgery(tool) {
            return false;
        }

        self.stage = match (self.stage, tool) {
            (Sealed, SurgeryType::Drilling) => Unbolted,
            (Unbolted, SurgeryType::Retraction) => Open,
            (Open, SurgeryType::Drilling) => {
                ctx.surgeon.request(SurgeryRequest::ExtractMechanism {
                    target: ctx.target,
                    performer: ctx.performer,
                    options: ctx.mechanisms.iter().map(Mechanism::uid).collect(),
                });
                Open
            }
            (Open, SurgeryType::Amputation) => {
                ctx.surgeon.request(SurgeryRequest::DetachPart {
                    target: ctx.target,
                    performer: ctx.performer,
                });
                Sealed
            }
            (_, SurgeryType::Cauterization) => Sealed,
            (stage, _) => stage,
        };

        true
    }

    fn is_closed(&self) -> bool {
        self.stage == MechanicalStage::Sealed
    }

    fn describe(&self) -> &'static str {
        match self.stage {
            MechanicalStage::Sealed => "The casing is sealed.",
            MechanicalStage::Unbolted => "The casing bolts have been drilled out.",
            MechanicalStage::Open => "The casing is pried open, exposing the internals.",
        }
    }
}
