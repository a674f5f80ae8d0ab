//! Per-part surgical rule engines.
//!
//! Every [`crate::part::BodyPart`] owns exactly one [`SurgeryData`] strategy,
//! chosen at load time from the prototype's [`SurgeryKind`]. The strategy
//! decides:
//!
//! - whether another part may be attached to its host,
//! - whether a mechanism may be installed right now,
//! - which tool advances the surgical procedure and what that step does.
//!
//! Strategies never touch the world. Steps with side effects beyond the
//! strategy's own stage (pulling out an organ, removing the limb) are handed
//! to a [`Surgeon`] as [`SurgeryRequest`]s for the caller to apply.
mod biological;
mod mechanical;
mod tools;

use std::fmt;

pub use biological::{BiologicalStage, BiologicalSurgery};
pub use mechanical::{MechanicalStage, MechanicalSurgery};
pub use tools::{SurgeryType, ToolSet};

use crate::mechanism::{Mechanism, MechanismUid};
use crate::part::{BodyPart, BodyPartCompatibility};
use crate::types::EntityId;

/// Follow-up work produced by a surgical step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurgeryRequest {
    /// The organs are loose; the surgeon should pick one of `options` to remove.
    ExtractMechanism {
        target: EntityId,
        performer: EntityId,
        options: Vec<MechanismUid>,
    },

    /// The limb has been cut free and should be removed from its container.
    DetachPart { target: EntityId, performer: EntityId },
}

/// Receiver of surgery follow-ups (usually the tool in the performer's hand).
pub trait Surgeon {
    fn request(&mut self, request: SurgeryRequest);
}

impl Surgeon for Vec<SurgeryRequest> {
    fn request(&mut self, request: SurgeryRequest) {
        self.push(request);
    }
}

/// Everything a strategy may read while performing a step.
pub struct SurgeryContext<'a> {
    /// Container holding the operated part (a body or a dropped part).
    pub target: EntityId,
    /// Entity holding the tool.
    pub performer: EntityId,
    pub surgeon: &'a mut dyn Surgeon,
    /// Mechanisms currently installed in the operated part.
    pub mechanisms: &'a [Mechanism],
}

impl fmt::Debug for SurgeryContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurgeryContext")
            .field("target", &self.target)
            .field("performer", &self.performer)
            .field("mechanisms", &self.mechanisms.len())
            .finish_non_exhaustive()
    }
}

/// Rule engine for one body part instance.
///
/// The contract every implementation upholds:
///
/// - queries (`can_*`, `check_surgery`, `valid_tools`) never mutate;
/// - `perform_surgery` returns `false` without mutation whenever
///   `check_surgery` would return `false`;
/// - a successful `perform_surgery` consumes exactly one tool use and moves
///   the procedure by exactly one step.
pub trait SurgeryData: fmt::Debug + Send + Sync {
    /// Registry identifier this strategy was built from.
    fn kind(&self) -> SurgeryKind;

    /// Whether `candidate` may be attached to the host part.
    fn can_attach_body_part(&self, host: BodyPartCompatibility, candidate: &BodyPart) -> bool;

    /// Whether `mechanism` may be installed given the current stage.
    ///
    /// Capacity is checked by the part itself before this is consulted.
    fn can_install_mechanism(&self, mechanism: &Mechanism) -> bool;

    /// Tools that would produce a valid step right now.
    fn valid_tools(&self) -> ToolSet;

    /// Would `tool` produce a valid next step right now?
    fn check_surgery(&self, tool: SurgeryType) -> bool {
        self.valid_tools().allows(tool)
    }

    /// Applies one step with `tool`.
    fn perform_surgery(&mut self, tool: SurgeryType, ctx: &mut SurgeryContext<'_>) -> bool;

    /// True when no procedure is in progress.
    fn is_closed(&self) -> bool;

    /// Short status line for examine text.
    fn describe(&self) -> &'static str;
}

/// Closed registry of surgery strategies, selected by prototype data.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SurgeryKind {
    #[default]
    Biological,
    Mechanical,
}

impl SurgeryKind {
    /// Builds a fresh strategy in its closed stage.
    pub fn create(self) -> Box<dyn SurgeryData> {
        match self {
            SurgeryKind::Biological => Box::new(BiologicalSurgery::new()),
            SurgeryKind::Mechanical => Box::new(MechanicalSurgery::new()),
        }
    }
}
