//! Running one surgical step and applying what it asks for.

use tracing::{debug, info};

use anatomy_core::{EntityId, MechanismUid, SurgeryRequest, SurgeryType};

use super::{PartLocation, Runtime, locate_part};
use crate::error::Result;
use crate::events::{BodyEvent, Notice};

/// Result of one surgery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurgeryOutcome {
    /// Whether the tool advanced the procedure.
    pub performed: bool,
    /// Mechanisms the performer may now pull out with
    /// [`Runtime::drop_mechanism`].
    pub extractable: Vec<MechanismUid>,
    /// Wrappers spawned by an amputation, the operated part first.
    pub detached: Vec<EntityId>,
}

impl Runtime {
    /// `performer` uses `tool` on the part at `location`.
    pub fn attempt_surgery(
        &mut self,
        performer: EntityId,
        location: &PartLocation,
        tool: SurgeryType,
    ) -> Result<SurgeryOutcome> {
        self.require_entity(performer)?;
        let container = location.container();
        let part = locate_part(&mut self.world, location)?;
        let mut requests: Vec<SurgeryRequest> = Vec::new();
        let performed = part.attempt_surgery(tool, container, &mut requests, performer);
        let status = part.surgery_status().to_string();

        if !performed {
            debug!(performer = %performer, container = %container, %tool, "surgery had no effect");
            self.notify(performer, Notice::SurgeryNoEffect { tool });
            return Ok(SurgeryOutcome::default());
        }

        info!(performer = %performer, container = %container, %tool, status = %status, "surgery step");
        self.events.publish(BodyEvent::SurgeryPerformed {
            performer,
            container,
            tool,
        });
        self.notify(performer, Notice::SurgeryStep { tool, status });

        let mut outcome = SurgeryOutcome {
            performed: true,
            ..SurgeryOutcome::default()
        };
        for request in requests {
            match request {
                SurgeryRequest::ExtractMechanism { options, .. } => {
                    outcome.extractable = options;
                }
                SurgeryRequest::DetachPart { .. } => match location {
                    PartLocation::Slot { body, slot } => {
                        outcome.detached = self.detach_part(*body, slot)?;
                    }
                    // Already outside any body.
                    PartLocation::Dropped(_) => {}
                },
            }
        }
        Ok(outcome)
    }
}
