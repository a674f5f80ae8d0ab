//! Movement speed derived from the legs a body has and how they reach a foot.

use std::collections::BTreeSet;

use super::Body;
use crate::part::{BodyPart, BodyPartProperty, PropertyKind};
use crate::types::SlotName;

/// Walk and sprint speed of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementSpeed {
    pub walk: f32,
    pub sprint: f32,
}

impl MovementSpeed {
    /// Speed of a body with no working legs (crawling).
    pub const CRAWL: Self = Self {
        walk: 0.8,
        sprint: 2.0,
    };

    pub const SPRINT_MULTIPLIER: f32 = 1.75;
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::CRAWL
    }
}

fn reach(part: &BodyPart) -> Option<f32> {
    match part.property(PropertyKind::Extension)? {
        BodyPartProperty::Extension { reach } => Some(*reach),
        _ => None,
    }
}

fn leg_speed(part: &BodyPart) -> Option<f32> {
    match part.property(PropertyKind::Leg)? {
        BodyPartProperty::Leg { speed } => Some(*speed),
        _ => None,
    }
}

impl Body {
    /// Length of the shortest chain of extensions from the part in `slot`
    /// to a foot, counting every part on the way including `slot` itself.
    ///
    /// `None` when the slot is empty or no foot can be reached. A foot that
    /// is itself an extension measures its own reach.
    pub fn distance_to_nearest_foot(&self, slot: &str) -> Option<f32> {
        let part = self.part(slot)?;
        if part.has_property(PropertyKind::Foot) {
            return reach(part);
        }
        let mut visited = BTreeSet::new();
        self.search_foot(slot, &mut visited)
    }

    fn search_foot(&self, slot: &str, visited: &mut BTreeSet<SlotName>) -> Option<f32> {
        let length = reach(self.part(slot)?)?;
        visited.insert(SlotName::from(slot));

        let neighbors: Vec<&SlotName> = self
            .template()
            .connections(slot)
            .iter()
            .filter(|next| !visited.contains(*next) && self.part(next.as_str()).is_some())
            .collect();

        if neighbors.iter().any(|next| {
            self.part(next.as_str())
                .is_some_and(|part| part.has_property(PropertyKind::Foot))
        }) {
            return Some(length);
        }

        neighbors
            .into_iter()
            .filter_map(|next| self.search_foot(next.as_str(), visited))
            .min_by(f32::total_cmp)
            .map(|nearest| nearest + length)
    }

    /// Walk and sprint speed from the legs that reach a foot.
    ///
    /// Each leg contributes `speed * (1 + log1024(distance))`. Extra legs
    /// stack diminishingly: the sum is divided by `n - log4(n)`. A body with
    /// no contributing legs crawls at [`MovementSpeed::CRAWL`].
    pub fn movement_speed(&self) -> MovementSpeed {
        let legs: Vec<(f32, f32)> = self
            .parts()
            .filter_map(|(slot, part)| {
                let speed = leg_speed(part)?;
                let distance = self.distance_to_nearest_foot(slot.as_str())?;
                Some((speed, distance))
            })
            .collect();

        let speed_sum: f32 = legs
            .iter()
            .map(|(speed, distance)| speed * (1.0 + distance.log(1024.0)))
            .sum();
        if legs.is_empty() || speed_sum <= 0.001 {
            return MovementSpeed::CRAWL;
        }

        let count = legs.len() as f32;
        let walk = speed_sum / (count - count.log(4.0));
        MovementSpeed {
            walk,
            sprint: walk * MovementSpeed::SPRINT_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyTemplate;
    use crate::env::{BodyPartPrototype, PrototypeCatalog};
    use crate::part::BodyPartType;

    fn legged_template() -> BodyTemplate {
        BodyTemplate::new("biped", "biped", "torso", BodyPartType::Torso)
            .with_slot("left leg", BodyPartType::Leg)
            .with_slot("right leg", BodyPartType::Leg)
            .with_slot("left foot", BodyPartType::Foot)
            .with_slot("right foot", BodyPartType::Foot)
            .connect("torso", "left leg")
            .connect("torso", "right leg")
            .connect("left leg", "left foot")
            .connect("right leg", "right foot")
    }

    fn part(prototype: BodyPartPrototype) -> BodyPart {
        BodyPart::from_prototype(&prototype, &PrototypeCatalog::new()).unwrap()
    }

    fn torso() -> BodyPart {
        part(BodyPartPrototype::new("torso", "torso", BodyPartType::Torso, 10))
    }

    fn leg(speed: f32, reach: f32) -> BodyPart {
        let mut prototype = BodyPartPrototype::new("leg", "leg", BodyPartType::Leg, 10);
        prototype.properties = vec![
            BodyPartProperty::Leg { speed },
            BodyPartProperty::Extension { reach },
        ];
        part(prototype)
    }

    fn foot() -> BodyPart {
        let mut prototype = BodyPartPrototype::new("foot", "foot", BodyPartType::Foot, 2);
        prototype.properties = vec![BodyPartProperty::Foot];
        part(prototype)
    }

    fn biped(feet: &[&str]) -> Body {
        let mut body = Body::new(legged_template()).unwrap();
        body.attach_part(&"torso".into(), torso()).unwrap();
        body.attach_part(&"left leg".into(), leg(2.5, 2.0)).unwrap();
        body.attach_part(&"right leg".into(), leg(2.5, 2.0)).unwrap();
        for slot in feet {
            body.attach_part(&SlotName::from(*slot), foot()).unwrap();
        }
        body
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn distance_counts_the_leg_reaching_the_foot() {
        let body = biped(&["left foot"]);

        assert_eq!(body.distance_to_nearest_foot("left leg"), Some(2.0));
        assert_eq!(body.distance_to_nearest_foot("right leg"), None);
        // The torso has no extension, so the search cannot start there.
        assert_eq!(body.distance_to_nearest_foot("torso"), None);
        assert_eq!(body.distance_to_nearest_foot("left foot"), None);
    }

    #[test]
    fn chained_extensions_add_up() {
        let template = BodyTemplate::new("stilt", "stilt", "torso", BodyPartType::Torso)
            .with_slot("thigh", BodyPartType::Leg)
            .with_slot("shin", BodyPartType::Leg)
            .with_slot("foot", BodyPartType::Foot)
            .connect("torso", "thigh")
            .connect("thigh", "shin")
            .connect("shin", "foot");
        let mut body = Body::new(template).unwrap();
        body.attach_part(&"torso".into(), torso()).unwrap();
        body.attach_part(&"thigh".into(), leg(1.0, 3.0)).unwrap();
        body.attach_part(&"shin".into(), leg(1.0, 1.5)).unwrap();
        body.attach_part(&"foot".into(), foot()).unwrap();

        assert_eq!(body.distance_to_nearest_foot("thigh"), Some(4.5));
        assert_eq!(body.distance_to_nearest_foot("shin"), Some(1.5));
    }

    #[test]
    fn two_legs_stack_diminishingly() {
        let speed = biped(&["left foot", "right foot"]).movement_speed();

        // Each leg: 2.5 * (1 + log1024(2)) = 2.75; two legs divide by 2 - 0.5.
        let expected = 5.5 / 1.5;
        assert!(approx(speed.walk, expected), "walk = {}", speed.walk);
        assert!(approx(speed.sprint, expected * 1.75));
    }

    #[test]
    fn single_leg_counts_in_full() {
        let speed = biped(&["left foot"]).movement_speed();

        assert!(approx(speed.walk, 2.75), "walk = {}", speed.walk);
    }

    #[test]
    fn no_feet_means_crawling() {
        assert_eq!(biped(&[]).movement_speed(), MovementSpeed::CRAWL);

        let mut body = biped(&["left foot", "right foot"]);
        body.remove_part("left leg");
        body.remove_part("right leg");
        assert_eq!(body.movement_speed(), MovementSpeed::CRAWL);
    }
}
