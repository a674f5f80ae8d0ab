//! Classification enums for body parts.

/// Anatomical role of a body part. Slots in a body template declare which
/// type they accept.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyPartType {
    #[default]
    Other,
    Torso,
    Head,
    Arm,
    Hand,
    Leg,
    Foot,
}

/// Physical category limiting which parts can be joined together.
///
/// Most limbs only join parts of their own category; universal parts
/// (e.g. adaptive prosthetics) join anything.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyPartCompatibility {
    Universal,
    #[default]
    Biological,
    Mechanical,
}

impl BodyPartCompatibility {
    /// Returns true if parts of these two categories can be joined.
    pub const fn is_compatible_with(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Universal, _)
                | (_, Self::Universal)
                | (Self::Biological, Self::Biological)
                | (Self::Mechanical, Self::Mechanical)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_joins_everything() {
        use BodyPartCompatibility::*;
        assert!(Universal.is_compatible_with(Mechanical));
        assert!(Biological.is_compatible_with(Universal));
        assert!(Biological.is_compatible_with(Biological));
        assert!(!Biological.is_compatible_with(Mechanical));
    }

    #[test]
    fn part_type_round_trips_through_strings() {
        assert_eq!("ARM".parse::<BodyPartType>().unwrap(), BodyPartType::Arm);
        assert_eq!(BodyPartType::Torso.as_ref(), "torso");
    }
}
