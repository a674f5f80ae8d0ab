//! Damage bookkeeping for body parts and mechanisms.
//!
//! Only the arithmetic needed to keep durability consistent lives here:
//! a per-type damage tally and a per-type resistance modifier.

use std::collections::BTreeMap;

/// Kind of damage dealt to a part.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DamageType {
    Blunt,
    Piercing,
    Slash,
    Heat,
    Cold,
    Shock,
    Toxin,
}

/// Per-type damage totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageContainer {
    damages: BTreeMap<DamageType, u32>,
}

impl DamageContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damage recorded for a single type.
    pub fn get(&self, kind: DamageType) -> u32 {
        self.damages.get(&kind).copied().unwrap_or(0)
    }

    /// Sum of all recorded damage.
    pub fn total(&self) -> u32 {
        self.damages
            .values()
            .fold(0u32, |acc, amount| acc.saturating_add(*amount))
    }

    pub fn add(&mut self, kind: DamageType, amount: u32) {
        let entry = self.damages.entry(kind).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Removes up to `amount` of the given type, returning how much was healed.
    pub fn heal(&mut self, kind: DamageType, amount: u32) -> u32 {
        let Some(entry) = self.damages.get_mut(&kind) else {
            return 0;
        };
        let healed = amount.min(*entry);
        *entry -= healed;
        if *entry == 0 {
            self.damages.remove(&kind);
        }
        healed
    }

    pub fn clear(&mut self) {
        self.damages.clear();
    }
}

/// Modifier applied to incoming damage of one type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistance {
    /// Percentage of the incoming damage that is kept (100 = unmodified).
    pub coefficient: u32,
    /// Flat amount subtracted after the coefficient is applied.
    pub flat_reduction: u32,
}

impl Default for Resistance {
    fn default() -> Self {
        Self {
            coefficient: 100,
            flat_reduction: 0,
        }
    }
}

/// Resistances of a part against every damage type.
///
/// Types without an entry take damage unmodified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceSet {
    #[cfg_attr(feature = "serde", serde(default))]
    resistances: BTreeMap<DamageType, Resistance>,
}

impl ResistanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the modifier for a damage type (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: DamageType, coefficient: u32, flat_reduction: u32) -> Self {
        self.resistances.insert(
            kind,
            Resistance {
                coefficient,
                flat_reduction,
            },
        );
        self
    }

    pub fn resistance(&self, kind: DamageType) -> Resistance {
        self.resistances.get(&kind).copied().unwrap_or_default()
    }

    /// Returns the damage that gets through after resistances.
    pub fn apply(&self, kind: DamageType, amount: u32) -> u32 {
        let resistance = self.resistance(kind);
        let scaled = (u64::from(amount) * u64::from(resistance.coefficient) / 100)
            .min(u64::from(u32::MAX)) as u32;
        scaled.saturating_sub(resistance.flat_reduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_totals_and_heals() {
        let mut damage = DamageContainer::new();
        damage.add(DamageType::Blunt, 10);
        damage.add(DamageType::Heat, 5);
        damage.add(DamageType::Blunt, 2);

        assert_eq!(damage.get(DamageType::Blunt), 12);
        assert_eq!(damage.total(), 17);

        assert_eq!(damage.heal(DamageType::Heat, 20), 5);
        assert_eq!(damage.heal(DamageType::Cold, 1), 0);
        assert_eq!(damage.total(), 12);
    }

    #[test]
    fn resistances_scale_then_reduce() {
        let set = ResistanceSet::new().with(DamageType::Slash, 50, 2);

        assert_eq!(set.apply(DamageType::Slash, 10), 3);
        assert_eq!(set.apply(DamageType::Slash, 3), 0);
        assert_eq!(set.apply(DamageType::Blunt, 10), 10);
    }

    #[test]
    fn damage_type_parses_from_snake_case() {
        assert_eq!("piercing".parse::<DamageType>().unwrap(), DamageType::Piercing);
        assert_eq!(DamageType::Toxin.to_string(), "toxin");
    }
}
