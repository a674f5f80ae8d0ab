//! Per-instance extension data attached to a body part.
//!
//! A part carries at most one property of each [`PropertyKind`]. Properties are
//! copied from the prototype at load time and can be added at runtime.

/// Extra capability data attached to a limb.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(PropertyKind))]
#[strum_discriminants(derive(Hash, strum::Display, strum::EnumString))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyPartProperty {
    /// The part can be used to walk; `speed` contributes to movement speed.
    Leg { speed: f32 },

    /// The part reaches out from the body (arms, legs, tentacles). `reach` is
    /// its length when measuring the distance to a foot.
    Extension { reach: f32 },

    /// The part can hold things.
    Grasp,

    /// The part is a foot. Legs only count toward movement while a chain of
    /// extensions connects them to one.
    Foot,
}

impl BodyPartProperty {
    pub fn kind(&self) -> PropertyKind {
        PropertyKind::from(self)
    }
}

/// The set of properties on one part, unique by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet {
    properties: Vec<BodyPartProperty>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from prototype data, keeping the first property of each kind.
    pub fn from_properties(properties: impl IntoIterator<Item = BodyPartProperty>) -> Self {
        let mut set = Self::new();
        for property in properties {
            set.try_add(property);
        }
        set
    }

    /// Adds a property unless one of the same kind is already present.
    pub fn try_add(&mut self, property: BodyPartProperty) -> bool {
        if self.has(property.kind()) {
            return false;
        }
        self.properties.push(property);
        true
    }

    pub fn get(&self, kind: PropertyKind) -> Option<&BodyPartProperty> {
        self.properties.iter().find(|p| p.kind() == kind)
    }

    pub fn has(&self, kind: PropertyKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPartProperty> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_kinds() {
        let mut set = PropertySet::new();
        assert!(set.try_add(BodyPartProperty::Leg { speed: 2.5 }));
        assert!(!set.try_add(BodyPartProperty::Leg { speed: 1.0 }));
        assert!(set.try_add(BodyPartProperty::Grasp));

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(PropertyKind::Leg),
            Some(&BodyPartProperty::Leg { speed: 2.5 })
        );
        assert!(!set.has(PropertyKind::Extension));
    }

    #[test]
    fn prototype_duplicates_keep_first() {
        let set = PropertySet::from_properties([
            BodyPartProperty::Extension { reach: 1.0 },
            BodyPartProperty::Extension { reach: 9.0 },
        ]);

        assert_eq!(set.len(), 1);
        assert_eq!(PropertyKind::Extension.to_string(), "extension");
    }
}
