use bitflags::bitflags;

/// Kind of surgical tool being applied to a body part.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SurgeryType {
    Incision,
    Retraction,
    Cauterization,
    VesselCompression,
    Drilling,
    Amputation,
}

impl SurgeryType {
    pub const ALL: [SurgeryType; 6] = [
        SurgeryType::Incision,
        SurgeryType::Retraction,
        SurgeryType::Cauterization,
        SurgeryType::VesselCompression,
        SurgeryType::Drilling,
        SurgeryType::Amputation,
    ];

    /// The single-bit set for this tool.
    pub const fn flag(self) -> ToolSet {
        match self {
            SurgeryType::Incision => ToolSet::INCISION,
            SurgeryType::Retraction => ToolSet::RETRACTION,
            SurgeryType::Cauterization => ToolSet::CAUTERIZATION,
            SurgeryType::VesselCompression => ToolSet::VESSEL_COMPRESSION,
            SurgeryType::Drilling => ToolSet::DRILLING,
            SurgeryType::Amputation => ToolSet::AMPUTATION,
        }
    }
}

bitflags! {
    /// Set of tools that would produce a valid surgical step.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ToolSet: u8 {
        const INCISION           = 1 << 0;
        const RETRACTION         = 1 << 1;
        const CAUTERIZATION      = 1 << 2;
        const VESSEL_COMPRESSION = 1 << 3;
        const DRILLING           = 1 << 4;
        const AMPUTATION         = 1 << 5;
    }
}

impl ToolSet {
    pub fn allows(self, tool: SurgeryType) -> bool {
        self.contains(tool.flag())
    }

    /// Expands the set back into tool types, in declaration order.
    pub fn tools(self) -> impl Iterator<Item = SurgeryType> {
        SurgeryType::ALL
            .into_iter()
            .filter(move |tool| self.allows(*tool))
    }
}

impl From<SurgeryType> for ToolSet {
    fn from(tool: SurgeryType) -> Self {
        tool.flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_set_expands_in_order() {
        let set = ToolSet::from(SurgeryType::Cauterization) | SurgeryType::Incision.flag();
        let tools: Vec<_> = set.tools().collect();

        assert_eq!(
            tools,
            vec![SurgeryType::Incision, SurgeryType::Cauterization]
        );
        assert!(!set.allows(SurgeryType::Drilling));
    }

    #[test]
    fn tool_names_are_snake_case() {
        assert_eq!(SurgeryType::VesselCompression.as_ref(), "vessel_compression");
        assert_eq!(
            "vessel_compression".parse::<SurgeryType>().unwrap(),
            SurgeryType::VesselCompression
        );
    }
}
