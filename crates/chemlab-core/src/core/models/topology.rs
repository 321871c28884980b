use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Whether the bond carries π electrons worth discussing for reactivity.
    pub fn is_multiple(self) -> bool {
        matches!(self, BondOrder::Double | BondOrder::Triple)
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
            Self::Aromatic => "Aromatic",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bond {
    pub id: String,
    pub source_id: String, // id of the first atom
    pub target_id: String, // id of the second atom
    pub order: BondOrder,
    pub description: String, // quoted verbatim in prompts
}

impl Bond {
    pub fn new(id: &str, source_id: &str, target_id: &str, order: BondOrder, description: &str) -> Self {
        Self {
            id: id.to_string(),
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            order,
            description: description.to_string(),
        }
    }

    /// The text shown in prompts when this bond is clicked.
    pub fn describe(&self) -> String {
        format!("化学键: {} (Bond ID: {})", self.description, self.id)
    }
}
