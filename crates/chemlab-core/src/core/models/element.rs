use serde::{Deserialize, Serialize};
use std::fmt;

/// The atomic species that can appear in a catalog molecule.
///
/// Each element carries fixed presentation constants (fill color, draw radius,
/// label color) used by the renderer. The set is closed; adding a species means
/// adding a variant and its table entries here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    /// Carbon (C).
    Carbon,
    /// Hydrogen (H).
    Hydrogen,
    /// Oxygen (O).
    Oxygen,
    /// Nitrogen (N).
    Nitrogen,
}

impl Element {
    /// The one-letter chemical symbol, also used as the atom label.
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Carbon => "C",
            Element::Hydrogen => "H",
            Element::Oxygen => "O",
            Element::Nitrogen => "N",
        }
    }

    /// Fill color of the atom disc.
    pub fn color(self) -> &'static str {
        match self {
            Element::Carbon => "#374151",
            Element::Hydrogen => "#cbd5e1",
            Element::Oxygen => "#ef4444",
            Element::Nitrogen => "#3b82f6",
        }
    }

    /// Draw radius of the atom disc in canvas units.
    pub fn radius(self) -> f64 {
        match self {
            Element::Carbon => 20.0,
            Element::Hydrogen => 12.0,
            Element::Oxygen | Element::Nitrogen => 18.0,
        }
    }

    /// Whether the fill is light enough to need dark label text.
    pub fn is_light(self) -> bool {
        matches!(self, Element::Hydrogen)
    }

    /// Label text color, contrasting with [`Element::color`].
    pub fn label_color(self) -> &'static str {
        if self.is_light() { "#475569" } else { "white" }
    }

    /// Label font size in canvas units.
    pub fn label_font_size(self) -> f64 {
        if self.is_light() { 12.0 } else { 14.0 }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
