use super::element::Element;
use nalgebra::Point2;
use serde::Serialize;

/// Represents one atom of a catalog molecule, placed on the 2-D canvas.
///
/// Atoms are immutable once the catalog is built. The `id` is unique within the
/// owning molecule and is what bonds, selections and hit tests refer to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    /// Identifier unique within the molecule (e.g., "c1", "h3").
    pub id: String,
    /// The atomic species, which fixes color, radius and label.
    pub element: Element,
    /// Position in the 600 × 400 logical canvas.
    pub position: Point2<f64>,
}

impl Atom {
    /// Creates a new `Atom` at `(x, y)`.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom identifier.
    /// * `element` - The atomic species.
    /// * `x`, `y` - Canvas coordinates.
    pub fn new(id: &str, element: Element, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            element,
            position: Point2::new(x, y),
        }
    }

    /// The text shown in prompts when this atom is clicked.
    pub fn describe(&self) -> String {
        format!("原子: {} (Atom ID: {})", self.element.symbol(), self.id)
    }
}
