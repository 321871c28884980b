use super::atom::Atom;
use super::element::Element;
use super::molecule::Molecule;
use super::topology::{Bond, BondOrder};

pub struct MoleculeBuilder {
    molecule: Molecule,
}

impl MoleculeBuilder {
    pub fn new(id: &str, name: &str, formula: &str) -> Self {
        Self {
            molecule: Molecule {
                id: id.to_string(),
                name: name.to_string(),
                formula: formula.to_string(),
                description: String::new(),
                atoms: Vec::new(),
                bonds: Vec::new(),
                lab_actions: Vec::new(),
            },
        }
    }

    pub fn description(&mut self, text: &str) -> &mut Self {
        self.molecule.description = text.to_string();
        self
    }

    pub fn add_atom(&mut self, id: &str, element: Element, x: f64, y: f64) -> &mut Self {
        self.molecule.atoms.push(Atom::new(id, element, x, y));
        self
    }

    // Endpoints are not checked here; `Molecule::validate` reports dangling ids.
    pub fn add_bond(
        &mut self,
        id: &str,
        source_id: &str,
        target_id: &str,
        order: BondOrder,
        description: &str,
    ) -> &mut Self {
        self.molecule
            .bonds
            .push(Bond::new(id, source_id, target_id, order, description));
        self
    }

    pub fn lab_actions(&mut self, actions: &[&str]) -> &mut Self {
        self.molecule
            .lab_actions
            .extend(actions.iter().map(|a| a.to_string()));
        self
    }

    pub fn build(&mut self) -> Molecule {
        self.molecule.clone()
    }
}
