use super::atom::Atom;
use super::topology::Bond;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// A molecule definition as shown on the canvas.
///
/// Owns its atoms and bonds. Bonds refer to atoms by id; [`Molecule::validate`]
/// checks that every such reference resolves and that ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Molecule {
    /// Catalog key (e.g., "ethene").
    pub id: String,
    /// Display name, e.g. "乙烯 (Ethene)".
    pub name: String,
    /// Chemical formula with subscript digits, e.g. "C₂H₄".
    pub formula: String,
    /// Short description shown when the molecule is loaded.
    pub description: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// Free-text virtual experiment labels, in display order.
    pub lab_actions: Vec<String>,
}

/// An atom or a bond of a molecule, i.e. anything the user can click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selectable<'a> {
    Atom(&'a Atom),
    Bond(&'a Bond),
}

impl Selectable<'_> {
    pub fn id(&self) -> &str {
        match self {
            Selectable::Atom(atom) => &atom.id,
            Selectable::Bond(bond) => &bond.id,
        }
    }

    /// The clicked-item text quoted in explanation prompts.
    pub fn describe(&self) -> String {
        match self {
            Selectable::Atom(atom) => atom.describe(),
            Selectable::Bond(bond) => bond.describe(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Bond '{bond_id}' references missing atom '{atom_id}'")]
    DanglingReference { bond_id: String, atom_id: String },
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),
}

impl Molecule {
    pub fn atom(&self, id: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    pub fn bond(&self, id: &str) -> Option<&Bond> {
        self.bonds.iter().find(|b| b.id == id)
    }

    /// Looks up a clickable atom or bond by id. Atoms win if an id is shared.
    pub fn selectable(&self, id: &str) -> Option<Selectable<'_>> {
        self.atom(id)
            .map(Selectable::Atom)
            .or_else(|| self.bond(id).map(Selectable::Bond))
    }

    /// Returns the two endpoint atoms of `bond`, or `None` if either is missing.
    pub fn bond_endpoints(&self, bond: &Bond) -> Option<(&Atom, &Atom)> {
        Some((self.atom(&bond.source_id)?, self.atom(&bond.target_id)?))
    }

    /// The catalog's own copy of the lab action labelled `label`.
    pub fn lab_action(&self, label: &str) -> Option<&str> {
        self.lab_actions
            .iter()
            .map(String::as_str)
            .find(|a| *a == label)
    }

    /// The label used for this molecule in a switcher: the display name up to
    /// its first space.
    pub fn short_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    /// Checks the data-integrity invariants of the molecule.
    ///
    /// # Errors
    ///
    /// Returns every violation found: duplicate atom or bond ids and bonds whose
    /// endpoints are not atoms of this molecule.
    pub fn validate(&self) -> Result<(), Vec<IntegrityError>> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for id in self
            .atoms
            .iter()
            .map(|a| &a.id)
            .chain(self.bonds.iter().map(|b| &b.id))
        {
            if !seen.insert(id.as_str()) {
                errors.push(IntegrityError::DuplicateId(id.clone()));
            }
        }

        for bond in &self.bonds {
            for atom_id in [&bond.source_id, &bond.target_id] {
                if self.atom(atom_id).is_none() {
                    errors.push(IntegrityError::DanglingReference {
                        bond_id: bond.id.clone(),
                        atom_id: atom_id.clone(),
                    });
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
