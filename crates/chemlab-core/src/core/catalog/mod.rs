//! # Molecule Catalog
//!
//! The process-wide, read-only table of molecules. It is built on first access
//! and never mutated afterwards; adding a molecule means appending a definition
//! to the data table.

mod data;

use crate::core::models::molecule::Molecule;
use std::sync::LazyLock;
use thiserror::Error;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(data::molecules()));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown molecule '{0}'")]
    UnknownMolecule(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    molecules: Vec<Molecule>,
}

impl Catalog {
    /// Builds a catalog from molecule definitions, keeping their order.
    pub fn new(molecules: Vec<Molecule>) -> Self {
        Self { molecules }
    }

    /// The shared built-in catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    /// The molecule shown at startup. `None` only for an empty catalog.
    pub fn first(&self) -> Option<&Molecule> {
        self.molecules.first()
    }

    pub fn get(&self, id: &str) -> Option<&Molecule> {
        self.molecules.iter().find(|m| m.id == id)
    }

    /// Like [`Catalog::get`] but with a typed error for unknown ids.
    pub fn require(&self, id: &str) -> Result<&Molecule, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownMolecule(id.to_string()))
    }

    /// `(id, label)` pairs for a molecule switcher, in catalog order.
    pub fn switcher_labels(&self) -> Vec<(&str, &str)> {
        self.molecules
            .iter()
            .map(|m| (m.id.as_str(), m.short_name()))
            .collect()
    }
}
