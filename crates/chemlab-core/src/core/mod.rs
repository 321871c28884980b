//! # Core Module
//!
//! The stateless foundation of ChemLab: molecule data, the built-in catalog,
//! the geometry renderer and the quiz model.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Elements, atoms, bonds and molecules
//! - **Static Data** ([`catalog`]) - The read-only table of molecules shown by the app
//! - **Drawing** ([`render`]) - Bond geometry, hit regions and SVG output
//! - **Quizzes** ([`quiz`]) - The multiple-choice question model and its validation
//!
//! Nothing in this module performs I/O or holds mutable state.

pub mod catalog;
pub mod models;
pub mod quiz;
pub mod render;
