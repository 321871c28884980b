//! # Core Models Module
//!
//! This module contains the data structures used to describe the molecules shown
//! by ChemLab.
//!
//! ## Overview
//!
//! A [`molecule::Molecule`] owns a list of [`atom::Atom`]s placed on the 600 × 400
//! logical canvas and a list of [`topology::Bond`]s that connect them by id. The
//! models are plain, immutable data: they are built once by the catalog and then
//! only read by the renderer, the explanation service and the session.
//!
//! ## Key Components
//!
//! - [`element`] - The closed set of atomic species and their drawing constants
//! - [`atom`] - A labelled atom with a canvas position
//! - [`builder`] - Fluent construction of catalog molecules
//! - [`topology`] - Bond orders and bonds between two atoms
//! - [`molecule`] - The molecule definition, lookups and integrity checks

pub mod atom;
pub mod builder;
pub mod element;
pub mod molecule;
pub mod topology;
