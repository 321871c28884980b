//! # ChemLab Core Library
//!
//! An interactive bonding lab for small organic molecules. Ethene, ethane and
//! ethyne are drawn as 2-D diagrams; clicking an atom or bond, running a
//! virtual experiment or asking for a quiz is answered by a hosted language
//! model.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data: the molecule models and
//!   built-in catalog, the geometry renderer with its SVG serializer and hit
//!   testing, and the quiz model with local validation.
//!
//! - **[`engine`]: The Explanation Service.** Prompt construction, the
//!   [`engine::client::TextGenerator`] seam and its Gemini implementation,
//!   configuration, the user-facing message table and progress events.
//!
//! - **[`workflows`]: The Public API.** The interaction session and its async
//!   controller, plus the quiz presenter. Front ends drive these.

pub mod core;
pub mod engine;
pub mod workflows;
