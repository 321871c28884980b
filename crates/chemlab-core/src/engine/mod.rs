//! # Engine Module
//!
//! The explanation service: everything between a learner's request and the
//! remote language model.
//!
//! - **Configuration** ([`config`]) - endpoint, model, credential and timeout
//! - **Backend seam** ([`client`]) - the [`client::TextGenerator`] trait and the
//!   production [`gemini::GeminiClient`]
//! - **Service** ([`service`]) - prompt construction and reply interpretation
//! - **Messages** ([`messages`]) - fixed user-facing texts, including the
//!   per-operation failure table
//! - **Progress** ([`progress`]) - loading events for front ends

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod messages;
pub mod progress;
pub mod prompts;
pub mod service;
