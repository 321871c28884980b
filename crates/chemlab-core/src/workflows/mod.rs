//! # Workflows Module
//!
//! The interaction layer a front end drives.
//!
//! - **Session** ([`session`]) - the synchronous Idle / Loading / QuizOpen
//!   state machine holding the active molecule, selection and info text
//! - **Controller** ([`controller`]) - pairs a session with the explanation
//!   service and reports loading progress
//! - **Quiz Presenter** ([`presenter`]) - one multiple-choice question and its
//!   answer reveal

pub mod controller;
pub mod presenter;
pub mod session;
