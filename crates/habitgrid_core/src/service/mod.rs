//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate index, notes, analytics and store calls into session APIs.
//! - Keep CLI/front-end layers decoupled from storage details.

pub mod tracker_service;
