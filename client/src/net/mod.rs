//! Networking modules for the auth collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the session/logout HTTP calls and `types` defines the shared
//! wire schema that the host relay also serializes.

pub mod api;
pub mod types;
