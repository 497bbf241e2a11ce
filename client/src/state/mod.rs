//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! Only the admin gate carries state beyond a single boolean today.

pub mod auth;
