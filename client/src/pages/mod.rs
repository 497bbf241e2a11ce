//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped content and delegates chrome to `components`.
//! Admin pages render inside `AdminShell`; public pages inside `SiteLayout`.

pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod sections;
