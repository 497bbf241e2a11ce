//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `admin_shell` gates the admin section; the `site_*` components and
//! `scroll_to_top` make up the public page chrome.

pub mod admin_shell;
pub mod scroll_to_top;
pub mod site_footer;
pub mod site_header;
pub mod site_layout;
