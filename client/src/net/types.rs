//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The host relays the auth service's session payload through these types, so
//! both sides agree on one normalized JSON shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name shown in the admin top bar.
    pub name: String,
    /// Avatar image URL, if the user has one.
    #[serde(default, alias = "avatar_url")]
    pub picture: Option<String>,
}

impl Session {
    /// Avatar URL suitable for an `<img src>`, skipping blank values.
    pub fn avatar(&self) -> Option<&str> {
        self.picture.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}
