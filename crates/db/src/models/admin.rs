//! Admin entity model and DTOs.

use mdp_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AdminInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub email: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
        }
    }
}

/// DTO for creating a new admin. The password is hashed by the caller.
#[derive(Debug)]
pub struct CreateAdmin {
    pub email: String,
    pub password_hash: String,
}
