//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field (the
//! backend speaks Spanish field names: `nombre`, `correo`, `estado`,
//! `permisos`) so serde decoding stays lossless. Optional collections
//! default to empty so older payloads without `roles`/`permissions`
//! still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/me` and embedded in the
/// persisted session record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Display name.
    pub nombre: String,
    /// Login email.
    pub email: String,
    /// Role names assigned to this user; snapshot taken at login/refresh.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Permission strings assigned to this user; snapshot taken at
    /// login/refresh and advisory-only for UI gating.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Server-side discriminator for credential rejections, used to route
/// the error message to the matching sign-in form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorCode {
    #[serde(rename = "EMAIL_NOT_FOUND")]
    EmailNotFound,
    #[serde(rename = "INVALID_PASSWORD")]
    InvalidPassword,
    #[serde(other)]
    Unknown,
}

/// Response body of `POST /api/login`, returned for both accepted and
/// rejected credentials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Present only on credential rejection.
    #[serde(default)]
    pub status: Option<AuthErrorCode>,
    /// Present only on success.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Outcome codes for the password-reset request flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPasswordCode {
    #[serde(rename = "EMAIL_REQUIRED")]
    EmailRequired,
    #[serde(rename = "EMAIL_INVALID")]
    EmailInvalid,
    #[serde(rename = "EMAIL_NOT_FOUND")]
    EmailNotFound,
    #[serde(rename = "RESET_EMAIL_SENT")]
    ResetEmailSent,
    #[serde(rename = "RESET_EMAIL_FAILED")]
    ResetEmailFailed,
    #[serde(other)]
    Unknown,
}

impl ResetPasswordCode {
    /// Whether this code describes a problem with the submitted email,
    /// so the message belongs on the email field.
    pub fn is_email_error(self) -> bool {
        matches!(
            self,
            Self::EmailRequired | Self::EmailInvalid | Self::EmailNotFound
        )
    }
}

/// Response body of the password-reset request and confirm endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: Option<ResetPasswordCode>,
    #[serde(default)]
    pub message: String,
}

/// Generic acknowledgement for create/update/delete calls. `errors` is
/// the backend's field → messages validation map; only the first
/// message is surfaced to the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiMessage {
    /// First validation message, if the backend returned a field map.
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()?
            .values()
            .find_map(|messages| messages.first())
            .map(String::as_str)
    }
}

/// A role row for the roles table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Wire shape of `GET /api/roles`: an id → name map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolesTable {
    #[serde(default)]
    pub roles: BTreeMap<String, String>,
}

/// Flatten the roles id → name map into rows sorted by id. Entries with
/// non-numeric keys are dropped rather than failing the whole table.
pub fn roles_from_table(table: RolesTable) -> Vec<Role> {
    let mut roles: Vec<Role> = table
        .roles
        .into_iter()
        .filter_map(|(id, name)| id.parse::<i64>().ok().map(|id| Role { id, name }))
        .collect();
    roles.sort_by_key(|role| role.id);
    roles
}

/// A permission row, both in the global list and per-role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permiso {
    pub id: i64,
    pub name: String,
}

/// Wire wrapper for permission lists: `{ "permisos": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermisosList {
    #[serde(default)]
    pub permisos: Vec<Permiso>,
}

/// A user row for the administration table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub rol: String,
    pub estado: bool,
}

/// Payload of `POST /api/usuarios`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: String,
}

/// Payload of `PUT /api/usuarios/{id}`. `password` is omitted from the
/// request body when unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUser {
    pub nombre: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub rol: String,
    pub estado: bool,
}

/// A product-category row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
    pub estado: bool,
}
