//! REST API calls against the back-office server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, ApiError>` so callers can tell a
//! connectivity failure from a server rejection. `login` and the
//! password-reset calls decode their response body for non-2xx statuses
//! too: credential problems arrive as regular payloads with a
//! discriminator code, not as transport errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{
    ApiMessage, Categoria, EditUser, LoginResponse, NewUser, Permiso, ResetPasswordResponse, Role,
    User, Usuario,
};
#[cfg(feature = "hydrate")]
use crate::net::types::{PermisosList, RolesTable, roles_from_table};

#[cfg(any(test, feature = "hydrate"))]
fn role_endpoint(role_id: i64) -> String {
    format!("/api/roles/{role_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn role_permissions_endpoint(role_id: i64) -> String {
    format!("/api/roles/{role_id}/permisos")
}

#[cfg(any(test, feature = "hydrate"))]
fn role_permission_endpoint(role_id: i64, permiso_id: i64) -> String {
    format!("/api/roles/{role_id}/permisos/{permiso_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn permiso_endpoint(permiso_id: i64) -> String {
    format!("/api/permisos/{permiso_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn usuario_endpoint(user_id: i64) -> String {
    format!("/api/usuarios/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn categoria_endpoint(categoria_id: i64) -> String {
    format!("/api/categorias/{categoria_id}")
}

#[cfg(feature = "hydrate")]
fn get(url: &str, authorization: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .header("Authorization", authorization)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn delete(url: &str, authorization: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::delete(url)
        .header("Accept", "application/json")
        .header("Authorization", authorization)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn post_json<B: serde::Serialize>(
    url: &str,
    authorization: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Request, ApiError> {
    let mut builder = gloo_net::http::Request::post(url).header("Accept", "application/json");
    if let Some(authorization) = authorization {
        builder = builder.header("Authorization", authorization);
    }
    builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn put_json<B: serde::Serialize>(
    url: &str,
    authorization: &str,
    body: &B,
) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::put(url)
        .header("Accept", "application/json")
        .header("Authorization", authorization)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Send a request and decode a 2xx body; non-2xx becomes `Rejected`
/// with the backend's message when one can be mined from the body.
#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::Request,
) -> Result<T, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<ApiMessage>().await.ok();
        return Err(crate::net::error::rejection(status, body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and decode the body regardless of HTTP status. Used
/// by the auth endpoints, whose rejection payloads are ordinary bodies.
#[cfg(feature = "hydrate")]
async fn fetch_json_any_status<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::Request,
) -> Result<T, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Ok(decoded) = serde_json::from_str::<T>(&text) {
        return Ok(decoded);
    }
    let body = serde_json::from_str::<ApiMessage>(&text).ok();
    Err(crate::net::error::rejection(status, body))
}

/// Authenticate with email + password via `POST /api/login`.
///
/// Returns the decoded response for accepted *and* rejected
/// credentials; `success`/`status` tell them apart.
///
/// # Errors
///
/// Fails only on connectivity problems or an undecodable body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "device_name": "Web Application",
        });
        fetch_json_any_status(post_json("/api/login", None, &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user (with roles and permissions) from
/// `GET /api/me`.
///
/// # Errors
///
/// `Rejected { status: 401 | 403, .. }` signals an invalid session.
pub async fn get_me(authorization: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(get("/api/me", authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Revoke the session server-side via `POST /api/logout`. Best-effort:
/// callers clear local state regardless of the outcome.
///
/// # Errors
///
/// Returns the transport or rejection error for logging only.
pub async fn logout(authorization: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: ApiMessage =
            fetch_json(post_json("/api/logout", Some(authorization), &serde_json::json!({}))?)
                .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Request a password-reset email via `POST /api/reset-password`.
///
/// # Errors
///
/// Fails only on connectivity problems or an undecodable body; backend
/// outcomes arrive in the decoded `code` field.
pub async fn send_reset_password_email(email: &str) -> Result<ResetPasswordResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        fetch_json_any_status(post_json("/api/reset-password", None, &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Complete a password reset via `POST /api/reset-password/confirm`,
/// using the token + email pair from the emailed link.
///
/// # Errors
///
/// Fails only on connectivity problems or an undecodable body.
pub async fn confirm_reset_password(
    token: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<ResetPasswordResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "token": token,
            "email": email,
            "password": password,
            "password_confirmation": password_confirmation,
        });
        fetch_json_any_status(post_json("/api/reset-password/confirm", None, &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email, password, password_confirmation);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all roles from `GET /api/roles`, flattened and sorted by id.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn fetch_roles(authorization: &str) -> Result<Vec<Role>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let table: RolesTable = fetch_json(get("/api/roles", authorization)?).await?;
        Ok(roles_from_table(table))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a role via `POST /api/roles`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn create_role(authorization: &str, name: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        fetch_json(post_json("/api/roles", Some(authorization), &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a role via `DELETE /api/roles/{id}`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn delete_role(authorization: &str, role_id: i64) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(delete(&role_endpoint(role_id), authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, role_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the permissions attached to one role from
/// `GET /api/roles/{id}/permisos`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn fetch_role_permissions(
    authorization: &str,
    role_id: i64,
) -> Result<Vec<Permiso>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let list: PermisosList =
            fetch_json(get(&role_permissions_endpoint(role_id), authorization)?).await?;
        Ok(list.permisos)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, role_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Attach a permission to a role via `POST /api/roles/{id}/permisos`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn attach_permission(
    authorization: &str,
    role_id: i64,
    permiso_id: i64,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "permiso_id": permiso_id });
        fetch_json(post_json(
            &role_permissions_endpoint(role_id),
            Some(authorization),
            &payload,
        )?)
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, role_id, permiso_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Detach a permission from a role via
/// `DELETE /api/roles/{id}/permisos/{permiso_id}`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn detach_permission(
    authorization: &str,
    role_id: i64,
    permiso_id: i64,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(delete(&role_permission_endpoint(role_id, permiso_id), authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, role_id, permiso_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the global permission list from `GET /api/permisos`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn fetch_permissions(authorization: &str) -> Result<Vec<Permiso>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let list: PermisosList = fetch_json(get("/api/permisos", authorization)?).await?;
        Ok(list.permisos)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a global permission via `POST /api/permisos`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn create_permission(authorization: &str, name: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        fetch_json(post_json("/api/permisos", Some(authorization), &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a global permission via `DELETE /api/permisos/{id}`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn delete_permission(
    authorization: &str,
    permiso_id: i64,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(delete(&permiso_endpoint(permiso_id), authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, permiso_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all back-office users from `GET /api/usuarios`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn fetch_users(authorization: &str) -> Result<Vec<Usuario>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(get("/api/usuarios", authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a back-office user via `POST /api/usuarios`.
///
/// # Errors
///
/// Validation problems surface as `Rejected` with the first field
/// message from the backend's `errors` map.
pub async fn create_user(authorization: &str, form: &NewUser) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(post_json("/api/usuarios", Some(authorization), form)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, form);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a back-office user via `PUT /api/usuarios/{id}`.
///
/// # Errors
///
/// Validation problems surface as `Rejected` with the first field
/// message from the backend's `errors` map.
pub async fn update_user(
    authorization: &str,
    user_id: i64,
    form: &EditUser,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(put_json(&usuario_endpoint(user_id), authorization, form)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, user_id, form);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all product categories from `GET /api/categorias`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn fetch_categories(authorization: &str) -> Result<Vec<Categoria>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(get("/api/categorias", authorization)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a product category via `POST /api/categorias`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn create_category(authorization: &str, nombre: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "nombre": nombre });
        fetch_json(post_json("/api/categorias", Some(authorization), &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, nombre);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a product category via `PUT /api/categorias/{id}`.
///
/// # Errors
///
/// Standard transport/rejection/decode taxonomy.
pub async fn update_category(
    authorization: &str,
    categoria_id: i64,
    nombre: &str,
    estado: bool,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "nombre": nombre, "estado": estado });
        fetch_json(put_json(&categoria_endpoint(categoria_id), authorization, &payload)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, categoria_id, nombre, estado);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
