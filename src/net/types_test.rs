use super::*;

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_without_roles_or_permissions_defaults_to_empty() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"nombre":"Ana","email":"ana@example.com"}"#).unwrap();
    assert!(user.roles.is_empty());
    assert!(user.permissions.is_empty());
}

#[test]
fn user_decodes_roles_and_permissions() {
    let raw = r#"{
        "id": 7,
        "nombre": "Luis",
        "email": "luis@example.com",
        "roles": ["Administrador"],
        "permissions": ["admin.sidebar.roles.y.permisos"]
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.roles, vec!["Administrador".to_owned()]);
    assert_eq!(
        user.permissions,
        vec!["admin.sidebar.roles.y.permisos".to_owned()]
    );
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_success_carries_token_and_user() {
    let raw = r#"{
        "success": true,
        "message": "ok",
        "token": "T",
        "token_type": "Bearer",
        "user": {"id": 1, "nombre": "Ana", "email": "a@b.com"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("T"));
    assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
    assert_eq!(resp.user.unwrap().id, 1);
    assert_eq!(resp.status, None);
}

#[test]
fn login_response_rejection_decodes_status_discriminator() {
    let raw = r#"{"success": false, "message": "no existe", "status": "EMAIL_NOT_FOUND"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.status, Some(AuthErrorCode::EmailNotFound));
    assert_eq!(resp.token, None);
}

#[test]
fn login_response_unknown_status_does_not_fail_decoding() {
    let raw = r#"{"success": false, "message": "x", "status": "SOMETHING_NEW"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.status, Some(AuthErrorCode::Unknown));
}

// =============================================================
// Reset password codes
// =============================================================

#[test]
fn reset_codes_classify_email_errors() {
    assert!(ResetPasswordCode::EmailRequired.is_email_error());
    assert!(ResetPasswordCode::EmailInvalid.is_email_error());
    assert!(ResetPasswordCode::EmailNotFound.is_email_error());
    assert!(!ResetPasswordCode::ResetEmailSent.is_email_error());
    assert!(!ResetPasswordCode::ResetEmailFailed.is_email_error());
}

#[test]
fn reset_response_decodes_code() {
    let raw = r#"{"success": true, "code": "RESET_EMAIL_SENT", "message": "enviado"}"#;
    let resp: ResetPasswordResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.code, Some(ResetPasswordCode::ResetEmailSent));
}

// =============================================================
// ApiMessage validation map
// =============================================================

#[test]
fn api_message_first_error_picks_first_field_message() {
    let raw = r#"{
        "message": "validación",
        "errors": {"email": ["El correo ya está en uso"], "nombre": ["Requerido"]}
    }"#;
    let msg: ApiMessage = serde_json::from_str(raw).unwrap();
    assert_eq!(msg.first_error(), Some("El correo ya está en uso"));
}

#[test]
fn api_message_without_errors_has_no_first_error() {
    let msg: ApiMessage = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
    assert_eq!(msg.first_error(), None);
}

// =============================================================
// Roles table flattening
// =============================================================

#[test]
fn roles_from_table_sorts_by_numeric_id() {
    let table: RolesTable =
        serde_json::from_str(r#"{"roles": {"10": "Cajero", "2": "Administrador"}}"#).unwrap();
    let roles = roles_from_table(table);
    assert_eq!(
        roles,
        vec![
            Role { id: 2, name: "Administrador".to_owned() },
            Role { id: 10, name: "Cajero".to_owned() },
        ]
    );
}

#[test]
fn roles_from_table_drops_non_numeric_keys() {
    let table: RolesTable =
        serde_json::from_str(r#"{"roles": {"1": "Admin", "x": "Broken"}}"#).unwrap();
    let roles = roles_from_table(table);
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Admin");
}

// =============================================================
// EditUser serialization
// =============================================================

#[test]
fn edit_user_omits_password_when_unchanged() {
    let form = EditUser {
        nombre: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        password: None,
        rol: "Cajero".to_owned(),
        estado: true,
    };
    let raw = serde_json::to_string(&form).unwrap();
    assert!(!raw.contains("password"));
}

#[test]
fn edit_user_includes_password_when_set() {
    let form = EditUser {
        nombre: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        password: Some("nueva".to_owned()),
        rol: "Cajero".to_owned(),
        estado: false,
    };
    let raw = serde_json::to_string(&form).unwrap();
    assert!(raw.contains(r#""password":"nueva""#));
}
