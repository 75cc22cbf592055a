use super::*;

fn rejection(status: Option<AuthErrorCode>, message: &str) -> LoginResponse {
    LoginResponse {
        success: false,
        message: message.to_owned(),
        status,
        user: None,
        token: None,
        token_type: None,
    }
}

#[test]
fn email_not_found_routes_message_to_email_field() {
    let resp = rejection(Some(AuthErrorCode::EmailNotFound), "El correo no existe");
    let (email_err, password_err) = login_field_errors(&resp);
    assert_eq!(email_err.as_deref(), Some("El correo no existe"));
    assert_eq!(password_err, None);
}

#[test]
fn invalid_password_routes_message_to_password_field() {
    let resp = rejection(Some(AuthErrorCode::InvalidPassword), "Contraseña incorrecta");
    let (email_err, password_err) = login_field_errors(&resp);
    assert_eq!(email_err, None);
    assert_eq!(password_err.as_deref(), Some("Contraseña incorrecta"));
}

#[test]
fn unknown_or_missing_status_routes_to_neither_field() {
    let (email_err, password_err) = login_field_errors(&rejection(None, "algo falló"));
    assert_eq!(email_err, None);
    assert_eq!(password_err, None);

    let resp = rejection(Some(AuthErrorCode::Unknown), "algo falló");
    assert_eq!(login_field_errors(&resp), (None, None));
}
