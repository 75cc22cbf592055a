use super::*;

#[test]
fn auth_rejection_matches_401_and_403_only() {
    let unauthorized = ApiError::Rejected { status: 401, message: "no".to_owned() };
    let forbidden = ApiError::Rejected { status: 403, message: "no".to_owned() };
    let server_error = ApiError::Rejected { status: 500, message: "boom".to_owned() };
    let network = ApiError::Network("timeout".to_owned());

    assert!(unauthorized.is_auth_rejection());
    assert!(forbidden.is_auth_rejection());
    assert!(!server_error.is_auth_rejection());
    assert!(!network.is_auth_rejection());
}

#[test]
fn network_failure_shows_generic_connectivity_message() {
    let err = ApiError::Network("dns".to_owned());
    assert_eq!(err.user_message(), "Error al conectar con el servidor");
}

#[test]
fn rejection_prefers_first_validation_message() {
    let body: ApiMessage = serde_json::from_str(
        r#"{"message": "validación", "errors": {"email": ["El correo ya está en uso"]}}"#,
    )
    .unwrap();
    let err = rejection(422, Some(body));
    assert_eq!(err.user_message(), "El correo ya está en uso");
}

#[test]
fn rejection_falls_back_to_message_then_status() {
    let body: ApiMessage = serde_json::from_str(r#"{"message": "sin permiso"}"#).unwrap();
    let err = rejection(403, Some(body));
    assert_eq!(err.user_message(), "sin permiso");
    assert!(err.is_auth_rejection());

    let bare = rejection(500, None);
    assert_eq!(bare.user_message(), "request failed: 500");
}
