use super::*;
use crate::net::types::ResetPasswordCode;

fn response(code: Option<ResetPasswordCode>, message: &str) -> ResetPasswordResponse {
    ResetPasswordResponse {
        success: false,
        code,
        message: message.to_owned(),
    }
}

#[test]
fn email_codes_route_to_the_email_field() {
    for code in [
        ResetPasswordCode::EmailRequired,
        ResetPasswordCode::EmailInvalid,
        ResetPasswordCode::EmailNotFound,
    ] {
        let resp = response(Some(code), "correo inválido");
        assert_eq!(
            reset_email_field_error(&resp).as_deref(),
            Some("correo inválido")
        );
    }
}

#[test]
fn non_email_codes_stay_off_the_email_field() {
    let failed = response(Some(ResetPasswordCode::ResetEmailFailed), "no enviado");
    assert_eq!(reset_email_field_error(&failed), None);

    let missing = response(None, "algo falló");
    assert_eq!(reset_email_field_error(&missing), None);
}
