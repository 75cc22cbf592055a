use super::*;

#[test]
fn validate_email_trims_and_accepts_plausible_addresses() {
    assert_eq!(
        validate_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn validate_email_requires_a_value() {
    assert_eq!(validate_email("   "), Err("El correo es obligatorio"));
}

#[test]
fn validate_email_rejects_implausible_shapes() {
    assert_eq!(validate_email("sin-arroba"), Err("Ingresa un correo válido"));
    assert_eq!(validate_email("a@b"), Err("Ingresa un correo válido"));
    assert_eq!(validate_email("@example.com"), Err("Ingresa un correo válido"));
    assert_eq!(validate_email("a@.com"), Err("Ingresa un correo válido"));
    assert_eq!(validate_email("a b@example.com"), Err("Ingresa un correo válido"));
    assert_eq!(validate_email("a@b@example.com"), Err("Ingresa un correo válido"));
}

#[test]
fn validate_password_requires_a_value() {
    assert_eq!(validate_password(""), Err("La contraseña es obligatoria"));
    assert_eq!(validate_password("   "), Err("La contraseña es obligatoria"));
    assert_eq!(validate_password("secret123"), Ok(()));
}

#[test]
fn validate_new_password_enforces_length_and_match() {
    assert_eq!(
        validate_new_password("", ""),
        Err("La contraseña es obligatoria")
    );
    assert_eq!(
        validate_new_password("abc", "abc"),
        Err("Debe tener al menos 4 caracteres")
    );
    assert_eq!(
        validate_new_password("abcd", "abce"),
        Err("Las contraseñas no coinciden")
    );
    assert_eq!(validate_new_password("abcd", "abcd"), Ok(()));
}
