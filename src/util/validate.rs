//! Form validation helpers for the auth screens.
//!
//! Messages are the user-facing Spanish strings rendered next to the
//! offending field; server-side validation remains authoritative.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate a sign-in / reset email field. Returns the trimmed value.
///
/// # Errors
///
/// Returns the field message for an empty or implausible address.
pub fn validate_email(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("El correo es obligatorio");
    }
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let plausible = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.contains(char::is_whitespace);
    if !plausible {
        return Err("Ingresa un correo válido");
    }
    Ok(trimmed.to_owned())
}

/// Validate the sign-in password field (required only).
///
/// # Errors
///
/// Returns the field message for a blank password.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("La contraseña es obligatoria");
    }
    Ok(())
}

/// Validate the new password + confirmation pair on the reset screen.
///
/// # Errors
///
/// Returns the field message for a blank, too-short, or mismatched pair.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("La contraseña es obligatoria");
    }
    if password.len() < 4 {
        return Err("Debe tener al menos 4 caracteres");
    }
    if password != confirmation {
        return Err("Las contraseñas no coinciden");
    }
    Ok(())
}
