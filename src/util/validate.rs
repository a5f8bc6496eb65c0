//! Form field validation run before any network call.
//!
//! Failures here are rendered inline next to the offending input; nothing in
//! this module touches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Check an email address for the `local@domain.tld` shape.
///
/// Deliberately loose: the backend is the authority, this only catches
/// obvious typos before a round trip.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Invalid email format");
    };

    let ok = !local.is_empty()
        && !domain.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|seg| !seg.is_empty());

    if ok { Ok(()) } else { Err("Invalid email format") }
}

/// Check a new account's username: required, at least 3 characters.
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters");
    }
    Ok(())
}

/// Check the sign-in identifier (username or email, either accepted).
pub fn validate_login(login: &str) -> Result<(), &'static str> {
    if login.trim().is_empty() {
        Err("Username or email is required")
    } else {
        Ok(())
    }
}

/// Keep only digits from an MFA code input, capped at 6.
pub fn sanitize_mfa_code(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(6).collect()
}
