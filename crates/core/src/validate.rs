//! Input checks that run before any request is sent.

use crate::error::GatewayError;
use regex::Regex;
use std::sync::OnceLock;

pub const REGISTRATION_DOMAIN: &str = "@stud.noroff.no";
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    regex.is_match(email)
}

pub fn validate_login(email: &str, password: &str) -> Result<(), GatewayError> {
    if email.is_empty() || password.is_empty() {
        return Err(GatewayError::invalid("Email and password are required"));
    }
    if !is_valid_email(email) {
        return Err(GatewayError::invalid("Please enter a valid email address"));
    }
    Ok(())
}

pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), GatewayError> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(GatewayError::invalid("All fields are required"));
    }
    if !is_valid_email(email) {
        return Err(GatewayError::invalid("Please enter a valid email address"));
    }
    if !email.ends_with(REGISTRATION_DOMAIN) {
        return Err(GatewayError::invalid(format!(
            "Only {} email addresses are allowed",
            REGISTRATION_DOMAIN
        )));
    }
    if password != confirm_password {
        return Err(GatewayError::invalid("Passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(GatewayError::invalid(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Name used on registration when the form leaves it blank.
pub fn default_profile_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
