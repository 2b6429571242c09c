use crate::infra::config::BasicAuthCredentials;
use base64::prelude::*;
use subtle::ConstantTimeEq;
use thiserror::Error;

const BASIC_SCHEME: &str = "basic";

/// Why a request failed to authenticate. Only ever logged; callers see one uniform 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingHeader,
    #[error("malformed Authorization header: {0}")]
    MalformedAuthorization(String),
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Parse an `Authorization: Basic <base64(username:password)>` value.
///
/// The scheme is matched case-insensitively and the password may itself contain `:`.
pub fn parse_basic_auth_header(auth_header: &str) -> Result<(String, String), AuthError> {
    let (scheme, encoded) = auth_header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AuthError::MalformedAuthorization("expected '<scheme> <credentials>'".into()))?;

    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return Err(AuthError::MalformedAuthorization(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    }

    let decoded_bytes = BASE64_STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(|e| AuthError::MalformedAuthorization(format!("invalid base64 encoding: {}", e)))?;

    let decoded = String::from_utf8(decoded_bytes)
        .map_err(|e| AuthError::MalformedAuthorization(format!("invalid UTF-8 in credentials: {}", e)))?;

    let (username, password) = decoded.split_once(':').ok_or_else(|| {
        AuthError::MalformedAuthorization("credentials must be in format 'username:password'".into())
    })?;

    Ok((username.to_string(), password.to_string()))
}

/// Checks Basic credentials against the configured pair. Stateless; every request is
/// checked independently.
pub struct BasicAuthenticator {
    credentials: BasicAuthCredentials,
}

impl BasicAuthenticator {
    pub fn new(credentials: BasicAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Returns the authenticated username.
    pub fn authenticate(&self, auth_header: Option<&str>) -> Result<String, AuthError> {
        let header = auth_header.ok_or(AuthError::MissingHeader)?;
        let (username, password) = parse_basic_auth_header(header)?;

        let user_ok = username.as_bytes().ct_eq(self.credentials.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.credentials.password.as_bytes());
        if bool::from(user_ok & pass_ok) {
            Ok(username)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
