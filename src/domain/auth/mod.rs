//! HTTP Basic authentication against a single configured credential pair.

pub mod basic;

pub use basic::{parse_basic_auth_header, AuthError, BasicAuthenticator};
