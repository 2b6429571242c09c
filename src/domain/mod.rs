//! Domain types and pure logic: driver records and credential checks.

pub mod auth;
pub mod driver;
