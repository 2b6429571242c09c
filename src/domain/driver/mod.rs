//! Driver records and the pure logic around them.

pub mod alphabetize;
pub mod model;
pub mod random;
pub mod validation;

pub use alphabetize::{alphabetize, alphabetize_full_name, alphabetize_tokens};
pub use model::{AlphabetizedDriver, Driver, DriverPayload, FieldError};
pub use random::{random_driver, random_letters};
