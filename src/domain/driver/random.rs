//! Synthetic driver generation for seeding test data. No uniqueness guarantee.

use super::model::Driver;
use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const RANDOM_NAME_LENGTH: usize = 6;
pub const RANDOM_EMAIL_DOMAIN: &str = "driver.com";
pub const RANDOM_PHONE_PREFIX: &str = "888";

pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// A driver with random 6-letter names, an email derived from them and a `888-NNNN` phone.
/// The id is left at 0 for the store to assign.
pub fn random_driver<R: Rng + ?Sized>(rng: &mut R) -> Driver {
    let first_name = random_letters(rng, RANDOM_NAME_LENGTH);
    let last_name = random_letters(rng, RANDOM_NAME_LENGTH);
    let email = format!("{}.{}@{}", first_name, last_name, RANDOM_EMAIL_DOMAIN);
    let phone_number = format!("{}-{}", RANDOM_PHONE_PREFIX, rng.gen_range(1000..9999));
    Driver {
        id: 0,
        first_name,
        last_name,
        email,
        phone_number,
    }
}
