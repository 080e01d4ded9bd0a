//! Bcrypt hashing for the password hash tool.

use base64::alphabet::BCRYPT;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::Engine;

use crate::error::ToolError;

// Bcrypt uses its own base64 alphabet for the salt segment.
const BCRYPT_B64: GeneralPurpose = GeneralPurpose::new(&BCRYPT, NO_PAD);

pub const MIN_COST: u32 = 8;
pub const MAX_COST: u32 = 12;

/// Hashes `password` at the given cost. `salt` is an optional 22-character
/// bcrypt-base64 salt; when absent a random one is drawn.
pub fn bcrypt_hash(password: &str, cost: u32, salt: Option<&str>) -> Result<String, ToolError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(ToolError::input(format!(
            "cost must be between {MIN_COST} and {MAX_COST}"
        )));
    }
    if password.is_empty() {
        return Err(ToolError::input("password cannot be empty"));
    }
    match salt {
        Some(salt) => {
            let salt = decode_salt(salt)?;
            bcrypt::hash_with_salt(password, cost, salt)
                .map(|parts| parts.to_string())
                .map_err(|err| ToolError::input(err.to_string()))
        }
        None => bcrypt::hash(password, cost).map_err(|err| ToolError::input(err.to_string())),
    }
}

/// Checks `password` against an existing bcrypt hash.
pub fn bcrypt_verify(password: &str, hash: &str) -> Result<bool, ToolError> {
    bcrypt::verify(password, hash).map_err(|err| ToolError::input(err.to_string()))
}

fn decode_salt(salt: &str) -> Result<[u8; 16], ToolError> {
    if salt.chars().count() != 22 {
        return Err(ToolError::input("salt must be exactly 22 characters"));
    }
    let bytes = BCRYPT_B64
        .decode(salt)
        .map_err(|_| ToolError::input("salt is not valid bcrypt base64"))?;
    bytes
        .try_into()
        .map_err(|_| ToolError::input("salt must decode to 16 bytes"))
}
