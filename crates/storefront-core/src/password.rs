//! Password hashing for seeded user credentials.
//!
//! The web layer stores bcrypt hashes, so seed users written straight to the
//! database must be hashed the same way or they cannot log in.

use bcrypt::{hash, verify};

use crate::errors::DatagenError;

/// Lowest cost bcrypt accepts. Used for seeded accounts only.
pub const SEED_HASH_COST: u32 = 4;

pub fn hash_password(password: &str, cost: u32) -> Result<String, DatagenError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, DatagenError> {
    Ok(verify(password, hash)?)
}
