//! Identifier generation for new user records.

use rand::{Rng, RngCore};

/// Number of random bytes behind a user id (hex-encoded to 20 characters).
const USER_ID_BYTES: usize = 10;

/// Exclusive upper bound for generated member numbers.
pub const MEMBER_NO_UPPER_BOUND: u32 = 1_000_000_000;

/// Generates an opaque user id: 10 bytes from the OS-seeded thread RNG,
/// lowercase hex encoded.
pub fn generate_user_id() -> String {
    let mut bytes = [0u8; USER_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generates a member number in `[0, 10^9)`.
pub fn generate_member_no() -> u32 {
    rand::thread_rng().gen_range(0..MEMBER_NO_UPPER_BOUND)
}
