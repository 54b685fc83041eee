//! Join code generation for rooms.
//!
//! Room codes are 10-character strings using Crockford's Base32 alphabet,
//! free of look-alike characters so they survive being read out loud.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::OsRng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const CODE_LEN: usize = 10;

/// Generate a random room join code using the OS's secure RNG.
///
/// # Example
/// ```
/// use tysiac_engine::utils::join_code::generate_join_code;
///
/// let code = generate_join_code();
/// assert_eq!(code.len(), 10);
/// ```
pub fn generate_join_code() -> String {
    let mut rng = OsRng;
    let dist = Uniform::from(0..CROCKFORD.len());

    let mut s = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        s.push(CROCKFORD[dist.sample(&mut rng)] as char);
    }
    s
}
