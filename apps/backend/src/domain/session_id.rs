//! Session identifiers.
//!
//! Ids are 16 characters of Crockford's Base32 alphabet (80 bits) drawn
//! from the thread-local CSPRNG, so games created concurrently in the same
//! process do not collide. They appear verbatim in share links and
//! redirect URLs; the alphabet needs no URL encoding.

use std::borrow::Borrow;
use std::fmt;

use rand::Rng;
use serde::Serialize;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const SESSION_ID_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..SESSION_ID_LEN)
            .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
