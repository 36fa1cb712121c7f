//! Join code generation.
//!
//! Join codes are 6-character strings over Crockford's Base32 alphabet, which
//! leaves out I, L, O and U so codes read back unambiguously.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

pub const JOIN_CODE_LEN: usize = 6;

pub fn generate_join_code() -> String {
    generate_join_code_with(&mut rand::rng())
}

pub fn generate_join_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..JOIN_CODE_LEN)
        .map(|_| char::from(CROCKFORD[rng.random_range(0..CROCKFORD.len())]))
        .collect()
}

/// Canonical form for lookups: trimmed and uppercased.
pub fn normalize_join_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Whether `raw` could be a join code once normalized.
pub fn is_well_formed(raw: &str) -> bool {
    let code = normalize_join_code(raw);
    code.len() == JOIN_CODE_LEN && code.bytes().all(|b| CROCKFORD.contains(&b))
}
