// src/code.rs

//! Page code generation and validation.
//!
//! A code is the only external reference to a stored page: 6 random bytes,
//! hex encoded to 12 lowercase characters. Codes are not checked against
//! existing records; a collision overwrites the older record silently.

use rand::Rng;

/// Length of a page code in characters.
pub const CODE_LEN: usize = 12;

/// Generate a fresh page code.
///
/// # Examples
/// ```
/// let code = pagemirror::code::generate();
///
/// assert_eq!(code.len(), 12);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate() -> String {
    let mut bytes = [0u8; CODE_LEN / 2];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Check that a string is exactly 12 lowercase hex characters.
pub fn is_valid(code: &str) -> bool {
    code.len() == CODE_LEN && code.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
