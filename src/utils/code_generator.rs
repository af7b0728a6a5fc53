//! Short code generation and validation utilities.
//!
//! Codes are drawn uniformly from a 64-symbol URL-safe alphabet, so a
//! 6-character code has 64^6 (about 6.9 * 10^10) possible values. Uniqueness
//! is not assumed; callers retry on store conflicts (see
//! [`crate::application::services::LinkService`]).

use rand::Rng;

/// URL-safe alphabet: no character needs percent-encoding in a path segment.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated short codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Upper bound for any code accepted from a request path.
pub const MAX_CODE_LENGTH: usize = 64;

/// Generates a random short code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_code`].
///
/// Used to reject impossible codes before touching storage.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= MAX_CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
