use rand::Rng;
use sha2::{Digest, Sha256};

/// Login codes are six digits, matching what the email template renders
pub const LOGIN_CODE_LENGTH: usize = 6;

/// How long an emailed code stays valid
pub const LOGIN_CODE_TTL_MINUTES: i64 = 10;

/// Generates a numeric login code
pub fn generate_login_code() -> String {
    const CHARSET_NUMBERS: &[u8] = b"0123456789";

    let mut rng = rand::rng();
    let mut code = String::with_capacity(LOGIN_CODE_LENGTH);

    for _ in 0..LOGIN_CODE_LENGTH {
        let idx = rng.random_range(0..CHARSET_NUMBERS.len());
        code.push(CHARSET_NUMBERS[idx] as char);
    }

    code
}

/// Hex encoded SHA-256 of a code. Only the hash is stored, the code itself
/// exists in the email alone.
pub fn hash_login_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}
