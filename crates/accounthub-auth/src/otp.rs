//! One-time code and reset-token generation.

use rand::RngExt;
use rand::distr::Alphanumeric;

/// Length of generated password-reset tokens.
const RESET_TOKEN_LEN: usize = 64;

/// Generate a random 4-digit OTP code, 1000–9999 inclusive.
pub fn generate_code() -> i32 {
    rand::rng().random_range(1000..=9999)
}

/// Generate an opaque alphanumeric password-reset token.
pub fn generate_reset_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_four_digits() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!((1000..=9999).contains(&code), "out of range: {code}");
        }
    }

    #[test]
    fn test_reset_token_shape() {
        let token = generate_reset_token();
        assert_eq!(token.len(), RESET_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_reset_tokens_are_unique() {
        assert_ne!(generate_reset_token(), generate_reset_token());
    }
}
