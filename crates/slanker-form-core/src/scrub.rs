//! Sensitive-value scrubbing.
//!
//! Classifies which inputs count as sensitive and wipes in-memory copies of
//! their values. This is a mitigation, not a guarantee: the page's editable
//! state and the allocator may retain earlier copies the app cannot reach.

use zeroize::Zeroize;

/// Number of overwrite passes applied to a sensitive input's value before
/// it is cleared.
pub const OVERWRITE_PASSES: usize = 10;

/// An input is sensitive when it is a password field or its name points at
/// key material.
pub fn is_sensitive(input_type: &str, name: &str) -> bool {
    input_type.eq_ignore_ascii_case("password") || name.to_ascii_lowercase().contains("key")
}

/// Zero and empty an in-memory copy of a field value.
pub fn wipe(value: &mut String) {
    value.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_inputs_are_sensitive() {
        assert!(is_sensitive("password", "passphrase"));
        assert!(is_sensitive("PASSWORD", "anything"));
    }

    #[test]
    fn key_named_inputs_are_sensitive() {
        assert!(is_sensitive("text", "apiKey"));
        assert!(is_sensitive("text", "private_key"));
        assert!(!is_sensitive("text", "tokenName"));
        assert!(!is_sensitive("url", "tokenImage"));
    }

    #[test]
    fn wipe_empties_the_value() {
        let mut value = "hunter2".to_owned();
        wipe(&mut value);
        assert!(value.is_empty());
    }
}
