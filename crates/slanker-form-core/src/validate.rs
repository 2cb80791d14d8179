//! Submission validation.
//!
//! Checks run in a fixed order and stop at the first failure; each variant's
//! `Display` string is the toast shown to the user. Validation never touches
//! the network, so a failed check means no request was sent.

use slanker_api_types::DeploymentRequest;
use thiserror::Error;

pub const SYMBOL_MIN_LEN: usize = 3;
pub const SYMBOL_MAX_LEN: usize = 5;
pub const IMAGE_SCHEME: &str = "ipfs://";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Symbol must be 3-5 uppercase letters only")]
    SymbolShape,
    #[error("Image must be an IPFS URL starting with ipfs://")]
    ImageScheme,
    #[error("Initial market cap must be a positive number")]
    MarketCap,
}

/// The input a failed check refers to, so the UI can refocus it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Symbol,
    Image,
    MarketCap,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingRequired => Field::Name,
            ValidationError::SymbolShape => Field::Symbol,
            ValidationError::ImageScheme => Field::Image,
            ValidationError::MarketCap => Field::MarketCap,
        }
    }
}

/// Validate a collected (already canonical) request.
pub fn validate(request: &DeploymentRequest) -> Result<(), ValidationError> {
    if request.name.is_empty()
        || request.symbol.is_empty()
        || request.image.is_empty()
        || request.initial_market_cap.is_empty()
    {
        return Err(ValidationError::MissingRequired);
    }

    if !symbol_is_valid(&request.symbol) {
        return Err(ValidationError::SymbolShape);
    }

    if !request.image.starts_with(IMAGE_SCHEME) {
        return Err(ValidationError::ImageScheme);
    }

    if !market_cap_is_valid(&request.initial_market_cap) {
        return Err(ValidationError::MarketCap);
    }

    Ok(())
}

pub fn symbol_is_valid(symbol: &str) -> bool {
    (SYMBOL_MIN_LEN..=SYMBOL_MAX_LEN).contains(&symbol.len())
        && symbol.chars().all(|c| c.is_ascii_uppercase())
}

fn market_cap_is_valid(raw: &str) -> bool {
    match raw.parse::<f64>() {
        Ok(value) => value.is_finite() && value > 0.0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldValues, collect};

    fn valid_request() -> DeploymentRequest {
        collect(&FieldValues {
            name: "MyToken".to_owned(),
            symbol: "myt".to_owned(),
            image: "ipfs://abc".to_owned(),
            initial_market_cap: "1000".to_owned(),
            ..FieldValues::default()
        })
    }

    #[test]
    fn accepts_a_canonical_request() {
        let request = valid_request();
        assert_eq!(request.symbol, "MYT");
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn missing_required_fields_fail_first() {
        let mut request = valid_request();
        request.name.clear();
        request.symbol = "ab".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn symbol_length_is_bounded() {
        let mut request = valid_request();
        request.symbol = "AB".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::SymbolShape));

        request.symbol = "ABCDEF".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::SymbolShape));

        request.symbol = "ABCDE".to_owned();
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn symbol_must_be_uppercase_letters() {
        let mut request = valid_request();
        request.symbol = "MY1".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::SymbolShape));

        request.symbol = "myt".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::SymbolShape));
    }

    #[test]
    fn image_must_carry_the_ipfs_scheme() {
        let mut request = valid_request();
        request.image = "https://example.com/logo.png".to_owned();
        assert_eq!(validate(&request), Err(ValidationError::ImageScheme));
    }

    #[test]
    fn market_cap_must_be_a_positive_number() {
        let mut request = valid_request();
        for bad in ["abc", "0", "-5", "NaN", "inf"] {
            request.initial_market_cap = bad.to_owned();
            assert_eq!(
                validate(&request),
                Err(ValidationError::MarketCap),
                "expected rejection for {bad:?}"
            );
        }

        request.initial_market_cap = "0.5".to_owned();
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn messages_match_the_user_facing_toasts() {
        assert_eq!(
            ValidationError::SymbolShape.to_string(),
            "Symbol must be 3-5 uppercase letters only"
        );
        assert_eq!(
            ValidationError::ImageScheme.to_string(),
            "Image must be an IPFS URL starting with ipfs://"
        );
    }
}
