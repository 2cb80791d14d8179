//! Field collection.
//!
//! Turns the raw input values into a canonical [`DeploymentRequest`].
//! Canonicalisation (trimming, uppercasing, integer parsing) happens here,
//! at collection time, so the payload is canonical regardless of what
//! validation later rejects.

use slanker_api_types::{DeploymentRequest, SocialMediaUrl, SocialPlatform};

pub const DEFAULT_VESTING_PERCENTAGE: i64 = 10;
pub const DEFAULT_VESTING_DURATION_DAYS: i64 = 30;
pub const DEFAULT_CREATOR_REWARD: i64 = 75;

/// Untouched input values as read from the form.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub description: String,
    pub initial_market_cap: String,
    pub vesting_percentage: String,
    pub vesting_duration_days: String,
    pub creator_reward: String,
    /// One `(platform, url)` pair per visible social row, in row order.
    pub socials: Vec<(String, String)>,
}

/// Build the request payload from raw field values.
///
/// Social rows are kept only when both the platform selection and the URL
/// are non-empty; unknown platform tokens are treated as unselected.
pub fn collect(values: &FieldValues) -> DeploymentRequest {
    let social_media_urls = values
        .socials
        .iter()
        .filter_map(|(platform, url)| {
            let platform = SocialPlatform::parse(platform.trim())?;
            let url = url.trim();
            if url.is_empty() {
                return None;
            }
            Some(SocialMediaUrl {
                platform,
                url: url.to_owned(),
            })
        })
        .collect();

    DeploymentRequest {
        name: values.name.trim().to_owned(),
        symbol: values.symbol.trim().to_uppercase(),
        image: values.image.trim().to_owned(),
        description: values.description.trim().to_owned(),
        initial_market_cap: values.initial_market_cap.trim().to_owned(),
        vesting_percentage: parse_setting(&values.vesting_percentage, DEFAULT_VESTING_PERCENTAGE),
        vesting_duration_days: parse_setting(
            &values.vesting_duration_days,
            DEFAULT_VESTING_DURATION_DAYS,
        ),
        creator_reward: parse_setting(&values.creator_reward, DEFAULT_CREATOR_REWARD),
        social_media_urls,
    }
}

fn parse_setting(raw: &str, default: i64) -> i64 {
    raw.trim().parse().unwrap_or(default)
}

/// Clamp a numeric input against its declared min/max bounds.
/// Absent or unparseable bounds leave that side open.
pub fn clamp_to_range(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut clamped = value;
    if let Some(min) = min {
        if clamped < min {
            clamped = min;
        }
    }
    if let Some(max) = max {
        if clamped > max {
            clamped = max;
        }
    }
    clamped
}

/// Strip everything but letters from a symbol as it is typed, uppercased.
pub fn filter_symbol_input(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FieldValues {
        FieldValues {
            name: "  MyToken ".to_owned(),
            symbol: "myt".to_owned(),
            image: " ipfs://abc ".to_owned(),
            description: "a token".to_owned(),
            initial_market_cap: " 1000 ".to_owned(),
            vesting_percentage: "15".to_owned(),
            vesting_duration_days: "60".to_owned(),
            creator_reward: "50".to_owned(),
            socials: vec![
                ("telegram".to_owned(), "https://t.me/mytoken".to_owned()),
                ("".to_owned(), "https://example.com".to_owned()),
                ("x".to_owned(), "   ".to_owned()),
                ("myspace".to_owned(), "https://myspace.com/x".to_owned()),
            ],
        }
    }

    #[test]
    fn collect_canonicalises_fields() {
        let request = collect(&values());
        assert_eq!(request.name, "MyToken");
        assert_eq!(request.symbol, "MYT");
        assert_eq!(request.image, "ipfs://abc");
        assert_eq!(request.initial_market_cap, "1000");
        assert_eq!(request.vesting_percentage, 15);
        assert_eq!(request.vesting_duration_days, 60);
        assert_eq!(request.creator_reward, 50);
    }

    #[test]
    fn collect_keeps_only_complete_social_rows() {
        let request = collect(&values());
        assert_eq!(request.social_media_urls.len(), 1);
        assert_eq!(request.social_media_urls[0].url, "https://t.me/mytoken");
    }

    #[test]
    fn collect_falls_back_to_default_settings() {
        let mut raw = values();
        raw.vesting_percentage = String::new();
        raw.vesting_duration_days = "abc".to_owned();
        raw.creator_reward = "  ".to_owned();
        let request = collect(&raw);
        assert_eq!(request.vesting_percentage, DEFAULT_VESTING_PERCENTAGE);
        assert_eq!(request.vesting_duration_days, DEFAULT_VESTING_DURATION_DAYS);
        assert_eq!(request.creator_reward, DEFAULT_CREATOR_REWARD);
    }

    #[test]
    fn clamp_respects_declared_bounds() {
        assert_eq!(clamp_to_range(5.0, Some(10.0), Some(100.0)), 10.0);
        assert_eq!(clamp_to_range(250.0, Some(10.0), Some(100.0)), 100.0);
        assert_eq!(clamp_to_range(50.0, Some(10.0), Some(100.0)), 50.0);
        assert_eq!(clamp_to_range(-3.0, None, Some(100.0)), -3.0);
    }

    #[test]
    fn symbol_filter_uppercases_and_drops_non_letters() {
        assert_eq!(filter_symbol_input("my-t0k3n"), "MYTKN");
        assert_eq!(filter_symbol_input("abc"), "ABC");
        assert_eq!(filter_symbol_input("123"), "");
    }
}
