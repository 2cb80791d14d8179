use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    X,
    Telegram,
    Discord,
    Github,
    Website,
    Medium,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::X,
        SocialPlatform::Telegram,
        SocialPlatform::Discord,
        SocialPlatform::Github,
        SocialPlatform::Website,
        SocialPlatform::Medium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::X => "x",
            SocialPlatform::Telegram => "telegram",
            SocialPlatform::Discord => "discord",
            SocialPlatform::Github => "github",
            SocialPlatform::Website => "website",
            SocialPlatform::Medium => "medium",
        }
    }

    pub fn parse(value: &str) -> Option<SocialPlatform> {
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
    }

    /// Label shown in the platform dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::X => "\u{1d54f} (Twitter)",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::Discord => "Discord",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Website => "Website",
            SocialPlatform::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialMediaUrl {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Body of `POST /deploy`. `initialMarketCap` stays a string on the wire;
/// the service parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub description: String,
    pub initial_market_cap: String,
    pub vesting_percentage: i64,
    pub vesting_duration_days: i64,
    pub creator_reward: i64,
    pub social_media_urls: Vec<SocialMediaUrl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub basescan_url: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = DeploymentRequest {
            name: "MyToken".to_owned(),
            symbol: "MYT".to_owned(),
            image: "ipfs://abc".to_owned(),
            description: String::new(),
            initial_market_cap: "1000".to_owned(),
            vesting_percentage: 10,
            vesting_duration_days: 30,
            creator_reward: 75,
            social_media_urls: vec![SocialMediaUrl {
                platform: SocialPlatform::Telegram,
                url: "https://t.me/mytoken".to_owned(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["initialMarketCap"], "1000");
        assert_eq!(value["vestingPercentage"], 10);
        assert_eq!(value["vestingDurationDays"], 30);
        assert_eq!(value["creatorReward"], 75);
        assert_eq!(value["socialMediaUrls"][0]["platform"], "telegram");
        assert_eq!(value["socialMediaUrls"][0]["url"], "https://t.me/mytoken");
    }

    #[test]
    fn response_fields_default_when_absent() {
        let response: DeployResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert!(response.address.is_empty());
        assert!(response.basescan_url.is_empty());
        assert!(response.error.is_none());

        let response: DeployResponse =
            serde_json::from_str(r#"{"success":false,"error":"nope"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("nope"));
    }

    #[test]
    fn platform_round_trips_through_lowercase_tokens() {
        for platform in SocialPlatform::ALL {
            assert_eq!(SocialPlatform::parse(platform.as_str()), Some(platform));
        }
        assert_eq!(SocialPlatform::parse("myspace"), None);
    }
}
