use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of marketing-copy categories the service knows how to style.
///
/// Requests carry the raw category name; anything outside this set is still
/// accepted and handled by the generic fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    AdCopy,
    EmailCampaigns,
    SocialMedia,
    BlogPosts,
    ProductDescriptions,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::AdCopy,
        ContentType::EmailCampaigns,
        ContentType::SocialMedia,
        ContentType::BlogPosts,
        ContentType::ProductDescriptions,
    ];

    /// Store key and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::AdCopy => "ad_copy",
            ContentType::EmailCampaigns => "email_campaigns",
            ContentType::SocialMedia => "social_media",
            ContentType::BlogPosts => "blog_posts",
            ContentType::ProductDescriptions => "product_descriptions",
        }
    }

    /// Short human label shown in pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::AdCopy => "Ad Copy",
            ContentType::EmailCampaigns => "Email Campaign",
            ContentType::SocialMedia => "Social Media Post",
            ContentType::BlogPosts => "Blog Post",
            ContentType::ProductDescriptions => "Product Description",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentType(pub String);

impl fmt::Display for UnknownContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content type '{}'", self.0)
    }
}

impl std::error::Error for UnknownContentType {}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_known_type() {
        for ct in ContentType::ALL {
            assert_eq!(ct.as_str().parse::<ContentType>(), Ok(ct));
        }
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        let err = "unknown_type".parse::<ContentType>().unwrap_err();
        assert_eq!(err.0, "unknown_type");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Ad_Copy".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_serde_name_matches_store_key() {
        let json = serde_json::to_string(&ContentType::EmailCampaigns).unwrap();
        assert_eq!(json, "\"email_campaigns\"");
    }
}
