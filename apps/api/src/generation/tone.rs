//! Tone handling — picks the canned copy for a (content type, tone) pair.
//!
//! An exact tone match always wins. When the tone is missing for a known content
//! type, the configured `ToneFallback` decides which variant to use. Unknown
//! content types get a placeholder that names the type, tone and topic.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generation::prompts::render;
use crate::generation::samples::{sample_for, variants};
use crate::models::content_type::ContentType;

/// Tones offered by the content-type picker. Requests may use any string.
pub const TONE_OPTIONS: &[&str] = &[
    "professional",
    "friendly",
    "luxurious",
    "urgent",
    "playful",
    "inspirational",
    "authoritative",
    "empathetic",
];

pub const DEFAULT_TONE: &str = "professional";

/// Replace: {content_type}, {tone}, {topic}
const PLACEHOLDER_TEMPLATE: &str = "[Demo content for {content_type} with {tone} tone]

This is sample marketing content. In the real version, a generative model would write this based on your topic: {topic}";

/// What to do when a known content type has no copy for the requested tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneFallback {
    /// Uniform choice among the type's variants. Not reproducible unless the RNG is seeded.
    #[default]
    Random,
    /// Always the first variant listed for the type.
    First,
}

impl FromStr for ToneFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ToneFallback::Random),
            "first" => Ok(ToneFallback::First),
            other => Err(format!("unknown tone fallback '{other}' (expected random|first)")),
        }
    }
}

impl fmt::Display for ToneFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneFallback::Random => f.write_str("random"),
            ToneFallback::First => f.write_str("first"),
        }
    }
}

/// How the returned copy was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    Exact,
    /// Tone missing; a variant with this tone was used instead.
    FallbackTone(&'static str),
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct SelectedCopy {
    pub text: String,
    pub source: CopySource,
}

/// Selects the canned copy for a request.
pub fn select_copy<R: Rng + ?Sized>(
    content_type: &str,
    tone: &str,
    topic: &str,
    fallback: ToneFallback,
    rng: &mut R,
) -> SelectedCopy {
    let known = content_type.parse::<ContentType>().ok();

    if let Some(ct) = known {
        if let Some(text) = sample_for(ct, tone) {
            return SelectedCopy {
                text: text.to_string(),
                source: CopySource::Exact,
            };
        }

        let available = variants(ct);
        let chosen = match fallback {
            ToneFallback::Random => available.choose(rng),
            ToneFallback::First => available.first(),
        };
        if let Some(variant) = chosen {
            return SelectedCopy {
                text: variant.content.to_string(),
                source: CopySource::FallbackTone(variant.tone),
            };
        }
    }

    SelectedCopy {
        text: render(
            PLACEHOLDER_TEMPLATE,
            &[("content_type", content_type), ("tone", tone), ("topic", topic)],
        ),
        source: CopySource::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_exact_tone_wins_regardless_of_policy() {
        for policy in [ToneFallback::Random, ToneFallback::First] {
            let copy = select_copy("ad_copy", "warm", "coffee", policy, &mut rng());
            assert_eq!(copy.source, CopySource::Exact);
            assert_eq!(
                copy.text,
                sample_for(ContentType::AdCopy, "warm").unwrap()
            );
        }
    }

    #[test]
    fn test_random_fallback_is_member_of_variant_set() {
        let allowed: Vec<_> = variants(ContentType::SocialMedia)
            .iter()
            .map(|v| v.content)
            .collect();
        let mut rng = rng();
        for _ in 0..50 {
            let copy = select_copy(
                "social_media",
                "obscure_tone",
                "coffee",
                ToneFallback::Random,
                &mut rng,
            );
            assert!(matches!(copy.source, CopySource::FallbackTone(_)));
            assert!(allowed.contains(&copy.text.as_str()));
        }
    }

    #[test]
    fn test_random_fallback_reproducible_with_same_seed() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| {
                    select_copy("blog_posts", "sarcastic", "x", ToneFallback::Random, &mut rng).text
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn test_first_fallback_is_deterministic() {
        let copy = select_copy(
            "email_campaigns",
            "obscure_tone",
            "coffee",
            ToneFallback::First,
            &mut rng(),
        );
        assert_eq!(copy.source, CopySource::FallbackTone("warm"));
        assert_eq!(
            copy.text,
            variants(ContentType::EmailCampaigns)[0].content
        );
    }

    #[test]
    fn test_unknown_type_gets_placeholder_naming_topic() {
        let copy = select_copy(
            "unknown_type",
            "warm",
            "organic coffee subscription",
            ToneFallback::Random,
            &mut rng(),
        );
        assert_eq!(copy.source, CopySource::Placeholder);
        assert!(copy.text.starts_with("[Demo content for unknown_type with warm tone]"));
        assert!(copy.text.ends_with("organic coffee subscription"));
    }

    #[test]
    fn test_fallback_policy_parses() {
        assert_eq!("random".parse::<ToneFallback>(), Ok(ToneFallback::Random));
        assert_eq!(" First ".parse::<ToneFallback>(), Ok(ToneFallback::First));
        assert!("sometimes".parse::<ToneFallback>().is_err());
    }

    #[test]
    fn test_default_tone_is_offered() {
        assert!(TONE_OPTIONS.contains(&DEFAULT_TONE));
    }
}
