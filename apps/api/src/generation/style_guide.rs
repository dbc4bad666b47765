//! Style guides — the fixed rule set and output template for each content type.
//!
//! Rules are listed most important first; the prompt numbers them in this order.

use serde::Serialize;

use crate::models::content_type::ContentType;

#[derive(Debug, Clone, Serialize)]
pub struct StyleGuide {
    pub display_name: &'static str,
    pub rules: &'static [&'static str],
    /// Literal template copied into the prompt's output-format section.
    pub format: &'static str,
    /// How many stored examples to show as few-shot context.
    pub examples_needed: usize,
    /// Short best-practice reminders for the content-type picker.
    pub tips: &'static [&'static str],
}

const AD_COPY: StyleGuide = StyleGuide {
    display_name: "Advertisement Copy",
    rules: &[
        "Maximum 50 words for the main message",
        "Use power words: Discover, Exclusive, Proven, Instant, Guaranteed",
        "Include emotional trigger (fear, joy, FOMO, aspiration)",
        "End with clear call-to-action (CTA)",
        "Benefit-focused, not feature-focused",
        "Use numbers when possible (increases trust)",
    ],
    format: "HEADLINE (7 words max):
[Attention-grabbing hook]

BODY (2-3 sentences):
[Benefit statement with power words]

CTA BUTTON TEXT:
[Action verb] [Benefit]",
    examples_needed: 2,
    tips: &[
        "Lead with the benefit",
        "Use power words: Discover, Proven, Exclusive",
        "Include numbers when possible",
        "End with clear CTA",
    ],
};

const EMAIL_CAMPAIGNS: StyleGuide = StyleGuide {
    display_name: "Email Marketing Campaign",
    rules: &[
        "Subject line under 50 characters (mobile-friendly)",
        "Personalized greeting with [Name] placeholder",
        "One clear message per email (don't confuse)",
        "Single, prominent call-to-action button",
        "Scannable with short paragraphs and bullet points",
        "P.S. line for urgency or bonus",
    ],
    format: "SUBJECT LINE:
[Curiosity or benefit driven]

PREVIEW TEXT:
[Supporting subject line]

BODY:
Hi [Name],

[Opening hook - relate to their problem]

[Solution presentation]

[Social proof or benefit]

[CTA Button]

Best,
[Your Name]

P.S. [Urgency or bonus]",
    examples_needed: 2,
    tips: &[
        "Subject under 50 characters",
        "One message per email",
        "Personalize the greeting",
        "Mobile-friendly formatting",
    ],
};

const SOCIAL_MEDIA: StyleGuide = StyleGuide {
    display_name: "Social Media Post",
    rules: &[
        "Hook in first 3 words (stop the scroll)",
        "Use 2-3 emojis strategically (not randomly)",
        "Include 3-5 relevant hashtags",
        "Ask a question to drive engagement",
        "Keep under 150 words for optimal engagement",
        "Include visual description if needed",
    ],
    format: "[HOOK - stop the scroll]

[Body text with emoji]

[Engagement question]

[Hashtags]",
    examples_needed: 2,
    tips: &[
        "Hook in first 3 words",
        "Use 2-3 emojis max",
        "Ask questions to engage",
        "3-5 relevant hashtags",
    ],
};

const BLOG_POSTS: StyleGuide = StyleGuide {
    display_name: "Blog Article",
    rules: &[
        "Catchy H1 headline with number or power word",
        "Introduction with problem statement (relatable)",
        "3-5 H2 subheadings for scannability",
        "Include actionable tips, not just theory",
        "Conclusion with key takeaways",
        "End with engagement question",
    ],
    format: "# [Number] [Power Word] Ways to [Benefit]

## Introduction
[Hook with problem statement]
[Why this matters]
[What they'll learn]

## 1. [First Tip]
[Explanation with example]

## 2. [Second Tip]
[Explanation with example]

## Conclusion
[Summary of key points]
[Call to action]

[Engagement question]",
    examples_needed: 2,
    tips: &[
        "Catchy headline with number",
        "Problem in introduction",
        "Scannable with headers",
        "Actionable conclusion",
    ],
};

const PRODUCT_DESCRIPTIONS: StyleGuide = StyleGuide {
    display_name: "Product Description",
    rules: &[
        "Lead with benefit, not feature (so what?)",
        "Use sensory words (imagine, feel, experience)",
        "Include social proof if possible",
        "Specify exactly who it's for",
        "Address objections subtly",
        "Make the CTA low-risk",
    ],
    format: "[Benefit statement - the dream]

[Feature] → [Benefit]
[Feature] → [Benefit]
[Feature] → [Benefit]

[Social proof]

Perfect for: [Specific persona]

[Low-risk CTA]",
    examples_needed: 2,
    tips: &[
        "Benefit first, feature second",
        "Use sensory words",
        "Include social proof",
        "Specify who it's for",
    ],
};

/// Returns the style guide for a content type.
pub fn style_guide(content_type: ContentType) -> &'static StyleGuide {
    match content_type {
        ContentType::AdCopy => &AD_COPY,
        ContentType::EmailCampaigns => &EMAIL_CAMPAIGNS,
        ContentType::SocialMedia => &SOCIAL_MEDIA,
        ContentType::BlogPosts => &BLOG_POSTS,
        ContentType::ProductDescriptions => &PRODUCT_DESCRIPTIONS,
    }
}

/// Looks up a style guide by raw category name. `None` for unknown categories.
pub fn lookup(content_type: &str) -> Option<&'static StyleGuide> {
    content_type.parse::<ContentType>().ok().map(style_guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_rules_and_format() {
        for ct in ContentType::ALL {
            let guide = style_guide(ct);
            assert!(!guide.rules.is_empty(), "{ct} has no rules");
            assert!(!guide.format.is_empty(), "{ct} has no format");
            assert!(guide.examples_needed > 0);
        }
    }

    #[test]
    fn test_ad_copy_rule_order_is_fixed() {
        let guide = style_guide(ContentType::AdCopy);
        assert_eq!(guide.rules[0], "Maximum 50 words for the main message");
        assert_eq!(guide.rules[3], "End with clear call-to-action (CTA)");
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            lookup("blog_posts").map(|g| g.display_name),
            Some("Blog Article")
        );
        assert!(lookup("unknown_type").is_none());
    }
}
