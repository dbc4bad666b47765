//! Prompt Builder — assembles the few-shot instruction for one generation request.
//!
//! Section order is fixed: persona/task, brand voice (optional), numbered rules,
//! examples (optional) followed by the originality instruction, output format,
//! closing instructions ending in the response sentinel.

use crate::generation::generator::GenerationRequest;
use crate::generation::prompts::{
    render, BRAND_VOICE_HEADER, CLOSING_TEMPLATE, EXAMPLES_HEADER, EXAMPLE_DELIMITER,
    EXAMPLE_LABEL_TEMPLATE, FALLBACK_PROMPT_TEMPLATE, ORIGINALITY_INSTRUCTION,
    OUTPUT_FORMAT_HEADER, PERSONA_TEMPLATE, RESPONSE_SENTINEL, RULES_HEADER,
};
use crate::generation::style_guide::StyleGuide;
use crate::models::example::Example;

/// Builds the prompt for `request`. Pure: same inputs, same string.
///
/// `style` is `None` for content types outside the known set, which yields a
/// one-line fallback prompt instead of an error.
pub fn build_prompt(
    request: &GenerationRequest,
    style: Option<&StyleGuide>,
    examples: &[Example],
) -> String {
    let Some(style) = style else {
        return render(
            FALLBACK_PROMPT_TEMPLATE,
            &[
                ("content_type", request.content_type.as_str()),
                ("topic", request.topic.as_str()),
            ],
        );
    };

    let key_points = request.key_points.join(", ");

    let mut prompt = render(
        PERSONA_TEMPLATE,
        &[
            ("tone", request.tone.as_str()),
            ("display_name", style.display_name),
            ("topic", request.topic.as_str()),
            ("target_audience", request.target_audience.as_str()),
            ("key_points", key_points.as_str()),
        ],
    );

    if let Some(brand_voice) = request.brand_voice() {
        prompt.push_str(&format!("\n{BRAND_VOICE_HEADER} {brand_voice}\n"));
    }

    prompt.push_str(RULES_HEADER);
    for (i, rule) in style.rules.iter().enumerate() {
        prompt.push_str(&format!("{}. {rule}\n", i + 1));
    }

    if !examples.is_empty() {
        prompt.push_str(&format!("\n{EXAMPLE_DELIMITER}\n{EXAMPLES_HEADER}\n{EXAMPLE_DELIMITER}\n"));
        for (i, example) in examples.iter().enumerate() {
            let n = (i + 1).to_string();
            let label = render(EXAMPLE_LABEL_TEMPLATE, &[("n", n.as_str())]);
            prompt.push_str(&format!("\n{label}\n{}\n", example.content));
        }
        prompt.push_str(&format!(
            "\n{EXAMPLE_DELIMITER}\n{ORIGINALITY_INSTRUCTION}\n{EXAMPLE_DELIMITER}\n"
        ));
    }

    prompt.push_str(OUTPUT_FORMAT_HEADER);
    prompt.push_str(style.format);

    prompt.push_str(&render(
        CLOSING_TEMPLATE,
        &[
            ("tone", request.tone.as_str()),
            ("display_name", style.display_name),
            ("topic", request.topic.as_str()),
            ("sentinel", RESPONSE_SENTINEL),
        ],
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::style_guide::style_guide;
    use crate::models::content_type::ContentType;
    use std::collections::BTreeMap;

    fn request(content_type: &str, brand_voice: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            content_type: content_type.to_string(),
            topic: "vegan protein powder".to_string(),
            tone: "energetic".to_string(),
            target_audience: "fitness enthusiasts".to_string(),
            key_points: vec![
                "plant-based".to_string(),
                "20g protein".to_string(),
                "tastes great".to_string(),
            ],
            brand_voice: brand_voice.map(str::to_string),
        }
    }

    fn examples(texts: &[&str]) -> Vec<Example> {
        texts
            .iter()
            .map(|t| Example::new(*t, BTreeMap::new()))
            .collect()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing section: {needle}"))
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let style = style_guide(ContentType::AdCopy);
        let prompt = build_prompt(
            &request("ad_copy", Some("No exclamation marks.")),
            Some(style),
            &examples(&["Example one", "Example two"]),
        );

        let order = [
            "TASK: Create Advertisement Copy about vegan protein powder",
            BRAND_VOICE_HEADER,
            "STRICT RULES YOU MUST FOLLOW:",
            "--- EXAMPLE 1 ---",
            ORIGINALITY_INSTRUCTION,
            "OUTPUT FORMAT (Follow this exactly):",
            "ADDITIONAL INSTRUCTIONS:",
        ];
        let positions: Vec<_> = order.iter().map(|s| position(&prompt, s)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order: {positions:?}"
        );
        assert!(prompt.ends_with(RESPONSE_SENTINEL));
    }

    #[test]
    fn test_persona_restates_request() {
        let prompt = build_prompt(
            &request("ad_copy", None),
            Some(style_guide(ContentType::AdCopy)),
            &[],
        );
        assert!(prompt.contains("You write in a energetic tone."));
        assert!(prompt.contains("TARGET AUDIENCE: fitness enthusiasts"));
        assert!(prompt.contains("KEY POINTS TO EMPHASIZE: plant-based, 20g protein, tastes great"));
    }

    #[test]
    fn test_brand_voice_block_absent_when_missing_or_blank() {
        let style = style_guide(ContentType::SocialMedia);
        for voice in [None, Some(""), Some("   ")] {
            let prompt = build_prompt(&request("social_media", voice), Some(style), &[]);
            assert!(
                !prompt.contains(BRAND_VOICE_HEADER),
                "brand voice header must be absent for {voice:?}"
            );
        }
    }

    #[test]
    fn test_brand_voice_block_present_when_set() {
        let prompt = build_prompt(
            &request("social_media", Some("Short sentences only.")),
            Some(style_guide(ContentType::SocialMedia)),
            &[],
        );
        assert!(prompt.contains("BRAND VOICE GUIDELINES: Short sentences only.\n"));
    }

    #[test]
    fn test_rules_numbered_in_table_order() {
        let style = style_guide(ContentType::EmailCampaigns);
        let prompt = build_prompt(&request("email_campaigns", None), Some(style), &[]);

        for (i, rule) in style.rules.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {rule}\n", i + 1)));
        }
        assert!(
            position(&prompt, "1. Subject line") < position(&prompt, "6. P.S. line"),
            "rule order must follow the table"
        );
    }

    #[test]
    fn test_no_examples_omits_few_shot_block() {
        let prompt = build_prompt(
            &request("blog_posts", None),
            Some(style_guide(ContentType::BlogPosts)),
            &[],
        );
        assert!(!prompt.contains(EXAMPLES_HEADER));
        assert!(!prompt.contains(ORIGINALITY_INSTRUCTION));
        assert!(!prompt.contains(EXAMPLE_DELIMITER));
    }

    #[test]
    fn test_examples_numbered_and_precede_originality_instruction() {
        let prompt = build_prompt(
            &request("ad_copy", None),
            Some(style_guide(ContentType::AdCopy)),
            &examples(&["Run faster.", "Wake up happier."]),
        );

        let first = position(&prompt, "--- EXAMPLE 1 ---\nRun faster.\n");
        let second = position(&prompt, "--- EXAMPLE 2 ---\nWake up happier.\n");
        let instruction = position(&prompt, ORIGINALITY_INSTRUCTION);
        assert!(first < second && second < instruction);
        assert!(!prompt.contains("--- EXAMPLE 3 ---"));
    }

    #[test]
    fn test_output_format_is_literal() {
        let style = style_guide(ContentType::ProductDescriptions);
        let prompt = build_prompt(&request("product_descriptions", None), Some(style), &[]);
        assert!(prompt.contains(&format!("{OUTPUT_FORMAT_HEADER}{}", style.format)));
    }

    #[test]
    fn test_closing_restates_tone_and_topic() {
        let prompt = build_prompt(
            &request("ad_copy", None),
            Some(style_guide(ContentType::AdCopy)),
            &[],
        );
        assert!(prompt.contains("• The content should feel energetic"));
        assert!(prompt.contains("Now create the Advertisement Copy for: vegan protein powder"));
    }

    #[test]
    fn test_unknown_type_gets_one_line_fallback() {
        let prompt = build_prompt(&request("unknown_type", Some("ignored")), None, &[]);
        assert_eq!(prompt, "Write unknown_type about vegan protein powder");
    }

    #[test]
    fn test_build_is_deterministic() {
        let style = style_guide(ContentType::AdCopy);
        let req = request("ad_copy", Some("Calm."));
        let ex = examples(&["A", "B"]);
        assert_eq!(
            build_prompt(&req, Some(style), &ex),
            build_prompt(&req, Some(style), &ex)
        );
    }

    #[test]
    fn test_braces_in_user_text_are_verbatim() {
        let mut req = request("ad_copy", None);
        req.topic = "{tone} mugs".to_string();
        let prompt = build_prompt(&req, Some(style_guide(ContentType::AdCopy)), &[]);
        assert!(prompt.contains("TASK: Create Advertisement Copy about {tone} mugs"));
    }
}
