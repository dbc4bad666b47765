// Literal prompt fragments for copy generation.
// Placeholders in `{name}` form are filled by `render`, never by chained `replace`,
// so user text containing braces is inserted verbatim.

/// Persona and task framing. Replace: {tone}, {display_name}, {topic},
/// {target_audience}, {key_points}
pub const PERSONA_TEMPLATE: &str = "You are an elite marketing copywriter with 20 years of experience.
You've written for Fortune 500 companies and won multiple advertising awards.
Your copy converts readers into customers. You write in a {tone} tone.

TASK: Create {display_name} about {topic}

TARGET AUDIENCE: {target_audience}
TONE: {tone}
KEY POINTS TO EMPHASIZE: {key_points}
";

/// Only emitted when a brand voice is supplied.
pub const BRAND_VOICE_HEADER: &str = "BRAND VOICE GUIDELINES:";

pub const RULES_HEADER: &str = "\nSTRICT RULES YOU MUST FOLLOW:\n";

pub const EXAMPLE_DELIMITER: &str =
    "============================================================";

pub const EXAMPLES_HEADER: &str = "EXAMPLES OF EXCELLENT WORK (Study these patterns):";

/// Replace: {n}
pub const EXAMPLE_LABEL_TEMPLATE: &str = "--- EXAMPLE {n} ---";

/// Follows the examples. Showing the pattern first and then asking for
/// originality is what makes this a few-shot prompt.
pub const ORIGINALITY_INSTRUCTION: &str =
    "NOTICE THE PATTERNS ABOVE. NOW CREATE SOMETHING ORIGINAL.";

pub const OUTPUT_FORMAT_HEADER: &str = "\nOUTPUT FORMAT (Follow this exactly):\n";

/// Marks where the generated answer begins.
pub const RESPONSE_SENTINEL: &str = "YOUR RESPONSE:";

/// Closing block. Replace: {tone}, {display_name}, {topic}, {sentinel}
pub const CLOSING_TEMPLATE: &str = "

ADDITIONAL INSTRUCTIONS:
• Be original - do not copy the examples word for word
• Focus on benefits, not just features
• Make it sound human, not robotic
• Ensure every word earns its place
• The content should feel {tone}

Now create the {display_name} for: {topic}

{sentinel}";

/// Used when the content type has no style guide. Replace: {content_type}, {topic}
pub const FALLBACK_PROMPT_TEMPLATE: &str = "Write {content_type} about {topic}";

/// Fills `{name}` placeholders in a single pass over `template`.
///
/// Substituted values are not rescanned. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
