// Demo copy generation.
// Prompt assembly is real; the "model output" is canned copy from `samples`.

pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod samples;
pub mod style_guide;
pub mod tone;
