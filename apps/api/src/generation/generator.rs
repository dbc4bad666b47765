//! Content Generation — orchestrates one demo generation.
//!
//! Flow: normalize request → fetch few-shot examples → build prompt →
//!       select canned copy → estimate usage → persist to the example store.
//!
//! `ContentService::generate` is the error boundary: every failure below it is
//! reported as a `GenerationResult::Failure`, never returned as an `Err`.

use std::collections::BTreeMap;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::generation::prompt_builder::build_prompt;
use crate::generation::style_guide;
use crate::generation::tone::{select_copy, CopySource, ToneFallback, DEFAULT_TONE};
use crate::store::{ExampleStore, StoreError};

/// Used when a request arrives without any usable key points.
pub const DEFAULT_KEY_POINTS: [&str; 2] = ["quality", "value"];

/// Rough words-to-tokens ratio. Not a tokenizer.
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Demo per-token price in dollars.
pub const COST_PER_TOKEN: f64 = 0.000002;

/// Recorded as the `model` of every stored generation.
pub const DEMO_MODEL: &str = "gpt-3.5-turbo-demo";

pub const DEFAULT_AUDIENCE: &str = "general";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Raw category name. Unknown names are served by fallbacks, not rejected.
    pub content_type: String,
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_audience")]
    pub target_audience: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub brand_voice: Option<String>,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

impl GenerationRequest {
    /// The brand voice if it has any non-whitespace content.
    pub fn brand_voice(&self) -> Option<&str> {
        self.brand_voice
            .as_deref()
            .map(str::trim)
            .filter(|voice| !voice.is_empty())
    }

    /// Drops blank key points and falls back to `DEFAULT_KEY_POINTS` if none remain.
    fn normalize_key_points(&mut self) {
        self.key_points = self
            .key_points
            .iter()
            .map(|point| point.trim())
            .filter(|point| !point.is_empty())
            .map(str::to_string)
            .collect();

        if self.key_points.is_empty() {
            self.key_points = DEFAULT_KEY_POINTS.iter().map(|p| p.to_string()).collect();
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedContent {
    pub content: String,
    pub content_type: String,
    pub topic: String,
    pub tone: String,
    pub prompt_used: String,
    pub tokens_used: u64,
    pub estimated_cost: f64,
    pub saved_to_db: bool,
    pub demo_mode: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationFailure {
    pub error: String,
    pub content_type: String,
    pub topic: String,
}

/// The record handed to callers. Serializes flat, with `success` taken from the variant.
#[derive(Debug, Clone)]
pub enum GenerationResult {
    Success(GeneratedContent),
    Failure(GenerationFailure),
}

impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Record<'a, T> {
            success: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            GenerationResult::Success(content) => Record {
                success: true,
                body: content,
            }
            .serialize(serializer),
            GenerationResult::Failure(failure) => Record {
                success: false,
                body: failure,
            }
            .serialize(serializer),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Could not save generated content: {0}")]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageEstimate {
    pub tokens_used: u64,
    pub estimated_cost: f64,
}

/// Word count × 1.3, rounded for the token figure. Cost uses the unrounded value.
pub fn estimate_usage(text: &str) -> UsageEstimate {
    let tokens = text.split_whitespace().count() as f64 * TOKENS_PER_WORD;
    UsageEstimate {
        tokens_used: tokens.round() as u64,
        estimated_cost: tokens * COST_PER_TOKEN,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

pub struct ContentService {
    store: ExampleStore,
    fallback: ToneFallback,
    rng: StdRng,
}

impl ContentService {
    /// Service with an entropy-seeded RNG for tone fallback.
    pub fn new(store: ExampleStore, fallback: ToneFallback) -> Self {
        Self::with_rng(store, fallback, StdRng::from_entropy())
    }

    /// Service with an explicit RNG, for reproducible fallback picks.
    pub fn with_rng(store: ExampleStore, fallback: ToneFallback, rng: StdRng) -> Self {
        Self {
            store,
            fallback,
            rng,
        }
    }

    pub fn store(&self) -> &ExampleStore {
        &self.store
    }

    pub fn fallback(&self) -> ToneFallback {
        self.fallback
    }

    /// Runs one generation. Never fails; errors come back as `GenerationResult::Failure`.
    pub fn generate(&mut self, request: GenerationRequest) -> GenerationResult {
        info!(
            "Generating {} about '{}' (tone={}, audience={})",
            request.content_type, request.topic, request.tone, request.target_audience
        );

        let content_type = request.content_type.clone();
        let topic = request.topic.clone();

        match self.try_generate(request) {
            Ok(generated) => {
                info!(
                    "Generated {} (tokens={}, cost=${:.4})",
                    generated.content_type, generated.tokens_used, generated.estimated_cost
                );
                GenerationResult::Success(generated)
            }
            Err(e) => {
                error!("Generation failed for {content_type}: {e}");
                GenerationResult::Failure(GenerationFailure {
                    error: e.to_string(),
                    content_type,
                    topic,
                })
            }
        }
    }

    fn try_generate(
        &mut self,
        mut request: GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        request.normalize_key_points();

        let style = style_guide::lookup(&request.content_type);
        let examples = style
            .map(|s| self.store.find(&request.content_type, s.examples_needed))
            .unwrap_or(&[]);
        let prompt = build_prompt(&request, style, examples);

        let copy = select_copy(
            &request.content_type,
            &request.tone,
            &request.topic,
            self.fallback,
            &mut self.rng,
        );
        match copy.source {
            CopySource::Exact => {}
            CopySource::FallbackTone(used) => warn!(
                "No '{}' copy for {}, fell back to '{used}' ({})",
                request.tone, request.content_type, self.fallback
            ),
            CopySource::Placeholder => warn!(
                "Unknown content type '{}', returning placeholder copy",
                request.content_type
            ),
        }

        let usage = estimate_usage(&copy.text);

        let metadata = BTreeMap::from([
            ("topic".to_string(), request.topic.clone()),
            ("tone".to_string(), request.tone.clone()),
            ("target_audience".to_string(), request.target_audience.clone()),
            ("generated".to_string(), "true".to_string()),
            ("model".to_string(), DEMO_MODEL.to_string()),
            ("created_at".to_string(), Utc::now().to_rfc3339()),
        ]);
        self.store
            .add(&request.content_type, copy.text.clone(), metadata)?;

        Ok(GeneratedContent {
            content: copy.text,
            content_type: request.content_type,
            topic: request.topic,
            tone: request.tone,
            prompt_used: prompt,
            tokens_used: usage.tokens_used,
            estimated_cost: usage.estimated_cost,
            saved_to_db: true,
            demo_mode: true,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
