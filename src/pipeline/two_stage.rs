use anyhow::Result;
use tracing::info;

use crate::llm::{Cleanup, ModelClient, ModelConfig};
use crate::models::PromptTemplate;

/// Configuration for a two-stage generation run.
#[derive(Debug, Clone)]
pub struct TwoStageConfig {
    /// Model for the draft (extraction/normalization) stage
    pub draft: ModelConfig,
    /// Model for the refine (strict-format) stage
    pub refine: ModelConfig,
    /// Optional denylist cleanup applied to the refine output
    pub cleanup: Option<Cleanup>,
}

impl TwoStageConfig {
    pub fn new(draft: ModelConfig, refine: ModelConfig) -> Self {
        Self {
            draft,
            refine,
            cleanup: None,
        }
    }

    pub fn with_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = Some(cleanup);
        self
    }
}

/// Result of a two-stage generation run.
#[derive(Debug)]
pub struct TwoStageOutcome {
    /// Trimmed draft-stage response
    pub draft_text: String,
    /// Final artifact text (refine response, cleaned and trimmed)
    pub artifact: String,
}

/// Execute the two-stage pipeline.
///
/// 1. Send the pre-rendered draft prompt to the draft model.
/// 2. Render the refine template with the draft text bound to `draft_slot`
///    (plus any extra variables such as a class name).
/// 3. Send the rendered prompt to the refine model.
/// 4. Apply the optional cleanup and return both texts.
///
/// The artifact is always derived from the second response. Either call
/// failing aborts the run; there are no retries and nothing is written here.
pub async fn execute_two_stage(
    client: &dyn ModelClient,
    draft_prompt: &str,
    refine_template: &PromptTemplate,
    draft_slot: &str,
    extra_vars: &[(&str, &str)],
    config: &TwoStageConfig,
) -> Result<TwoStageOutcome> {
    info!(
        "Draft stage: model={}, temperature={}",
        config.draft.model, config.draft.temperature
    );
    let draft_text = client
        .complete(&config.draft, draft_prompt)
        .await?
        .trim()
        .to_string();

    let mut values: Vec<(&str, &str)> = Vec::with_capacity(extra_vars.len() + 1);
    values.push((draft_slot, draft_text.as_str()));
    values.extend_from_slice(extra_vars);
    let refine_prompt = refine_template.render(&values)?;

    info!(
        "Refine stage: model={}, temperature={}",
        config.refine.model, config.refine.temperature
    );
    let refined = client.complete(&config.refine, &refine_prompt).await?;

    let artifact = match &config.cleanup {
        Some(cleanup) => cleanup.scrub(&refined),
        None => refined,
    }
    .trim()
    .to_string();

    Ok(TwoStageOutcome {
        draft_text,
        artifact,
    })
}
