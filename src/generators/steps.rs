use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::io::read_document;
use crate::llm::cleanup::{Cleanup, STEPS_DENYLIST};
use crate::llm::steps_prompts::{
    ANALYZE_FEATURE_POM, ANALYZE_STEPS, GENERATE_STEPS, UNIVERSAL_STEPS_PROMPT,
};
use crate::llm::{ModelClient, ModelConfig};
use crate::pipeline::{execute_two_stage, TwoStageConfig};

/// Configuration for step-definition generation
#[derive(Debug, Clone)]
pub struct StepsConfig {
    /// Character budget applied to the feature file
    pub max_feature_chars: usize,
    /// Character budget applied to the page-object file
    pub max_pom_chars: usize,
    /// Draft and refine model settings
    pub pipeline: TwoStageConfig,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            max_feature_chars: 5000,
            max_pom_chars: 5000,
            pipeline: TwoStageConfig::new(
                ModelConfig::new("gpt-oss:120b-cloud", 0.3),
                ModelConfig::new("deepseek-v3.1:671b-cloud", 0.1),
            )
            .with_cleanup(Cleanup::new(STEPS_DENYLIST)),
        }
    }
}

/// Generate framework-compliant step definitions from a feature file and an
/// existing page object.
///
/// Both inputs are loaded (and existence-checked) before any model call.
/// Draft stage maps step intents to available page-object methods; refine
/// stage emits TypeScript under the framework contract.
pub async fn generate_step_definitions(
    client: &dyn ModelClient,
    feature_path: &Path,
    pom_path: &Path,
    config: &StepsConfig,
) -> Result<String> {
    info!("Loading feature from {:?}", feature_path);
    let feature = read_document(feature_path, config.max_feature_chars)?;
    info!("Loading page object from {:?}", pom_path);
    let pom = read_document(pom_path, config.max_pom_chars)?;

    let draft_prompt = ANALYZE_FEATURE_POM.render(&[
        ("feature", feature.content()),
        ("pom", pom.content()),
    ])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &GENERATE_STEPS,
        "analysis",
        &[],
        &config.pipeline,
    )
    .await?;

    Ok(outcome.artifact)
}

/// Configuration for universal-steps-prompt generation
#[derive(Debug, Clone)]
pub struct UniversalStepsConfig {
    /// Character budget applied to the existing-steps document
    pub max_source_chars: usize,
    /// Draft and refine model settings
    pub pipeline: TwoStageConfig,
}

impl Default for UniversalStepsConfig {
    fn default() -> Self {
        Self {
            max_source_chars: 4000,
            pipeline: TwoStageConfig::new(
                ModelConfig::new("gpt-oss:120b-cloud", 0.3),
                ModelConfig::new("deepseek-v3.1:671b-cloud", 0.15),
            ),
        }
    }
}

/// Distill existing step definitions into a reusable step-generation prompt.
pub async fn generate_universal_steps_prompt(
    client: &dyn ModelClient,
    input: &Path,
    config: &UniversalStepsConfig,
) -> Result<String> {
    info!("Reading existing steps from {:?}", input);
    let document = read_document(input, config.max_source_chars)?;

    let draft_prompt = ANALYZE_STEPS.render(&[("steps", document.content())])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &UNIVERSAL_STEPS_PROMPT,
        "patterns",
        &[],
        &config.pipeline,
    )
    .await?;

    Ok(outcome.artifact)
}
