use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::io::{read_document, read_pdf_document};
use crate::llm::scenario_prompts::{ANALYZE_HTML, ANALYZE_REQUIREMENTS, STRICT_SCENARIO};
use crate::llm::{ModelClient, ModelConfig};
use crate::pipeline::{execute_two_stage, TwoStageConfig};

/// Configuration for scenario generation
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Character budget applied to the source document
    pub max_source_chars: usize,
    /// Draft and refine model settings
    pub pipeline: TwoStageConfig,
}

impl ScenarioConfig {
    /// Defaults for the HTML-structure source.
    pub fn for_html() -> Self {
        Self {
            max_source_chars: 3000,
            pipeline: TwoStageConfig::new(
                ModelConfig::new("gpt-oss:120b-cloud", 0.3),
                ModelConfig::new("deepseek-v3.1:671b-cloud", 0.2),
            ),
        }
    }

    /// Defaults for the PDF-requirements source.
    pub fn for_pdf() -> Self {
        Self {
            max_source_chars: 2000,
            ..Self::for_html()
        }
    }
}

/// Generate Gherkin scenarios from an HTML structure dump.
///
/// Draft stage extracts behavioral intent from the markup; refine stage
/// produces strict Gherkin under the placeholder-credential contract.
pub async fn generate_from_html(
    client: &dyn ModelClient,
    input: &Path,
    config: &ScenarioConfig,
) -> Result<String> {
    info!("Reading HTML structure from {:?}", input);
    let document = read_document(input, config.max_source_chars)?;

    let draft_prompt = ANALYZE_HTML.render(&[("html", document.content())])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &STRICT_SCENARIO,
        "behavior",
        &[],
        &config.pipeline,
    )
    .await?;

    Ok(outcome.artifact)
}

/// Generate Gherkin scenarios from a PDF requirements document.
pub async fn generate_from_pdf(
    client: &dyn ModelClient,
    input: &Path,
    config: &ScenarioConfig,
) -> Result<String> {
    info!("Extracting requirements text from {:?}", input);
    let document = read_pdf_document(input, config.max_source_chars)?;

    let draft_prompt = ANALYZE_REQUIREMENTS.render(&[("requirements", document.content())])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &STRICT_SCENARIO,
        "behavior",
        &[],
        &config.pipeline,
    )
    .await?;

    Ok(outcome.artifact)
}
