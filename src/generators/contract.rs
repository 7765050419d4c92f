use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::io::read_document;
use crate::llm::contract_prompts::{STYLE_EXTRACTION, UNIVERSAL_SCENARIO_PROMPT};
use crate::llm::{ModelClient, ModelConfig};
use crate::pipeline::{execute_two_stage, TwoStageConfig};

/// Configuration for style-contract extraction
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// Character budget applied to the existing-scenarios document
    pub max_source_chars: usize,
    /// Draft and refine model settings
    pub pipeline: TwoStageConfig,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            max_source_chars: 4000,
            pipeline: TwoStageConfig::new(
                ModelConfig::new("gpt-oss:120b-cloud", 0.2),
                ModelConfig::new("deepseek-v3.1:671b-cloud", 0.1),
            ),
        }
    }
}

/// The two artifacts this task produces.
///
/// This is the one task where the draft output is itself an artifact: the
/// extracted style contract is worth keeping alongside the universal prompt
/// built from it. Both are returned together and written only after both
/// stages have succeeded.
#[derive(Debug)]
pub struct ContractArtifacts {
    /// Stage-1 output: the strict reusable style contract
    pub style_contract: String,
    /// Stage-2 output: the universal scenario-generation prompt
    pub universal_prompt: String,
}

/// Extract a BDD style contract from existing scenarios and build a universal
/// scenario prompt that enforces it.
pub async fn generate_contract(
    client: &dyn ModelClient,
    input: &Path,
    config: &ContractConfig,
) -> Result<ContractArtifacts> {
    info!("Reading existing scenarios from {:?}", input);
    let document = read_document(input, config.max_source_chars)?;

    let draft_prompt = STYLE_EXTRACTION.render(&[("scenarios", document.content())])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &UNIVERSAL_SCENARIO_PROMPT,
        "style_rules",
        &[],
        &config.pipeline,
    )
    .await?;

    Ok(ContractArtifacts {
        style_contract: outcome.draft_text,
        universal_prompt: outcome.artifact,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::io::InputError;

    use super::*;

    struct StubClient {
        calls: Mutex<usize>,
        replies: Vec<String>,
    }

    impl StubClient {
        fn new(replies: &[&str]) -> Self {
            Self {
                calls: Mutex::new(0),
                replies: replies.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl ModelClient for StubClient {
        async fn complete(&self, _config: &ModelConfig, _prompt: &str) -> Result<String> {
            let mut calls = self.calls.lock().unwrap();
            let index = *calls;
            *calls += 1;
            self.replies
                .get(index)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("unexpected extra model call"))
        }
    }

    #[tokio::test]
    async fn test_both_artifacts_returned() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ExistingBDD.txt");
        std::fs::write(&input, "Scenario: valid login").unwrap();

        let client = StubClient::new(&["- One action per step", "UNIVERSAL PROMPT TEXT"]);
        let artifacts = generate_contract(&client, &input, &ContractConfig::default())
            .await
            .unwrap();

        assert_eq!(artifacts.style_contract, "- One action per step");
        assert_eq!(artifacts.universal_prompt, "UNIVERSAL PROMPT TEXT");
    }

    #[tokio::test]
    async fn test_missing_input_invokes_no_model() {
        let dir = tempfile::tempdir().unwrap();
        let client = StubClient::new(&[]);

        let err = generate_contract(
            &client,
            &dir.path().join("ExistingBDD.txt"),
            &ContractConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(*client.calls.lock().unwrap(), 0);
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Missing(_))
        ));
    }
}
