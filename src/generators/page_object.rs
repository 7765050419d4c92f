use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::io::read_document;
use crate::llm::cleanup::Cleanup;
use crate::llm::pom_prompts::{ANALYZE_PAGE, GENERATE_POM};
use crate::llm::{ModelClient, ModelConfig};
use crate::pipeline::{execute_two_stage, TwoStageConfig};

/// How the page source is phrased, which the refine prompt is told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Raw markup
    Html,
    /// Prose description of the page
    Description,
}

impl PageMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML mode",
            Self::Description => "Description mode",
        }
    }
}

/// Decide the mode from the page content itself.
pub fn detect_mode(content: &str) -> PageMode {
    if content.contains('<') && content.contains('>') {
        PageMode::Html
    } else {
        PageMode::Description
    }
}

/// Derive a page-object class name from the input file stem.
///
/// `login.txt` becomes `PageLogin`, `user profile.txt` becomes
/// `PageUserProfile`. Falls back to `PageGenerated` when the stem has no
/// usable characters.
pub fn infer_class_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let words: Vec<String> = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "PageGenerated".to_string()
    } else {
        format!("Page{}", words.concat())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Configuration for page-object generation
#[derive(Debug, Clone)]
pub struct PageObjectConfig {
    /// Character budget applied to the page description
    pub max_source_chars: usize,
    /// Draft and refine model settings
    pub pipeline: TwoStageConfig,
}

impl Default for PageObjectConfig {
    fn default() -> Self {
        Self {
            max_source_chars: 3000,
            pipeline: TwoStageConfig::new(
                ModelConfig::new("gpt-oss:120b-cloud", 0.3),
                ModelConfig::new("deepseek-v3.1:671b-cloud", 0.15),
            )
            .with_cleanup(Cleanup::default()),
        }
    }
}

/// Generate a Playwright page-object class from a page description or raw
/// HTML.
///
/// Draft stage inventories the page's elements and actions; refine stage
/// emits one strict TypeScript POM class named after the input file (or the
/// explicit override).
pub async fn generate_page_object(
    client: &dyn ModelClient,
    input: &Path,
    class_name: Option<&str>,
    config: &PageObjectConfig,
) -> Result<String> {
    info!("Reading page content from {:?}", input);
    let document = read_document(input, config.max_source_chars)?;

    let class_name = match class_name {
        Some(name) => name.to_string(),
        None => infer_class_name(input),
    };
    let mode = detect_mode(document.content());
    info!("Generating {} ({})", class_name, mode.label());

    let draft_prompt = ANALYZE_PAGE.render(&[("page", document.content())])?;
    let outcome = execute_two_stage(
        client,
        &draft_prompt,
        &GENERATE_POM,
        "inventory",
        &[("class_name", class_name.as_str()), ("mode", mode.label())],
        &config.pipeline,
    )
    .await?;

    Ok(outcome.artifact)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[test]
    fn test_infer_class_name_simple() {
        assert_eq!(infer_class_name(&PathBuf::from("./Docs/login.txt")), "PageLogin");
    }

    #[test]
    fn test_infer_class_name_multi_word() {
        assert_eq!(
            infer_class_name(&PathBuf::from("user profile.txt")),
            "PageUserProfile"
        );
        assert_eq!(
            infer_class_name(&PathBuf::from("checkout-summary.txt")),
            "PageCheckoutSummary"
        );
    }

    #[test]
    fn test_infer_class_name_normalizes_case() {
        assert_eq!(infer_class_name(&PathBuf::from("LOGIN.txt")), "PageLogin");
    }

    #[test]
    fn test_infer_class_name_fallback() {
        assert_eq!(infer_class_name(&PathBuf::from("___.txt")), "PageGenerated");
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode("<form><input/></form>"), PageMode::Html);
        assert_eq!(
            detect_mode("A login page with two inputs"),
            PageMode::Description
        );
    }

    struct StubClient {
        prompts: Mutex<Vec<String>>,
        replies: Vec<String>,
    }

    impl StubClient {
        fn new(replies: &[&str]) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                replies: replies.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl ModelClient for StubClient {
        async fn complete(&self, _config: &ModelConfig, prompt: &str) -> Result<String> {
            let mut prompts = self.prompts.lock().unwrap();
            let index = prompts.len();
            prompts.push(prompt.to_string());
            self.replies
                .get(index)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("unexpected extra model call"))
        }
    }

    #[tokio::test]
    async fn test_class_name_and_mode_reach_refine_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("login.txt");
        std::fs::write(&input, "<form id=\"login\"><input/></form>").unwrap();

        let client = StubClient::new(&["inventory", "export class PageLogin {}"]);
        let artifact =
            generate_page_object(&client, &input, None, &PageObjectConfig::default())
                .await
                .unwrap();

        let prompts = client.prompts.lock().unwrap().clone();
        assert!(prompts[1].contains("Page class name: PageLogin"));
        assert!(prompts[1].contains("HTML mode"));
        assert_eq!(artifact, "export class PageLogin {}");
    }

    #[tokio::test]
    async fn test_explicit_class_name_overrides_inference() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("login.txt");
        std::fs::write(&input, "A login page").unwrap();

        let client = StubClient::new(&["inventory", "export class PageSignIn {}"]);
        generate_page_object(
            &client,
            &input,
            Some("PageSignIn"),
            &PageObjectConfig::default(),
        )
        .await
        .unwrap();

        let prompts = client.prompts.lock().unwrap().clone();
        assert!(prompts[1].contains("Page class name: PageSignIn"));
        assert!(prompts[1].contains("Description mode"));
    }
}
