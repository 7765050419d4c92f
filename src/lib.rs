pub mod generators;
pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;

pub use generators::{
    generate_contract, generate_from_html, generate_from_pdf, generate_page_object,
    generate_step_definitions, generate_universal_steps_prompt, ContractArtifacts,
    ContractConfig, PageObjectConfig, ScenarioConfig, StepsConfig, UniversalStepsConfig,
};
pub use io::{read_document, read_pdf_document, ArtifactSink, InputError};
pub use llm::{Cleanup, ModelClient, ModelConfig, OllamaClient, OllamaConfig};
pub use models::{Document, PromptTemplate, TemplateError};
pub use pipeline::{execute_two_stage, TwoStageConfig, TwoStageOutcome};
