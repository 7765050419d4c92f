use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use specsmith::{
    generate_contract, generate_from_html, generate_from_pdf, generate_page_object,
    generate_step_definitions, generate_universal_steps_prompt, ArtifactSink, ContractConfig,
    ModelConfig, OllamaClient, OllamaConfig, PageObjectConfig, ScenarioConfig, StepsConfig,
    UniversalStepsConfig,
};

#[derive(Parser)]
#[command(name = "specsmith")]
#[command(author, version, about = "QA automation artifact generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Gherkin scenarios from an HTML structure dump
    ScenarioFromHtml {
        /// Input HTML structure file
        #[arg(short, long)]
        input: PathBuf,

        /// Output feature file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the artifact when writing to a file
        #[arg(long)]
        print: bool,

        /// Character budget applied to the source document
        #[arg(long, default_value = "3000")]
        max_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.3")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.2")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate Gherkin scenarios from a PDF requirements document
    ScenarioFromPdf {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output feature file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the artifact when writing to a file
        #[arg(long)]
        print: bool,

        /// Character budget applied to the extracted text
        #[arg(long, default_value = "2000")]
        max_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.3")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.2")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Extract a BDD style contract and a universal scenario prompt from
    /// existing scenarios
    Contract {
        /// Input file with existing scenarios
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the style contract
        #[arg(long)]
        contract_output: PathBuf,

        /// Output file for the universal prompt
        #[arg(long)]
        prompt_output: PathBuf,

        /// Character budget applied to the source document
        #[arg(long, default_value = "4000")]
        max_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.2")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.1")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a universal step-definitions prompt from existing steps
    UniversalSteps {
        /// Input file with existing step definitions
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the artifact when writing to a file
        #[arg(long)]
        print: bool,

        /// Character budget applied to the source document
        #[arg(long, default_value = "4000")]
        max_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.3")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.15")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate step definitions from a feature file and a page object
    Steps {
        /// Input Gherkin feature file
        #[arg(long)]
        feature: PathBuf,

        /// Input page-object (TypeScript) file
        #[arg(long)]
        pom: PathBuf,

        /// Output TypeScript file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the artifact when writing to a file
        #[arg(long)]
        print: bool,

        /// Character budget applied to the feature file
        #[arg(long, default_value = "5000")]
        max_feature_chars: usize,

        /// Character budget applied to the page-object file
        #[arg(long, default_value = "5000")]
        max_pom_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.3")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.1")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a Playwright page-object class from a page description
    PageObject {
        /// Input page description or HTML file
        #[arg(short, long)]
        input: PathBuf,

        /// Output TypeScript file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the artifact when writing to a file
        #[arg(long)]
        print: bool,

        /// Class name (inferred from the input file name if omitted)
        #[arg(long)]
        class_name: Option<String>,

        /// Character budget applied to the source document
        #[arg(long, default_value = "3000")]
        max_chars: usize,

        /// Draft model name
        #[arg(long, default_value = "gpt-oss:120b-cloud")]
        draft_model: String,

        /// Draft model temperature
        #[arg(long, default_value = "0.3")]
        draft_temperature: f64,

        /// Refine model name
        #[arg(long, default_value = "deepseek-v3.1:671b-cloud")]
        refine_model: String,

        /// Refine model temperature
        #[arg(long, default_value = "0.15")]
        refine_temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = OllamaClient::new(OllamaConfig::from_env());

    match cli.command {
        Commands::ScenarioFromHtml {
            input,
            output,
            print,
            max_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = ScenarioConfig::for_html();
            config.max_source_chars = max_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifact = generate_from_html(&client, &input, &config).await?;
            ArtifactSink::resolve(output, print).write(&artifact)?;
        }

        Commands::ScenarioFromPdf {
            input,
            output,
            print,
            max_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = ScenarioConfig::for_pdf();
            config.max_source_chars = max_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifact = generate_from_pdf(&client, &input, &config).await?;
            ArtifactSink::resolve(output, print).write(&artifact)?;
        }

        Commands::Contract {
            input,
            contract_output,
            prompt_output,
            max_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = ContractConfig::default();
            config.max_source_chars = max_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifacts = generate_contract(&client, &input, &config).await?;
            // Both stages succeeded; only now touch the filesystem.
            ArtifactSink::File(contract_output).write(&artifacts.style_contract)?;
            ArtifactSink::File(prompt_output).write(&artifacts.universal_prompt)?;
            info!("Style contract and universal prompt written");
        }

        Commands::UniversalSteps {
            input,
            output,
            print,
            max_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = UniversalStepsConfig::default();
            config.max_source_chars = max_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifact = generate_universal_steps_prompt(&client, &input, &config).await?;
            ArtifactSink::resolve(output, print).write(&artifact)?;
        }

        Commands::Steps {
            feature,
            pom,
            output,
            print,
            max_feature_chars,
            max_pom_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = StepsConfig::default();
            config.max_feature_chars = max_feature_chars;
            config.max_pom_chars = max_pom_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifact = generate_step_definitions(&client, &feature, &pom, &config).await?;
            ArtifactSink::resolve(output, print).write(&artifact)?;
        }

        Commands::PageObject {
            input,
            output,
            print,
            class_name,
            max_chars,
            draft_model,
            draft_temperature,
            refine_model,
            refine_temperature,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = PageObjectConfig::default();
            config.max_source_chars = max_chars;
            config.pipeline.draft = ModelConfig::new(draft_model, draft_temperature);
            config.pipeline.refine = ModelConfig::new(refine_model, refine_temperature);

            let artifact =
                generate_page_object(&client, &input, class_name.as_deref(), &config).await?;
            ArtifactSink::resolve(output, print).write(&artifact)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
