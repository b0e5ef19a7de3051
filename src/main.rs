//! @ai:module:intent CLI for the tool recommender
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::task::JoinSet;
use toolrec::{
    report::{self, OutputFormat, StoreShape},
    PreferencePreset, PreferenceWeights, RecommenderConfig, Recommender, ScoringEngine,
    ScoringEngineTrait, StoreLoader, StoreLoaderTrait, Workflow, WorkflowComposer,
};

const DEFAULT_CONFIG_FILE: &str = "toolrec.toml";

#[derive(Parser)]
#[command(name = "toolrec")]
#[command(about = "Recommend programming tools for data-science subtasks from benchmark results")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every tool of one subtask
    Score {
        /// Category name
        #[arg(long)]
        category: String,

        /// Subtask name
        #[arg(long)]
        subtask: String,

        #[command(flatten)]
        prefs: PreferenceArgs,
    },

    /// Recommend a tool; picks the subtask automatically when none is given
    Recommend {
        /// Category name
        #[arg(long)]
        category: String,

        /// Subtask name (beginner mode when omitted)
        #[arg(long)]
        subtask: Option<String>,

        #[command(flatten)]
        prefs: PreferenceArgs,
    },

    /// Suggest the best tool for every subtask of a category
    Hybrid {
        /// Category name
        #[arg(long, required_unless_present = "all", conflicts_with = "all")]
        category: Option<String>,

        /// Build workflows for every category
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        prefs: PreferenceArgs,
    },

    /// List categories and their subtasks
    Tasks {
        /// Filter by categories (comma-separated)
        #[arg(long)]
        category: Option<String>,
    },

    /// Load a benchmark table and report its shape
    Validate {
        /// Benchmark file to check (defaults to the configured or embedded table)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Write the default configuration
    Init {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

#[derive(Args, Clone, Default)]
struct PreferenceArgs {
    /// Speed preference (0-100)
    #[arg(long)]
    speed: Option<f64>,

    /// Memory-efficiency preference (0-100)
    #[arg(long)]
    memory: Option<f64>,

    /// Ease-of-use preference (0-100)
    #[arg(long)]
    ease: Option<f64>,

    /// Start from a named slider profile
    #[arg(long, value_enum, conflicts_with = "category_defaults")]
    preset: Option<Preset>,

    /// Start from the suggested sliders for the category
    #[arg(long)]
    category_defaults: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Markdown => OutputFormat::Markdown,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Balanced,
    Speed,
    Memory,
    Ease,
}

impl From<Preset> for PreferencePreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Balanced => PreferencePreset::Balanced,
            Preset::Speed => PreferencePreset::Speed,
            Preset::Memory => PreferencePreset::Memory,
            Preset::Ease => PreferencePreset::Ease,
        }
    }
}

impl PreferenceArgs {
    /// @ai:intent Merge base profile and explicit sliders; None when nothing was given
    /// @ai:effects pure
    fn resolve(&self, category: Option<&str>) -> Option<PreferenceWeights> {
        let base = match (self.preset, category) {
            (Some(preset), _) => PreferencePreset::from(preset).weights(),
            (None, Some(category)) if self.category_defaults => {
                PreferenceWeights::category_default(category)
            }
            _ => PreferenceWeights::default(),
        };

        let merged = PreferenceWeights {
            speed: self.speed.or(base.speed),
            memory: self.memory.or(base.memory),
            ease: self.ease.or(base.ease),
        };

        (!merged.is_empty()).then_some(merged)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(2);
    }

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, format),
    }
}

/// @ai:intent Install the log subscriber; logs go to stderr so stdout stays parseable
/// @ai:effects global:write
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toolrec=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// @ai:intent Dispatch a parsed command
/// @ai:effects fs:read, fs:write, io
async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from(cli.format);

    match cli.command {
        Commands::Score {
            category,
            subtask,
            prefs,
        } => {
            let engine = load_engine(cli.config.as_deref())?;
            let preferences = prefs.resolve(Some(category.as_str()));
            let result = engine.score(&category, &subtask, preferences.as_ref())?;
            println!("{}", report::format_score_result(&result, format));
            Ok(())
        }
        Commands::Recommend {
            category,
            subtask,
            prefs,
        } => {
            let engine = Arc::new(load_engine(cli.config.as_deref())?);
            let recommender = Recommender::new(engine);
            let rec = recommender.recommend(
                &category,
                subtask.as_deref(),
                prefs.resolve(Some(category.as_str())).as_ref(),
            )?;
            println!("{}", report::format_recommendation(&rec, format));
            Ok(())
        }
        Commands::Hybrid {
            category,
            all,
            prefs,
        } => {
            let engine = Arc::new(load_engine(cli.config.as_deref())?);
            let workflows = match category {
                Some(category) if !all => {
                    let preferences = prefs.resolve(Some(category.as_str()));
                    let composer = WorkflowComposer::new(engine);
                    vec![composer.build_workflow(&category, preferences.as_ref())?]
                }
                _ => build_all_workflows(engine, prefs).await?,
            };
            println!("{}", report::format_workflows(&workflows, format));
            Ok(())
        }
        Commands::Tasks { category } => {
            let config = load_or_default_config(cli.config.as_deref())?;
            let store = toolrec::load_store(&config)?;

            let filter = CategoryFilter::parse(category.as_deref());
            let index: Vec<_> = store
                .task_index()
                .into_iter()
                .filter(|entry| filter.matches(&entry.category))
                .collect();

            println!("{}", report::format_task_index(&index, format));
            Ok(())
        }
        Commands::Validate { file } => {
            let (store, source) = match file {
                Some(path) => (StoreLoader::new().load_file(&path)?, path.display().to_string()),
                None => {
                    let config = load_or_default_config(cli.config.as_deref())?;
                    let source = config
                        .paths
                        .benchmark_file
                        .as_ref()
                        .map_or_else(
                            || "embedded benchmark table".to_string(),
                            |p| p.display().to_string(),
                        );
                    (toolrec::load_store(&config)?, source)
                }
            };

            let shape = StoreShape::of(&store, &source);
            println!("{}", report::format_store_shape(&shape, format));
            Ok(())
        }
        Commands::Init { output } => {
            let config = RecommenderConfig::default();
            config.save(&output)?;
            println!("Configuration saved to {}", output.display());
            Ok(())
        }
    }
}

/// @ai:intent Build every category's workflow on the blocking pool, in stored order
/// @ai:effects concurrency
async fn build_all_workflows(
    engine: Arc<ScoringEngine>,
    prefs: PreferenceArgs,
) -> Result<Vec<Workflow>> {
    let categories: Vec<String> = engine
        .store()
        .categories
        .iter()
        .map(|c| c.name.clone())
        .collect();

    let mut set = JoinSet::new();

    for (index, category) in categories.into_iter().enumerate() {
        let composer = WorkflowComposer::new(Arc::clone(&engine));
        let preferences = prefs.resolve(Some(category.as_str()));

        set.spawn_blocking(move || {
            (index, composer.build_workflow(&category, preferences.as_ref()))
        });
    }

    let mut built = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        let (index, workflow) = joined.context("workflow task panicked")?;
        built.push((index, workflow?));
    }

    built.sort_by_key(|(index, _)| *index);
    Ok(built.into_iter().map(|(_, w)| w).collect())
}

/// Comma-separated category selection for `tasks`; no selection matches everything.
struct CategoryFilter {
    categories: Option<Vec<String>>,
}

impl CategoryFilter {
    fn parse(arg: Option<&str>) -> Self {
        Self {
            categories: arg.map(|s| s.split(',').map(|c| c.trim().to_string()).collect()),
        }
    }

    fn matches(&self, category: &str) -> bool {
        self.categories
            .as_ref()
            .map(|c| c.iter().any(|cat| cat == category))
            .unwrap_or(true)
    }
}

/// @ai:intent Load configuration and build the engine
/// @ai:effects fs:read
fn load_engine(config_path: Option<&Path>) -> Result<ScoringEngine> {
    let config = load_or_default_config(config_path)?;
    Ok(toolrec::build_engine(&config)?)
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<&Path>) -> Result<RecommenderConfig> {
    match path {
        Some(p) => RecommenderConfig::load(p)
            .with_context(|| format!("Failed to load configuration from {}", p.display())),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);

            if default_path.exists() {
                Ok(RecommenderConfig::load(default_path)?)
            } else {
                Ok(RecommenderConfig::default())
            }
        }
    }
}

/// @ai:intent Print the error in the requested format and pick the exit code
/// @ai:effects io
fn report_failure(error: &anyhow::Error, format: OutputFormat) -> ExitCode {
    match error.downcast_ref::<toolrec::Error>() {
        Some(e) => {
            eprintln!("{}", report::format_error(&e.report(), format));
            if e.is_client_error() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
        None => {
            if format.is_json() {
                let value = serde_json::json!({
                    "kind": "internal",
                    "message": format!("{:#}", error),
                });
                eprintln!("{}", report::to_json(&value, format == OutputFormat::JsonPretty));
            } else {
                eprintln!("Error: {:#}", error);
            }
            ExitCode::from(2)
        }
    }
}
