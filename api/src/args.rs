use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fridgevision_core::domain::{
    common::{
        DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_IMAGE_SIZE, DEFAULT_SUPPRESSION_THRESHOLD,
        DetectionConfig, FridgeVisionConfig, LLMConfig, RecipeCatalogConfig,
    },
    detection::LabelRules,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "fridgevision-api", version, about)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub detection: DetectionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8501)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-1.5-flash-latest"
    )]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    #[arg(long = "spoonacular-api-key", env = "SPOONACULAR_API_KEY", hide_env_values = true)]
    pub spoonacular_api_key: Option<String>,

    #[arg(
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://api.spoonacular.com/recipes"
    )]
    pub base_url: Url,

    /// Fail at startup instead of degrading to local recipes when no key is set
    #[arg(long = "require-remote-catalog", env = "REQUIRE_REMOTE_CATALOG", default_value_t = false)]
    pub require_remote: bool,

    #[arg(long = "catalog-timeout-secs", env = "CATALOG_TIMEOUT_SECS", default_value_t = 8)]
    pub timeout_secs: u64,

    #[arg(long = "max-recipes", env = "MAX_RECIPES", default_value_t = 10)]
    pub max_recipes: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DetectionArgs {
    #[arg(
        long = "confidence-threshold",
        env = "CONFIDENCE_THRESHOLD",
        default_value_t = DEFAULT_CONFIDENCE_THRESHOLD
    )]
    pub confidence_threshold: f64,

    #[arg(
        long = "suppression-threshold",
        env = "SUPPRESSION_THRESHOLD",
        default_value_t = DEFAULT_SUPPRESSION_THRESHOLD
    )]
    pub suppression_threshold: f64,

    #[arg(long = "max-image-size", env = "MAX_IMAGE_SIZE", default_value_t = DEFAULT_MAX_IMAGE_SIZE)]
    pub max_image_size: usize,

    /// JSON file replacing the built-in label synonym and affix rules
    #[arg(long = "label-rules", env = "LABEL_RULES_PATH")]
    pub label_rules_path: Option<PathBuf>,

    #[arg(skip)]
    pub label_rules: Option<LabelRules>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Args {
    /// Reads the label rules file, if one is configured.
    pub fn load_label_rules(mut self) -> Result<Self, anyhow::Error> {
        if let Some(path) = &self.detection.label_rules_path {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("failed to read label rules {}: {}", path.display(), e)
            })?;
            let rules = fridgevision_core::application::load_label_rules(&raw)?;
            self.detection.label_rules = Some(rules);
        }
        Ok(self)
    }
}

impl From<Args> for FridgeVisionConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            catalog: RecipeCatalogConfig {
                spoonacular_api_key: args.catalog.spoonacular_api_key,
                base_url: args.catalog.base_url.as_str().trim_end_matches('/').to_string(),
                timeout: Duration::from_secs(args.catalog.timeout_secs),
                require_remote: args.catalog.require_remote,
            },
            detection: DetectionConfig {
                suppression_threshold: args.detection.suppression_threshold,
                max_image_size: args.detection.max_image_size,
                label_rules: args.detection.label_rules,
            },
        }
    }
}
