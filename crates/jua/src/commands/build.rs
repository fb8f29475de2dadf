//! Site build command.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use jua_sources::{GeminiConfig, RecordSource};
use jua_static::{BuildConfig, SiteBuilder};
use serde::Deserialize;

/// Configuration file structure (jua.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    source: SourceConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_country_code")]
    country_code: String,
}

#[derive(Debug, Deserialize)]
struct SourceConfig {
    /// "builtin", "csv", "json" or "gemini"
    #[serde(default = "default_source_kind")]
    kind: String,
    /// Record file path for the csv/json kinds
    path: Option<String>,
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_topic")]
    topic: String,
    #[serde(default = "default_count")]
    count: usize,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

fn default_title() -> String {
    "Solar Tanzania Directory".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_country_code() -> String {
    "255".to_string()
}
fn default_source_kind() -> String {
    "builtin".to_string()
}
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_topic() -> String {
    "solar energy companies in Tanzania".to_string()
}
fn default_count() -> usize {
    10
}
fn default_minify() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
            base_url: default_base_url(),
            country_code: default_country_code(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            path: None,
            model: default_model(),
            topic: default_topic(),
            count: default_count(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

/// Load configuration from jua.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("jua.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read jua.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse jua.toml: {}", e))?;
        tracing::info!("Loaded config from jua.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Resolve a record source from the CLI flag or the config file.
///
/// The Gemini API key is read here, once, and handed to the source as an
/// explicit value; a missing key aborts before anything is written.
fn resolve_source(flag: Option<String>, config: &SourceConfig) -> Result<RecordSource> {
    let gemini = |config: &SourceConfig| -> Result<RecordSource> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            anyhow::anyhow!("GEMINI_API_KEY is not set (required for the gemini source)")
        })?;
        Ok(RecordSource::Gemini(GeminiConfig {
            api_key,
            model: config.model.clone(),
            topic: config.topic.clone(),
            count: config.count,
        }))
    };

    let from_path = |path: &str| -> Result<RecordSource> {
        let path = PathBuf::from(path);
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(RecordSource::Csv(path)),
            Some("json") => Ok(RecordSource::Json(path)),
            _ => anyhow::bail!(
                "Unsupported record file {} (expected .csv or .json)",
                path.display()
            ),
        }
    };

    if let Some(spec) = flag {
        return match spec.as_str() {
            "builtin" => Ok(RecordSource::Builtin),
            "gemini" => gemini(config),
            path => from_path(path),
        };
    }

    match config.kind.as_str() {
        "builtin" => Ok(RecordSource::Builtin),
        "gemini" => gemini(config),
        "csv" | "json" => {
            let path = config.path.as_deref().ok_or_else(|| {
                anyhow::anyhow!(
                    "source.kind = \"{}\" requires source.path in jua.toml",
                    config.kind
                )
            })?;
            from_path(path)
        }
        other => anyhow::bail!("Unknown source.kind \"{}\" in jua.toml", other),
    }
}

/// Run the build command.
pub async fn run(
    output: Option<PathBuf>,
    source: Option<String>,
    minify: Option<bool>,
) -> Result<()> {
    let file_config = load_config()?;

    let record_source = resolve_source(source, &file_config.source)?;
    tracing::info!("Fetching records from {}", record_source.describe());

    let records = record_source.fetch().await?;
    tracing::info!("Fetched {} records", records.len());

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        title: file_config.site.title,
        base_url: file_config.site.base_url,
        country_code: file_config.site.country_code,
        minify: minify.unwrap_or(file_config.build.minify),
    };

    let result = SiteBuilder::new(config).build(&records).await?;

    tracing::info!(
        "Generated {} pages ({} records skipped) in {}ms",
        result.pages,
        result.skipped,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
