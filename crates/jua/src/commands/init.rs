//! Initialize a directory project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing jua...");

    // Create default config
    let config_path = Path::new("jua.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write jua.toml")?;
        tracing::info!("Created jua.toml");
    } else {
        tracing::warn!("jua.toml already exists. Use --yes to overwrite.");
    }

    // Create sample record file
    let data_path = Path::new("solar_data.csv");
    if !data_path.exists() || yes {
        fs::write(data_path, SAMPLE_DATA).context("Failed to write solar_data.csv")?;
        tracing::info!("Created solar_data.csv");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'jua build' to generate the site, then 'jua serve' to preview it.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Jua Configuration

[site]
# Site title shown on every page
title = "Solar Tanzania Directory"

# Output directory for the built site
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Country calling code used for WhatsApp chat links
country_code = "255"

[source]
# Where company records come from: "builtin", "csv", "json" or "gemini"
kind = "csv"

# Record file for the csv/json kinds
path = "solar_data.csv"

# Gemini settings (the API key comes from the GEMINI_API_KEY env var)
model = "gemini-1.5-flash"
topic = "solar energy companies in Tanzania"
count = 10

[build]
# Minify the generated CSS
minify = true
"#;

const SAMPLE_DATA: &str = "\
Company Name,Location,Services,Description,Phone,Website
Offgrid Africa,Dar es Salaam,\"Solar kits, lithium batteries, installations\",,0755123456,
Zanzibar Green Power,Zanzibar,\"Hotels, backup systems, tourism solar\",,,https://example.com
Mwanza Sun Solutions,Mwanza,\"Water pumps, agri-solar systems\",,,
";
