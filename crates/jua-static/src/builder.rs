//! Directory site builder.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use jua_model::{slugify, Company};

use crate::assets::AssetPipeline;
use crate::templates::{Card, CompanyContext, IndexContext, TemplateEngine};

/// Accent colors for detail page headers, assigned by record index.
const ACCENT_COLORS: [&str; 6] = [
    "#f4b400", "#2e7d32", "#1565c0", "#c62828", "#6a1b9a", "#ef6c00",
];

/// Configuration for building a directory site.
///
/// All values are explicit; the builder reads nothing from the environment.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Site title
    pub title: String,

    /// Base URL for the site
    pub base_url: String,

    /// Country calling code for WhatsApp links
    pub country_code: String,

    /// Minify the generated CSS
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            title: "Solar Tanzania Directory".to_string(),
            base_url: "/".to_string(),
            country_code: "255".to_string(),
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of detail pages written (after slug collisions collapse)
    pub pages: usize,

    /// Number of records skipped for having no name
    pub skipped: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to serialize record data: {0}")]
    SerializeError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Directory site builder.
///
/// A pure function of the record list and the config: rebuilding with
/// identical inputs into a clean destination produces byte-identical files.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the directory site from the given records.
    ///
    /// Records without a name are skipped with a diagnostic; any IO failure
    /// is fatal. The destination is regenerated in place, overwriting files
    /// from earlier runs.
    pub async fn build(&self, records: &[Company]) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let mut kept: Vec<&Company> = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for company in records {
            match company.validate() {
                Ok(()) => kept.push(company),
                Err(e) => {
                    tracing::warn!("Skipping record: {}", e);
                    skipped += 1;
                }
            }
        }

        self.write_data_file(&kept)?;
        self.write_assets(&assets_dir)?;

        let pages = self.write_detail_pages(&kept)?;
        self.write_index(&kept)?;
        self.write_thanks()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            skipped,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Detail page filename for the record at `index` in the kept list.
    ///
    /// Falls back to a positional name when the company name has no
    /// filename-safe characters at all.
    fn detail_filename(company: &Company, index: usize) -> String {
        let slug = slugify(&company.name);
        if slug.is_empty() {
            format!("company_{}.html", index + 1)
        } else {
            format!("{}.html", slug)
        }
    }

    /// Serialize the kept records to `companies.json`, order preserved.
    ///
    /// Pretty-printed UTF-8; serde_json leaves non-ASCII characters intact.
    /// The client script reads this file verbatim, so field names are part
    /// of the output contract.
    fn write_data_file(&self, kept: &[&Company]) -> Result<(), BuildError> {
        let json = serde_json::to_string_pretty(kept)
            .map_err(|e| BuildError::SerializeError(e.to_string()))?;

        fs::write(self.config.output_dir.join("companies.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Write the fixed stylesheet and client script into `assets/`.
    fn write_assets(&self, assets_dir: &std::path::Path) -> Result<(), BuildError> {
        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("style.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("script.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Write one detail page per kept record.
    ///
    /// Colliding slugs share a filename; the later record overwrites the
    /// earlier one. Returns the number of distinct files written.
    fn write_detail_pages(&self, kept: &[&Company]) -> Result<usize, BuildError> {
        let mut seen: HashSet<String> = HashSet::new();

        for (i, company) in kept.iter().enumerate() {
            let filename = Self::detail_filename(company, i);

            if !seen.insert(filename.clone()) {
                tracing::warn!(
                    "Slug collision: overwriting {} with record \"{}\"",
                    filename,
                    company.name
                );
            }

            tracing::info!("Generating page for {}", company.name);

            let description = if company.description.trim().is_empty() {
                format!("Quality solar services from {}.", company.name)
            } else {
                company.description.clone()
            };

            let ctx = CompanyContext {
                name: company.name.clone(),
                site_title: self.config.title.clone(),
                base_url: self.config.base_url.clone(),
                location: company.location.clone(),
                services: company.services.clone(),
                description,
                website: company.website.clone(),
                whatsapp: company.whatsapp_link(&self.config.country_code),
                color: ACCENT_COLORS[i % ACCENT_COLORS.len()].to_string(),
            };

            let html = self
                .templates
                .render_company(&ctx)
                .map_err(|e| BuildError::TemplateError(e.to_string()))?;

            fs::write(self.config.output_dir.join(&filename), html)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        Ok(seen.len())
    }

    /// Write the index page, one card per kept record in input order.
    fn write_index(&self, kept: &[&Company]) -> Result<(), BuildError> {
        let cards = kept
            .iter()
            .enumerate()
            .map(|(i, company)| Card {
                name: company.name.clone(),
                href: Self::detail_filename(company, i),
                location: company.location.clone(),
                services: company.services.clone(),
            })
            .collect();

        let ctx = IndexContext {
            site_title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            cards,
        };

        let html = self
            .templates
            .render_index(&ctx)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Write the form-success page.
    fn write_thanks(&self) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_thanks(&self.config.title, &self.config.base_url)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("thanks.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_company() -> Company {
        Company {
            name: "Dar Solar Tech".to_string(),
            location: "Dar es Salaam".to_string(),
            services: "Panels, installation".to_string(),
            description: "Affordable systems.".to_string(),
            phone: Some("0755555555".to_string()),
            website: None,
        }
    }

    fn config_for(dir: &std::path::Path) -> BuildConfig {
        BuildConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_full_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let records = vec![sample_company(), Company::new("Mwanza Sun")];

        let builder = SiteBuilder::new(config_for(&out));
        let result = builder.build(&records).await.unwrap();

        assert_eq!(result.pages, 2);
        assert_eq!(result.skipped, 0);
        assert!(out.join("index.html").exists());
        assert!(out.join("companies.json").exists());
        assert!(out.join("thanks.html").exists());
        assert!(out.join("assets/style.css").exists());
        assert!(out.join("assets/script.js").exists());
        assert!(out.join("dar_solar_tech.html").exists());
        assert!(out.join("mwanza_sun.html").exists());
    }

    #[tokio::test]
    async fn detail_page_contains_record_fields_and_whatsapp_link() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(config_for(&out));
        builder.build(&[sample_company()]).await.unwrap();

        let detail = fs::read_to_string(out.join("dar_solar_tech.html")).unwrap();
        assert!(detail.contains("Dar Solar Tech"));
        assert!(detail.contains("Dar es Salaam"));
        assert!(detail.contains("https://wa.me/255755555555"));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("dar_solar_tech.html"));
    }

    #[tokio::test]
    async fn index_ships_the_cost_calculator() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(config_for(&out));
        builder.build(&[sample_company()]).await.unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains(r#"id="watts""#));
        assert!(index.contains(r#"id="hours""#));
        assert!(index.contains(r#"id="result""#));

        let script = fs::read_to_string(out.join("assets/script.js")).unwrap();
        assert!(script.contains("watts * hours * 5"));
    }

    #[tokio::test]
    async fn data_file_round_trips() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let records = vec![
            sample_company(),
            Company {
                name: "Kahama Jua Kali".to_string(),
                location: "Shinyanga".to_string(),
                services: String::new(),
                description: "Maelezo ya Kiswahili yenye herufi za kipekee: jua kali sana."
                    .to_string(),
                phone: None,
                website: Some("https://example.co.tz".to_string()),
            },
        ];

        let builder = SiteBuilder::new(config_for(&out));
        builder.build(&records).await.unwrap();

        let json = fs::read_to_string(out.join("companies.json")).unwrap();
        let parsed: Vec<Company> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, records);
    }

    #[tokio::test]
    async fn rebuild_is_byte_identical() {
        let temp = tempdir().unwrap();
        let first = temp.path().join("a");
        let second = temp.path().join("b");

        let records = vec![sample_company(), Company::new("Mwanza Sun")];

        SiteBuilder::new(config_for(&first))
            .build(&records)
            .await
            .unwrap();
        SiteBuilder::new(config_for(&second))
            .build(&records)
            .await
            .unwrap();

        for file in [
            "index.html",
            "companies.json",
            "thanks.html",
            "dar_solar_tech.html",
            "mwanza_sun.html",
            "assets/style.css",
            "assets/script.js",
        ] {
            let a = fs::read(first.join(file)).unwrap();
            let b = fs::read(second.join(file)).unwrap();
            assert_eq!(a, b, "{} differs between runs", file);
        }
    }

    #[tokio::test]
    async fn nameless_record_is_skipped_not_fatal() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let records = vec![Company::new(""), sample_company()];

        let builder = SiteBuilder::new(config_for(&out));
        let result = builder.build(&records).await.unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.skipped, 1);

        let json = fs::read_to_string(out.join("companies.json")).unwrap();
        let parsed: Vec<Company> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(index.matches("class=\"card\"").count(), 1);
    }

    #[tokio::test]
    async fn missing_optional_fields_degrade_to_placeholders() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(config_for(&out));
        let result = builder.build(&[Company::new("Bare Solar")]).await.unwrap();

        assert_eq!(result.pages, 1);

        let detail = fs::read_to_string(out.join("bare_solar.html")).unwrap();
        assert!(detail.contains("Quality solar services from Bare Solar."));
        assert!(detail.contains("Not available"));
        assert!(!detail.contains("wa.me"));
    }

    #[tokio::test]
    async fn case_colliding_slugs_last_write_wins() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let mut first = Company::new("Dar Solar");
        first.description = "The first listing.".to_string();
        let mut second = Company::new("dar solar");
        second.description = "The second listing.".to_string();

        let builder = SiteBuilder::new(config_for(&out));
        let result = builder.build(&[first, second]).await.unwrap();

        // One shared file, two index cards pointing at it.
        assert_eq!(result.pages, 1);

        let detail = fs::read_to_string(out.join("dar_solar.html")).unwrap();
        assert!(detail.contains("The second listing."));
        assert!(!detail.contains("The first listing."));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(index.matches("dar_solar.html").count(), 2);
    }

    #[tokio::test]
    async fn unsluggable_name_gets_positional_filename() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(config_for(&out));
        let result = builder.build(&[Company::new("???")]).await.unwrap();

        assert_eq!(result.pages, 1);
        assert!(out.join("company_1.html").exists());
    }

    #[tokio::test]
    async fn non_ascii_content_survives_serialization() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let mut company = Company::new("Jua Kali");
        company.description = "Ünïcôdé — ☀".to_string();

        let builder = SiteBuilder::new(config_for(&out));
        builder.build(&[company]).await.unwrap();

        let json = fs::read_to_string(out.join("companies.json")).unwrap();
        assert!(json.contains("Ünïcôdé — ☀"));
        assert!(!json.contains("\\u"));
    }
}
