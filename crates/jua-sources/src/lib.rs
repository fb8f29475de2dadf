//! Record sources for the jua directory generator.
//!
//! A source is an external collaborator that supplies the ordered company
//! list the site builder renders. Every source resolves to the same typed
//! boundary, `Result<Vec<Company>, SourceError>`, so the builder never has
//! to tell "no companies" apart from "the fetch failed" by inspecting error
//! text.

pub mod builtin;
pub mod file;
pub mod gemini;

use std::path::PathBuf;

use jua_model::Company;

pub use gemini::GeminiConfig;

/// Errors from fetching a record list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("no company name column in {path}")]
    MissingNameColumn { path: String },

    #[error("gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gemini returned no usable content: {0}")]
    EmptyResponse(String),

    #[error("gemini response was not a company list: {0}")]
    MalformedResponse(String),
}

/// Where the record list comes from.
#[derive(Debug, Clone)]
pub enum RecordSource {
    /// The fixture list shipped with the tool.
    Builtin,
    /// A CSV file with a header row.
    Csv(PathBuf),
    /// A JSON array of company objects.
    Json(PathBuf),
    /// The Gemini generative-language API.
    Gemini(GeminiConfig),
}

impl RecordSource {
    /// Fetch the record list from this source, preserving order.
    pub async fn fetch(&self) -> Result<Vec<Company>, SourceError> {
        match self {
            RecordSource::Builtin => Ok(builtin::companies()),
            RecordSource::Csv(path) => file::load_csv(path),
            RecordSource::Json(path) => file::load_json(path),
            RecordSource::Gemini(config) => gemini::fetch(config).await,
        }
    }

    /// Short label for log lines.
    pub fn describe(&self) -> String {
        match self {
            RecordSource::Builtin => "builtin list".to_string(),
            RecordSource::Csv(path) => format!("csv file {}", path.display()),
            RecordSource::Json(path) => format!("json file {}", path.display()),
            RecordSource::Gemini(config) => format!("gemini model {}", config.model),
        }
    }
}
