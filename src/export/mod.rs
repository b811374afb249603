use crate::error::ExportError;
use crate::form::FormData;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// The JSON export payload. Struct order is the stable key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub product_name: String,
    pub description: String,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub generated_at: String,
    pub settings: FormData,
}

pub fn render_markdown(product_name: &str, description: &str) -> String {
    format!("# {product_name}\n\n{description}")
}

/// HTML wrapper around the description.
///
/// Escaped by default; `raw` inserts both strings verbatim for callers
/// that feed pre-sanitized markup.
pub fn render_html(product_name: &str, description: &str, raw: bool) -> String {
    let (name, body) = if raw {
        (product_name.to_string(), description.to_string())
    } else {
        (
            htmlescape::encode_minimal(product_name),
            htmlescape::encode_minimal(description),
        )
    };
    format!(r#"<div class="product-description"><h1>{name}</h1>{body}</div>"#)
}

pub fn render_json(
    form: &FormData,
    description: &str,
    generated_at: DateTime<Utc>,
) -> std::result::Result<String, ExportError> {
    let document = ExportDocument {
        product_name: form.product_name.clone(),
        description: description.to_string(),
        metadata: ExportMetadata {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            settings: form.clone(),
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn render(
    format: ExportFormat,
    form: &FormData,
    description: &str,
    raw_html: bool,
    at: DateTime<Utc>,
) -> std::result::Result<String, ExportError> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(&form.product_name, description)),
        ExportFormat::Html => Ok(render_html(&form.product_name, description, raw_html)),
        ExportFormat::Json => render_json(form, description, at),
    }
}

pub fn export_filename(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "product-description-{}.{}",
        at.timestamp_millis(),
        format.extension()
    )
}

/// Render and write one export file, returning its path.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    form: &FormData,
    description: &str,
    raw_html: bool,
) -> std::result::Result<PathBuf, ExportError> {
    let at = Utc::now();
    let content = render(format, form, description, raw_html, at)?;
    let path = dir.join(export_filename(format, at));
    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, content)?;
    Ok(path)
}
