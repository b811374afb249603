use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ─── Field limits ───────────────────────────────────────────────────────────

pub const FEATURES_MAX_CHARS: usize = 500;
pub const KEYWORDS_MAX_CHARS: usize = 200;

/// Suggestion tags surfaced by the interactive form as a hint line.
pub const SUGGESTED_KEYWORDS: [&str; 15] = [
    "premium",
    "quality",
    "innovative",
    "exclusive",
    "professional",
    "elegant",
    "modern",
    "reliable",
    "efficient",
    "sustainable",
    "eco-friendly",
    "luxurious",
    "affordable",
    "durable",
    "versatile",
];

// ─── Enumerated fields ──────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Formal,
    Friendly,
    Luxury,
    Humorous,
}

impl Tone {
    pub const ALL: [Self; 7] = [
        Self::Professional,
        Self::Casual,
        Self::Enthusiastic,
        Self::Formal,
        Self::Friendly,
        Self::Luxury,
        Self::Humorous,
    ];
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Descriptive,
    Persuasive,
    Technical,
    Storytelling,
    Conversational,
}

impl WritingStyle {
    pub const ALL: [Self; 5] = [
        Self::Descriptive,
        Self::Persuasive,
        Self::Technical,
        Self::Storytelling,
        Self::Conversational,
    ];
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Approximate word target shown next to the length choice.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Short => "~100 words",
            Self::Medium => "~200 words",
            Self::Long => "~300 words",
        }
    }
}

// ─── Form data ──────────────────────────────────────────────────────────────

/// The product attributes submitted to the generation service.
///
/// Serialized field names are the wire contract of `POST /generate-description`;
/// every field is always present in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub product_name: String,
    pub features: String,
    /// Comma-separated tags; split with [`FormData::keyword_list`].
    pub keywords: String,
    pub tone: Tone,
    pub target_audience: String,
    pub writing_style: WritingStyle,
    pub length: Length,
}

impl FormData {
    /// Split the comma-separated keyword field into trimmed, non-empty tags.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect()
    }

    /// Only `product_name` is mandatory; features and keywords carry
    /// character caps.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("product name is required".into());
        }
        if self.features.chars().count() > FEATURES_MAX_CHARS {
            return Err(format!(
                "features exceeds {FEATURES_MAX_CHARS} characters"
            ));
        }
        if self.keywords.chars().count() > KEYWORDS_MAX_CHARS {
            return Err(format!(
                "keywords exceeds {KEYWORDS_MAX_CHARS} characters"
            ));
        }
        Ok(())
    }
}
