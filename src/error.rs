use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for copysmith.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum CopysmithError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generation workflow ─────────────────────────────────────────────
    #[error("generate: {0}")]
    Generate(#[from] GenerateError),

    // ── History ─────────────────────────────────────────────────────────
    #[error("history: {0}")]
    History(#[from] HistoryError),

    // ── Export ──────────────────────────────────────────────────────────
    #[error("export: {0}")]
    Export(#[from] ExportError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Generation errors ──────────────────────────────────────────────────────

/// Failures of the single outbound generation call, split by layer so the
/// rendered message tells the user whether the service was even reachable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Validation(String),

    /// Network failure before any HTTP response arrived (includes timeouts).
    #[error("unable to connect to the generation service: {0}. Make sure the server is running.")]
    Transport(String),

    /// HTTP response received with a non-success status or unusable body.
    #[error("{0}")]
    Service(String),

    #[error("no description was generated")]
    EmptyDescription,
}

// ─── History errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("saved description not found: {0}")]
    NotFound(String),

    #[error("store: {0}")]
    Store(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Export errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, CopysmithError>;
