use crate::export::ExportFormat;
use crate::form::{Length, Tone, WritingStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// copysmith - AI product-description generator.
#[derive(Parser, Debug)]
#[command(name = "copysmith")]
#[command(version = "0.1.0")]
#[command(about = "Generate, score and export AI product descriptions.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a product description (interactive form unless --no-input)
    Generate {
        /// Product name (the only required field)
        #[arg(long)]
        product_name: Option<String>,

        /// Key features, free text (max 500 characters)
        #[arg(long)]
        features: Option<String>,

        /// Comma-separated keywords (max 200 characters)
        #[arg(long)]
        keywords: Option<String>,

        /// Tone of voice
        #[arg(long, value_enum)]
        tone: Option<Tone>,

        /// Target audience, e.g. "young professionals"
        #[arg(long)]
        target_audience: Option<String>,

        /// Writing style
        #[arg(long, value_enum)]
        writing_style: Option<WritingStyle>,

        /// Description length
        #[arg(long, value_enum)]
        length: Option<Length>,

        /// Start from a template preset (ecommerce, luxury, technical)
        #[arg(long)]
        template: Option<String>,

        /// Seed the form from a saved history entry
        #[arg(long, value_name = "ID")]
        from_saved: Option<String>,

        /// Generation service base URL (overrides config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Skip all prompts; fail instead of asking
        #[arg(long)]
        no_input: bool,

        /// Save the result to history (non-interactive mode)
        #[arg(long)]
        save: bool,

        /// Export the result after generating (non-interactive mode)
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory for exported files (default: config or current dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List the template presets
    Templates,

    /// Browse saved descriptions
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Export a saved description by id
    Export {
        /// History entry id
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,

        /// Skip HTML escaping (html format only)
        #[arg(long)]
        raw: bool,

        /// Directory for the exported file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Tone and SEO readouts for arbitrary text
    Score {
        /// Text to score; read from stdin when omitted
        text: Option<String>,

        /// Comma-separated keywords for the density sub-score
        #[arg(long)]
        keywords: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List saved descriptions, newest first
    List,

    /// Show one saved description in full
    Show {
        /// History entry id
        id: String,
    },

    /// Print a saved description's raw text (pipe it anywhere)
    Copy {
        /// History entry id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flag_driven_generate() {
        let cli = Cli::try_parse_from([
            "copysmith",
            "generate",
            "--product-name",
            "Widget",
            "--tone",
            "luxury",
            "--length",
            "long",
            "--no-input",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                product_name,
                tone,
                length,
                no_input,
                ..
            } => {
                assert_eq!(product_name.as_deref(), Some("Widget"));
                assert_eq!(tone, Some(Tone::Luxury));
                assert_eq!(length, Some(Length::Long));
                assert!(no_input);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_tone() {
        assert!(Cli::try_parse_from(["copysmith", "generate", "--tone", "sarcastic"]).is_err());
    }

    #[test]
    fn export_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["copysmith", "export", "1736000000000"]).unwrap();
        match cli.command {
            Commands::Export { format, raw, .. } => {
                assert_eq!(format, ExportFormat::Markdown);
                assert!(!raw);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn history_subcommands_parse() {
        let cli = Cli::try_parse_from(["copysmith", "history", "copy", "42"]).unwrap();
        match cli.command {
            Commands::History {
                command: HistoryCommands::Copy { id },
            } => assert_eq!(id, "42"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
