use super::{interactive, view};
use crate::analysis;
use crate::cli::{Cli, Commands, HistoryCommands};
use crate::client::{DescriptionClient, HttpDescriptionClient};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::form::FormData;
use crate::history::{FileHistoryStore, History, SavedDescription};
use crate::templates::{self, TEMPLATES};
use crate::workflow::GenerationSession;
use anyhow::Result;
use console::style;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Generate {
            product_name,
            features,
            keywords,
            tone,
            target_audience,
            writing_style,
            length,
            template,
            from_saved,
            endpoint,
            no_input,
            save,
            export,
            out_dir,
        } => {
            let mut history = open_history(&config).await?;

            let mut form = FormData::default();
            if let Some(id) = from_saved.as_deref() {
                form = find_entry(&history, id)?.form_data.clone();
            }
            if let Some(id) = template.as_deref() {
                let preset = templates::find(id).ok_or_else(|| {
                    anyhow::anyhow!("unknown template '{id}' (known: {})", template_ids())
                })?;
                preset.apply(&mut form);
            }
            if let Some(v) = product_name {
                form.product_name = v;
            }
            if let Some(v) = features {
                form.features = v;
            }
            if let Some(v) = keywords {
                form.keywords = v;
            }
            if let Some(v) = target_audience {
                form.target_audience = v;
            }
            if let Some(v) = tone {
                form.tone = v;
            }
            if let Some(v) = writing_style {
                form.writing_style = v;
            }
            if let Some(v) = length {
                form.length = v;
            }

            let endpoint = endpoint.unwrap_or_else(|| config.endpoint.clone());
            let client = HttpDescriptionClient::new(&endpoint);

            if no_input {
                generate_once(&config, form, &client, &mut history, save, export, out_dir).await
            } else {
                interactive::run(&config, form, &client, &mut history).await
            }
        }

        Commands::Templates => {
            for t in &TEMPLATES {
                println!("{}  {}", style(t.id).bold(), t.name);
                println!("    {}", t.description);
                println!(
                    "    tone: {} | style: {} | length: {}",
                    t.tone, t.writing_style, t.length
                );
            }
            Ok(())
        }

        Commands::History { command } => {
            let history = open_history(&config).await?;
            match command {
                HistoryCommands::List => {
                    let entries = history.entries();
                    if entries.is_empty() {
                        println!("no saved descriptions yet");
                        return Ok(());
                    }
                    println!(
                        "{} saved {}",
                        entries.len(),
                        if entries.len() == 1 { "item" } else { "items" }
                    );
                    for entry in entries {
                        print_summary(entry);
                    }
                }
                HistoryCommands::Show { id } => {
                    let entry = find_entry(&history, &id)?;
                    print_summary(entry);
                    println!();
                    view::render_result(&entry.form_data, &entry.description);
                }
                HistoryCommands::Copy { id } => {
                    let entry = find_entry(&history, &id)?;
                    // Raw text only, for piping; failure is diagnostic.
                    if writeln!(std::io::stdout(), "{}", entry.description).is_err() {
                        warn!("failed to write description to stdout");
                    }
                }
            }
            Ok(())
        }

        Commands::Export {
            id,
            format,
            raw,
            out_dir,
        } => {
            let history = open_history(&config).await?;
            let entry = find_entry(&history, &id)?;
            let dir = out_dir.unwrap_or_else(|| config.export_dir());
            let path =
                export::write_export(&dir, format, &entry.form_data, &entry.description, raw)?;
            println!("wrote {}", path.display());
            Ok(())
        }

        Commands::Score { text, keywords } => {
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let keyword_list: Vec<String> = keywords
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();

            view::render_tone(&analysis::analyze(&text));
            view::render_seo(&analysis::score(&text, &keyword_list));
            Ok(())
        }
    }
}

/// One-shot generation for scripted use: no prompts, exit code reflects the
/// outcome.
async fn generate_once(
    config: &Config,
    form: FormData,
    client: &dyn DescriptionClient,
    history: &mut History,
    save: bool,
    export_format: Option<ExportFormat>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let mut session = GenerationSession::new(form);
    view::print_progress();

    if let Err(err) = session.submit(client).await {
        view::print_error_panel(&err.to_string());
        return Err(err.into());
    }

    let description = session.description().unwrap_or_default().to_string();
    view::render_result(&session.form, &description);

    if save && history.save_entry_best_effort(&session.form, &description).await {
        println!("  {} saved to history", style("✓").green());
    }

    if let Some(format) = export_format {
        let dir = out_dir.unwrap_or_else(|| config.export_dir());
        let path = export::write_export(&dir, format, &session.form, &description, false)?;
        println!("  {} wrote {}", style("✓").green(), path.display());
    }

    Ok(())
}

async fn open_history(config: &Config) -> Result<History> {
    let store = FileHistoryStore::new(&config.history_path());
    Ok(History::open(Box::new(store)).await?)
}

fn find_entry<'a>(history: &'a History, id: &str) -> Result<&'a SavedDescription> {
    history
        .find(id)
        .ok_or_else(|| crate::error::HistoryError::NotFound(id.to_string()).into())
}

fn print_summary(entry: &SavedDescription) {
    let preview: String = entry.description.chars().take(100).collect();
    let ellipsis = if entry.description.chars().count() > 100 {
        "..."
    } else {
        ""
    };
    println!(
        "{}  {}  {}  [{} / {}]",
        style(&entry.id).bold(),
        entry.date.format("%Y-%m-%d %H:%M"),
        entry.form_data.product_name,
        entry.form_data.tone,
        entry.form_data.writing_style
    );
    println!("    {preview}{ellipsis}");
}

fn template_ids() -> String {
    TEMPLATES
        .iter()
        .map(|t| t.id)
        .collect::<Vec<_>>()
        .join(", ")
}
