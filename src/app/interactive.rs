use super::view;
use crate::client::DescriptionClient;
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::form::{FormData, Length, SUGGESTED_KEYWORDS, Tone, WritingStyle};
use crate::history::History;
use crate::templates::TEMPLATES;
use crate::workflow::GenerationSession;
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select};
use std::io::Write;
use tracing::warn;

enum Action {
    Save,
    Export(ExportFormat),
    PrintRaw,
    New,
    Quit,
}

/// The form ↔ result loop: prompt, submit, render, act.
///
/// A failed generation re-shows the form with the previous answers intact;
/// "New description" does the same after a success.
pub async fn run(
    config: &Config,
    seed: FormData,
    client: &dyn DescriptionClient,
    history: &mut History,
) -> Result<()> {
    let mut session = GenerationSession::new(seed);

    loop {
        session.form = prompt_form(&session.form)?;

        println!();
        view::print_progress();

        if let Err(err) = session.submit(client).await {
            view::print_error_panel(&err.to_string());
            let retry = Confirm::new()
                .with_prompt("Try again?")
                .default(true)
                .interact()?;
            if retry {
                session.reset();
                continue;
            }
            return Ok(());
        }

        let description = session.description().unwrap_or_default().to_string();
        view::render_result(&session.form, &description);

        loop {
            match prompt_action()? {
                Action::Save => {
                    if history
                        .save_entry_best_effort(&session.form, &description)
                        .await
                    {
                        println!("  {} saved to history", style("✓").green());
                    }
                }
                Action::Export(format) => {
                    match export::write_export(
                        &config.export_dir(),
                        format,
                        &session.form,
                        &description,
                        false,
                    ) {
                        Ok(path) => {
                            println!("  {} wrote {}", style("✓").green(), path.display());
                        }
                        Err(err) => warn!("export failed: {err}"),
                    }
                }
                Action::PrintRaw => {
                    // Raw text to stdout for piping; failure is diagnostic only.
                    if writeln!(std::io::stdout(), "{description}").is_err() {
                        warn!("failed to write description to stdout");
                    }
                }
                Action::New => {
                    session.reset();
                    break;
                }
                Action::Quit => return Ok(()),
            }
        }
    }
}

fn prompt_form(seed: &FormData) -> Result<FormData> {
    let mut form = seed.clone();

    let mut template_items = vec!["Start from scratch".to_string()];
    template_items.extend(TEMPLATES.iter().map(|t| format!("{} - {}", t.name, t.description)));
    let choice = Select::new()
        .with_prompt("Template")
        .items(&template_items)
        .default(0)
        .interact()?;
    if choice > 0 {
        TEMPLATES[choice - 1].apply(&mut form);
    }

    form.product_name = Input::new()
        .with_prompt("Product name")
        .with_initial_text(form.product_name.clone())
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("product name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    form.target_audience = Input::new()
        .with_prompt("Target audience (optional)")
        .with_initial_text(form.target_audience.clone())
        .allow_empty(true)
        .interact_text()?;

    form.features = Input::new()
        .with_prompt("Key features (max 500 chars)")
        .with_initial_text(form.features.clone())
        .allow_empty(true)
        .interact_text()?;

    println!(
        "  {} {}",
        style("suggestions:").dim(),
        style(SUGGESTED_KEYWORDS.join(", ")).dim()
    );
    form.keywords = Input::new()
        .with_prompt("Keywords, comma-separated (max 200 chars)")
        .with_initial_text(form.keywords.clone())
        .allow_empty(true)
        .interact_text()?;

    form.tone = prompt_variant("Tone of voice", &Tone::ALL, form.tone)?;
    form.writing_style =
        prompt_variant("Writing style", &WritingStyle::ALL, form.writing_style)?;

    let length_items: Vec<String> = Length::ALL
        .iter()
        .map(|l| format!("{l} ({})", l.hint()))
        .collect();
    let default_length = Length::ALL.iter().position(|l| *l == form.length).unwrap_or(0);
    form.length = Length::ALL[Select::new()
        .with_prompt("Length")
        .items(&length_items)
        .default(default_length)
        .interact()?];

    Ok(form)
}

fn prompt_variant<T: Copy + PartialEq + std::fmt::Display>(
    prompt: &str,
    variants: &[T],
    current: T,
) -> Result<T> {
    let items: Vec<String> = variants.iter().map(ToString::to_string).collect();
    let default = variants.iter().position(|v| *v == current).unwrap_or(0);
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(variants[choice])
}

fn prompt_action() -> Result<Action> {
    let items = [
        "Save to history",
        "Export as Markdown",
        "Export as HTML",
        "Export as JSON",
        "Print raw text",
        "New description",
        "Quit",
    ];
    let choice = Select::new()
        .with_prompt("Next")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => Action::Save,
        1 => Action::Export(ExportFormat::Markdown),
        2 => Action::Export(ExportFormat::Html),
        3 => Action::Export(ExportFormat::Json),
        4 => Action::PrintRaw,
        5 => Action::New,
        _ => Action::Quit,
    })
}
