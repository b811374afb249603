use crate::analysis::{SeoScores, ToneScore};
use crate::form::FormData;
use console::style;

const METER_WIDTH: usize = 20;

/// The three status lines shown while a request is in flight.
pub fn print_progress() {
    for step in [
        "Analyzing product details",
        "Crafting compelling description",
        "Optimizing for SEO",
    ] {
        println!("  {} {step}...", style("●").cyan());
    }
    println!();
}

pub fn print_error_panel(message: &str) {
    println!();
    println!("{} {}", style("✗").red().bold(), style("Generation Failed").red().bold());
    println!("  {message}");
    println!();
}

/// Render the description from its `**`-delimited segments: a headline,
/// titled sections, or plain paragraphs.
pub fn render_description(text: &str) {
    for part in text.split("**") {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.to_lowercase().contains("headline:") {
            let headline = trimmed.replacen("Headline:", "", 1);
            println!("{}", style(headline.trim()).bold().underlined());
            println!();
        } else if let Some((title, content)) = trimmed.split_once(':') {
            if content.trim().is_empty() {
                println!("{trimmed}");
                println!();
            } else {
                println!("{}:", style(title.trim()).bold());
                println!("{}", content.trim());
                println!();
            }
        } else {
            println!("{trimmed}");
            println!();
        }
    }
}

pub fn render_tone(scores: &[ToneScore]) {
    println!("{}", style("Tone Analysis").bold());
    for s in scores {
        println!(
            "  {:<13} {:>5.1}%  {}",
            s.category,
            s.percentage,
            meter(s.percentage)
        );
    }
    println!();
}

pub fn render_seo(scores: &SeoScores) {
    println!(
        "{}  {}",
        style("SEO Score").bold(),
        style(format!("{:.0}", scores.total())).cyan().bold()
    );
    for (label, value) in scores.breakdown() {
        println!("  {label:<16} {value:>4.0}%  {}", meter(value));
    }
    println!();
}

/// Description plus both heuristic readouts.
pub fn render_result(form: &FormData, description: &str) {
    println!();
    render_description(description);
    render_tone(&crate::analysis::analyze(description));
    render_seo(&crate::analysis::score(description, &form.keyword_list()));
}

fn meter(percentage: f64) -> String {
    let filled = ((percentage / 100.0 * METER_WIDTH as f64).round() as usize).min(METER_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(0.0), "░".repeat(20));
        assert_eq!(meter(100.0), "█".repeat(20));
        assert_eq!(meter(50.0), format!("{}{}", "█".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn meter_clamps_overflow() {
        assert_eq!(meter(150.0), "█".repeat(20));
    }
}
