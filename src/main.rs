//! MailGuard - Main Entry Point
//!
//! Command-line front-end over the analysis core: submit an email,
//! list the inbox, show statistics. All presentation decoration
//! (glyphs, headlines) lives here and is never persisted.

mod api;
mod logic;
pub mod constants;

use std::process::ExitCode;

use api::commands;
use logic::sentiment::LexiconAnalyzer;
use logic::store::InboxStore;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("submit") => match (args.get(1), args.get(2)) {
            (Some(subject), Some(message)) => run_submit(subject, message),
            _ => {
                eprintln!("usage: mailguard submit <subject> <message>");
                return ExitCode::FAILURE;
            }
        },
        Some("inbox") => run_inbox(),
        Some("stats") => run_stats(),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("{} v{}", constants::APP_NAME, constants::APP_VERSION);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  submit <subject> <message>   Classify and store a new email");
    eprintln!("  inbox                        List stored emails, newest first");
    eprintln!("  stats                        Sentiment and security summaries");
    eprintln!();
    eprintln!("Database: {}", constants::database_path().display());
}

// ============================================================================
// COMMANDS
// ============================================================================

fn run_submit(subject: &str, message: &str) -> Result<(), commands::CommandError> {
    let store = InboxStore::open_default();
    let analyzer = LexiconAnalyzer::new();

    let receipt = commands::submit_email(&store, &analyzer, subject, message)?;
    let record = &receipt.record;

    println!("Email sent and saved to database!");
    println!(
        "AI Analysis: {} {} | {} {} (score {:+.2})",
        record.sentiment.glyph(),
        record.sentiment,
        record.security.glyph(),
        record.security.headline(),
        record.score
    );
    if !receipt.matched_indicators.is_empty() {
        println!("Matched indicators: {}", receipt.matched_indicators.join(", "));
    }
    Ok(())
}

fn run_inbox() -> Result<(), commands::CommandError> {
    let store = InboxStore::open_default();
    let emails = commands::list_inbox(&store)?;

    if emails.is_empty() {
        println!("No emails yet. Write your first email!");
        return Ok(());
    }

    for email in &emails {
        println!("📧 {} - {}", email.subject, email.timestamp);
        println!("   {}", email.message);
        println!(
            "   {} {} | {} {}",
            email.sentiment.glyph(),
            email.sentiment,
            email.security.glyph(),
            email.security.headline()
        );
        println!();
    }
    Ok(())
}

fn run_stats() -> Result<(), commands::CommandError> {
    let store = InboxStore::open_default();
    let summary = commands::get_statistics(&store)?;

    if summary.total == 0 {
        println!("No data to analyze yet!");
        return Ok(());
    }

    println!("Sentiment Analysis ({} emails)", summary.total);
    println!(
        "  😊 positive: {:>4}  ({:.0}%)",
        summary.sentiment.positive,
        summary.percent(summary.sentiment.positive)
    );
    println!(
        "  😐 neutral:  {:>4}  ({:.0}%)",
        summary.sentiment.neutral,
        summary.percent(summary.sentiment.neutral)
    );
    println!(
        "  😔 negative: {:>4}  ({:.0}%)",
        summary.sentiment.negative,
        summary.percent(summary.sentiment.negative)
    );
    println!();
    println!("Security Analysis");
    println!(
        "  ✅ safe:     {:>4}  ({:.0}%)",
        summary.security.safe,
        summary.percent(summary.security.safe)
    );
    println!(
        "  ⚠️ caution:  {:>4}  ({:.0}%)",
        summary.security.caution,
        summary.percent(summary.security.caution)
    );
    println!(
        "  🚨 phishing: {:>4}  ({:.0}%)",
        summary.security.phishing_suspected,
        summary.percent(summary.security.phishing_suspected)
    );
    println!();
    println!("Sentiment Trend (oldest to newest)");
    let series: Vec<String> = summary
        .score_series
        .iter()
        .map(|s| format!("{:+.2}", s))
        .collect();
    println!("  {}", series.join("  "));
    Ok(())
}
