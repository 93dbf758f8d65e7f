//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chatlens::analytics::{Analyzer, ChatReport};
use chatlens::cli::Args;
use chatlens::core::{ParseStats, RecordTable, apply_filters};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::parsers::create_parser;
use chatlens::ChatlensError;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "chatlens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let sender = args.sender_filter();
    let filter_config = args.filter_config()?;

    // Stop words load before parsing so a bad path fails fast
    let analyzer = Analyzer::new(args.analysis_config())?;

    let parser = create_parser(args.parse_config());
    let parse_start = Instant::now();
    let table = parser.parse(&args.input)?;
    let parse_time = parse_start.elapsed();
    debug!(records = table.len(), elapsed = ?parse_time, "parsed export");

    let table = if filter_config.is_active() {
        apply_filters(&table, &filter_config)
    } else {
        table
    };

    if let Some(path) = &args.export {
        export_table(args, &table, path)?;
    }

    let report = analyzer.report(&sender, &table);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header(args, &table);
    print_report(&report);

    println!();
    println!("⚡ Performance:");
    println!("   Parse time:  {:.2}s", parse_time.as_secs_f64());
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn export_table(args: &Args, table: &RecordTable, path: &std::path::Path) -> Result<(), ChatlensError> {
    let path_str = path.to_string_lossy();
    let format: OutputFormat = match args.format {
        Some(f) => f.into(),
        None => OutputFormat::from_path(path).unwrap_or_else(|e| {
            warn!("{e}; exporting as CSV");
            OutputFormat::Csv
        }),
    };
    write_to_format(table, &path_str, format, &args.output_config())?;
    if !args.json {
        println!("💾 Exported {} records as {} to {}", table.len(), format, path_str);
    }
    Ok(())
}

fn print_header(args: &Args, table: &RecordTable) {
    let parse = ParseStats::from_table(table);

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input.display());
    println!("📅 Dates:    {} (century {})", args.parse_config().date_order, args.century);
    if let Some(after) = &args.after {
        println!("📅 After:    {}", after);
    }
    if let Some(before) = &args.before {
        println!("📅 Before:   {}", before);
    }
    println!("👤 Selected: {}", args.sender_filter());
    println!();
    println!(
        "   {} records, {} senders, {} notifications",
        parse.records, parse.senders, parse.notifications
    );
    if parse.missing_timestamps > 0 {
        println!(
            "   ⚠️  {} records without a readable timestamp ({:.1}% coverage)",
            parse.missing_timestamps,
            parse.timestamp_coverage()
        );
    }
}

fn print_report(report: &ChatReport) {
    let stats = &report.stats;
    println!();
    println!("📊 Top Statistics:");
    println!("   Messages:  {}", stats.messages);
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);

    if report.filter.is_overall() && !report.busy_users.is_empty() {
        println!();
        println!("👥 Most Busy Users:");
        for user in report.busy_users.iter().take(10) {
            println!("   {:<20} {:>7} words", user.user, user.words);
        }
        println!("   Message share:");
        for share in report.sender_share.iter().take(10) {
            println!("   {:<20} {:>6.2}%", share.user, share.percent);
        }
    }

    if !report.monthly.is_empty() {
        println!();
        println!("📈 Monthly Timeline:");
        for point in &report.monthly {
            println!("   {:<16} {}", point.label, point.messages);
        }
    }

    if let (Some(first), Some(last)) = (report.daily.first(), report.daily.last()) {
        let busiest = report.daily.iter().max_by_key(|d| d.messages);
        println!();
        println!("🗓️  Daily Timeline: {} to {} ({} active days)", first.date, last.date, report.daily.len());
        if let Some(day) = busiest {
            println!("   Busiest day: {} ({} messages)", day.date, day.messages);
        }
    }

    if !report.week_activity.is_empty() {
        println!();
        println!("📆 Activity Map:");
        println!("   Busiest days:   {}", join_counts(&report.week_activity));
        println!("   Busiest months: {}", join_counts(&report.month_activity));
    }

    println!();
    if report.heatmap.is_empty() {
        println!("🔥 Weekly Heatmap: no timestamped messages");
    } else {
        println!("🔥 Weekly Heatmap ({} cells):", report.heatmap.total());
        for (day, row) in report.heatmap.days.iter().zip(&report.heatmap.counts) {
            let busiest = row
                .iter()
                .enumerate()
                .max_by_key(|&(_, count)| *count)
                .map(|(i, _)| report.heatmap.periods[i].as_str())
                .unwrap_or("-");
            println!("   {:<10} {:>5} messages, peak {}", day, row.iter().sum::<usize>(), busiest);
        }
    }

    if !report.hourly.is_empty() {
        println!();
        println!("🕐 Hourly Activity:");
        for (hour, count) in &report.hourly {
            println!("   {:02}:00  {}", hour, count);
        }
    }

    if !report.top_words.is_empty() {
        println!();
        println!("💬 Most Common Words:");
        let words: Vec<String> = report
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        println!("   {}", words.join(", "));
    }

    if !report.emoji.is_empty() {
        println!();
        println!("😀 Emoji Analysis:");
        let emoji: Vec<String> = report
            .emoji
            .iter()
            .take(10)
            .map(|e| format!("{} {}", e.emoji, e.count))
            .collect();
        println!("   {}", emoji.join("  "));
    }

    if !report.message_types.is_empty() {
        println!();
        println!("🧩 Message Types:");
        for kind in &report.message_types {
            println!("   {:<6} {}", kind.kind, kind.count);
        }
    }

    println!();
    println!(
        "🎭 Sentiment: {:.3} ({})",
        report.sentiment.score, report.sentiment.label
    );
}

fn join_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .take(3)
        .map(|(name, n)| format!("{} ({})", name, n))
        .collect::<Vec<_>>()
        .join(", ")
}
