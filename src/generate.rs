use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use guest_hours_core::render::{DisplayTime, validate_template};
use guest_hours_core::{
    AggregateOutcome, FeedFetcher, FeedsConfig, HoursError, HoursResult, HttpFetcher,
    NextOccurrence, RenderOptions, aggregate, output, render_page,
};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::info;

pub struct GenerateArgs {
    pub feeds: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub label: String,
    pub timezone: Tz,
    pub timeout: Duration,
    pub now: Option<DateTime<Utc>>,
}

/// Shows a spinner for the duration of each fetch.
struct SpinnerFetcher<F> {
    inner: F,
}

impl<F: FeedFetcher + Sync> FeedFetcher for SpinnerFetcher<F> {
    async fn fetch(&self, url: &str) -> HoursResult<String> {
        let spinner = create_spinner(format!("Fetching {}", url));
        let result = self.inner.fetch(url).await;
        spinner.finish_and_clear();
        result
    }
}

fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    // Config and template problems abort before any feed is fetched
    let feeds = FeedsConfig::load(&args.feeds)?;

    let template = std::fs::read_to_string(&args.template).map_err(|e| {
        HoursError::Template(format!("Could not read {}: {}", args.template.display(), e))
    })?;
    validate_template(&template)
        .with_context(|| format!("Invalid template {}", args.template.display()))?;

    let fetcher = SpinnerFetcher {
        inner: HttpFetcher::new(args.timeout)?,
    };
    let now = args.now.unwrap_or_else(Utc::now);

    let outcome = aggregate(&feeds, &fetcher, &args.label, now).await;
    print_outcome(&outcome, &args);

    if outcome.all_failed() {
        anyhow::bail!(
            "All {} feeds failed; {} was left unchanged",
            outcome.failures.len(),
            args.output.display()
        );
    }

    let options = RenderOptions::new(args.timezone, &args.label);
    let html = render_page(&outcome.report, now, &template, &options)?;
    output::write_atomic(&args.output, &html)?;
    info!(
        path = %args.output.display(),
        locations = outcome.report.len(),
        failed = outcome.failures.len(),
        "Generated page"
    );

    println!("\nGenerated page: {}", args.output.display());

    Ok(())
}

fn print_outcome(outcome: &AggregateOutcome, args: &GenerateArgs) {
    for entry in &outcome.report {
        match entry.next {
            NextOccurrence::Upcoming(instant) => {
                let display = DisplayTime::new(instant, args.timezone);
                println!("📍 {}: {}", entry.location, display.long);
            }
            NextOccurrence::NoneFound => {
                let msg = format!("no upcoming {}", args.label);
                println!("📍 {}: {}", entry.location, msg.dimmed());
            }
        }
    }

    for failure in &outcome.failures {
        println!("📍 {}: {}", failure.location, failure.error.to_string().red());
    }
}
