mod generate;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use guest_hours_core::constants::{DEFAULT_FETCH_TIMEOUT, DEFAULT_TARGET_LABEL, DEFAULT_TIMEZONE};

#[derive(Parser)]
#[command(name = "guest-hours")]
#[command(about = "Fetch location calendars and build a page listing each location's next guest hours")]
struct Cli {
    /// JSON file mapping location names to feed URLs under "calendar_feeds"
    #[arg(long, default_value = "feeds.json")]
    feeds: PathBuf,

    /// HTML template containing %locations_content% and %last_updated%
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Where to write the generated page
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Event name to look for in each feed
    #[arg(long, default_value = DEFAULT_TARGET_LABEL)]
    label: String,

    /// Timezone used to display times (IANA name)
    #[arg(long, default_value = DEFAULT_TIMEZONE, value_parser = parse_timezone)]
    timezone: Tz,

    /// Per-feed request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Treat this RFC 3339 instant as "now" instead of the current time
    #[arg(long, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,
}

impl From<Cli> for generate::GenerateArgs {
    fn from(cli: Cli) -> Self {
        generate::GenerateArgs {
            feeds: cli.feeds,
            template: cli.template,
            output: cli.output,
            label: cli.label,
            timezone: cli.timezone,
            timeout: Duration::from_secs(cli.timeout_secs),
            now: cli.now,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    generate::run(cli.into()).await
}

fn parse_timezone(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|_| format!("Unknown timezone '{}'. Expected an IANA name like America/New_York", s))
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp '{}': {}. Expected RFC 3339", s, e))
}
