use clap::{Parser, ValueEnum};
use tcx_laps::{
    ActivityParser,
    config::{AvgSpeedPolicy, ParserConfig},
    report::format_text,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Summarize the activities and laps of TCX files.
#[derive(Debug, Parser)]
#[command(name = "tcx-laps", version)]
struct Cli {
    /// TCX file paths or http(s) URLs
    #[arg(required = true)]
    inputs: Vec<String>,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Speed in m/s above which a trackpoint counts as moving
    /// [env: TCX_MOVING_SPEED_THRESHOLD, default: 1.0]
    #[arg(long)]
    threshold: Option<f64>,

    /// Treat a lap without an average speed extension as having no average
    /// speed instead of rejecting the file
    #[arg(long)]
    lenient: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<ParserConfig> {
    let mut config = ParserConfig::from_env()?;
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold)?;
    }
    if cli.lenient {
        config = config.with_avg_speed_policy(AvgSpeedPolicy::Lenient);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    tracing::debug!(
        "Moving speed threshold {} m/s, average speed policy {}",
        config.moving_speed_threshold,
        config.avg_speed_policy.as_str()
    );
    let parser = ActivityParser::new(config);

    for input in &cli.inputs {
        let activities = parser.parse_input(input).await?;
        tracing::info!("{}: {} activities", input, activities.len());

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&activities)?),
            OutputFormat::Text => print!("{}", format_text(&activities)),
        }
    }

    Ok(())
}
