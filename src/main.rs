use chrono::Utc;

use hr_notify::config::AppConfig;
use hr_notify::error::Result;
use hr_notify::notify::RecordAssembler;
use hr_notify::source::{JsonFileSource, MessageSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout stays pure JSON)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export HR_NOTIFY_EVENT=termination");
        eprintln!("  export HR_NOTIFY_INPUT=./messages.json");
        std::process::exit(1);
    });

    let source = JsonFileSource::with_pages(config.inputs.clone());

    eprintln!("hr-notify v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Event: {}", config.event);
    eprintln!(
        "   Input: {}",
        source
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // ── Fetch ───────────────────────────────────────────────────────────
    let messages = source.fetch(&config.fetch_query()).await?;
    tracing::info!(
        source = source.name(),
        count = messages.len(),
        "Loaded notification messages"
    );

    // ── Extract ─────────────────────────────────────────────────────────
    let assembler = RecordAssembler::new(config.event, config.assembly_options());
    let assembly = assembler.assemble(&messages, Utc::now());

    let report = assembly.to_json(assembler.kind(), config.names_only);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
