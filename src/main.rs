use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flyt::{load_seed, report, Config, OutputFormat};
use flyt_core::write_lines;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: FLYT_SEED_PATH (default: built-in sample network)");
            eprintln!("Optional: FLYT_VIEWER (default: charliebrown)");
            eprintln!("Optional: FLYT_OUTPUT (text or json, default: text)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Flyt");
    tracing::info!("Viewer: {}", config.viewer);

    let seed = match load_seed(config.seed_path.as_deref()) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Seed error: {}", e);
            std::process::exit(1);
        }
    };

    let network = match seed.build(Utc::now()) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Seed error: {}", e);
            std::process::exit(1);
        }
    };

    let now = Utc::now();
    let result = match config.output {
        OutputFormat::Text => report::text(&network, &config.viewer, now).map(|lines| {
            if let Err(e) = write_lines(&mut std::io::stdout().lock(), &lines) {
                tracing::warn!("Failed to write report: {}", e);
            }
        }),
        OutputFormat::Json => {
            report::json(&network, &config.viewer, now).map(|output| println!("{}", output))
        }
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
