use clap::Parser;
use price_scout::utils::{logger, validation::Validate};
use price_scout::{CliConfig, LocalStorage, PricePipeline, ScoutEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting price-scout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PricePipeline::new(storage, config)?;

    let engine = ScoutEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Price lookup completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Price lookup completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Price lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                price_scout::utils::error::ErrorSeverity::Low => 0,
                price_scout::utils::error::ErrorSeverity::Medium => 2,
                price_scout::utils::error::ErrorSeverity::High => 1,
                price_scout::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
