use clap::Parser;
use pyproject_env::core::translate;
use pyproject_env::utils::{logger, validation::Validate};
use pyproject_env::CliConfig;
use pyproject_env::ConfigProvider as _;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting pyproject-env");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    match translate::run(&config) {
        Ok(records) => {
            tracing::info!(
                "✅ Wrote {} environment file(s) to {}",
                records.len(),
                config.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Translation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
