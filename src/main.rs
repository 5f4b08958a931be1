use anyhow::Context;
use car_parking::config::LogFormat;
use car_parking::utils::error::ErrorSeverity;
use car_parking::utils::{logger, validation::Validate};
use car_parking::{CliConfig, ParkingEngine, ParkingError, SettingsProvider, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting car-parking CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let shadowed = config.shadowed_run_flags();
    if !shadowed.is_empty() {
        tracing::warn!(
            "⚠️ --config takes precedence; ignoring {}",
            shadowed.join(", ")
        );
    }

    match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            execute(toml)
        }
        None => execute(config),
    }
}

fn execute<S: SettingsProvider + Validate>(settings: S) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = ParkingEngine::new(settings);
    let stdout = std::io::stdout();

    match engine.run(stdout.lock()) {
        Ok(report) => {
            tracing::debug!("Run stats: {:?}", report.stats);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn report_failure(e: &ParkingError) {
    tracing::error!(
        "❌ Parking run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}
