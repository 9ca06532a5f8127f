use clap::Parser;
use zip_coverage::core::engine::{self, CoverageEngine};
use zip_coverage::core::ConfigProvider;
use zip_coverage::utils::{logger, validation::Validate};
use zip_coverage::{CliConfig, CoverageError, CoverageTier, ZipCoverageClassifier};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - coverage is loaded and validated only");
        let source = engine::source_for(config.config_path());
        match ZipCoverageClassifier::from_source(source.as_ref()) {
            Ok(classifier) => print_coverage_summary(&classifier, &source.describe()),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    let engine = match CoverageEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    match engine.deliver(&report) {
        Ok(Some(rendered)) => println!("{}", rendered),
        Ok(None) => {}
        Err(e) => exit_with(&e),
    }

    if report.summary.invalid > 0 {
        tracing::warn!("⚠️ {} entr(y/ies) were not valid 5-digit zip codes", report.summary.invalid);
    }

    Ok(())
}

fn print_coverage_summary(classifier: &ZipCoverageClassifier, origin: &str) {
    let areas = classifier.areas();
    let overlap: Vec<&str> = areas.overlap().iter().map(|z| z.as_str()).collect();

    println!("✅ Coverage loaded from {}", origin);
    println!("   Deployment:    {}", areas.deployment);
    println!("   Service area:  {} zip(s)", areas.service_area.len());
    println!("   Extended area: {} zip(s)", areas.extended_area.len());
    if !overlap.is_empty() {
        println!("   In both lists (service wins): {}", overlap.join(", "));
    }
    for tier in CoverageTier::ALL {
        println!("   [{}] {}", tier, tier.message());
    }
}

fn exit_with(e: &CoverageError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Coverage lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
