use anyhow::Context;
use church_census::utils::{logger, validation::Validate};
use church_census::{CensusEngine, CensusError, CliConfig, DemoReport};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting church-census");
    tracing::debug!("CLI config: {:?}", cli);

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ church-census failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if cli.json {
        let json = report.to_json().context("failed to render JSON report")?;
        println!("{}", json);
    } else {
        for line in report.lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<DemoReport, CensusError> {
    let config = cli.load()?;

    // 驗證配置
    config.validate()?;
    tracing::debug!("Configuration validated: {:?}", config);

    let engine = CensusEngine::new(config.settings(), config.roster_source());
    engine.run()
}
