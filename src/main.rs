use clap::Parser;
use employee_query::utils::{logger, validation::Validate};
use employee_query::{render, sample_employees, CliConfig, QueryParams, QueryReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting employee-query");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證設定
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let format = config.output_format();
    let report = QueryReport::new(config);
    let mut employees = sample_employees();

    match report
        .run(&mut employees)
        .and_then(|sections| render(format, &sections))
    {
        Ok(output) => {
            println!("{}", output);
            tracing::info!("✅ All queries completed");
        }
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
