use clap::Parser;
use employee_query::utils::{logger, validation::Validate};
use employee_query::{render, sample_employees, QueryParams, QueryReport, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Run the employee queries with parameters from a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "employee-query.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,

    /// Show the resolved parameters without running the queries
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based employee report");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No queries will be executed");
        display_config_summary(&config);
        return Ok(());
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
            tracing::info!("✅ Report '{}' completed", report.params().report_name());
        }
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let mut ids: Vec<u32> = config.matching_ids().into_iter().collect();
    ids.sort_unstable();

    println!("📋 Report: {}", config.report_name());
    println!("   Search term:          {}", config.search_term());
    println!("   Store id:             {}", config.store_id());
    println!("   Excluded department:  {}", config.excluded_department());
    println!(
        "   Cycle:                offset {} of >= {}",
        config.cycle_offset(),
        config.cycle_target_len()
    );
    println!("   Matching ids:         {:?}", ids);
    println!(
        "   Salary raise:         +{} for {}",
        config.raise_amount(),
        config.raise_department()
    );
    println!("   Predicate department: {}", config.predicate_department());
    println!("   Output format:        {:?}", config.output_format());
}
