use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

// 報表輸出在 stdout，日誌一律寫到 stderr
fn build_subscriber(filter: EnvFilter, json: bool) -> impl tracing::Subscriber + Send + Sync {
    fn fmt_layer<S>() -> tracing_subscriber::fmt::Layer<
        S,
        tracing_subscriber::fmt::format::DefaultFields,
        tracing_subscriber::fmt::format::Format,
        fn() -> std::io::Stderr,
    > {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr as fn() -> std::io::Stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    }

    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| fmt_layer().compact()))
        .with(json.then(|| fmt_layer().json()))
}

fn init_logger(filter: EnvFilter, json: bool) {
    build_subscriber(filter, json).init();
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        default_filter("employee_query=debug,info")
    } else {
        default_filter("employee_query=info")
    };
    init_logger(filter, false);
}

pub fn init_json_logger() {
    init_logger(default_filter("employee_query=info"), true);
}
