use employee_review_report::config::{get_config, init_config};
use employee_review_report::pipeline;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // stdout is reserved for the summary
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    init_config()?;
    let config = get_config();

    tracing::info!(
        employees = %config.employees_file.display(),
        reviews = %config.reviews_file.display(),
        output = %config.output_file.display(),
        duplicate_policy = %config.duplicate_policy,
        "Building employee review report"
    );

    let summary = pipeline::run(config)?;
    println!("{}", summary);
    Ok(())
}
