use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let error_count = svclint::cli::run_cli()?;
    if error_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}
