use fieldsy_admin::commands::Cli;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Tracing output is only wired up when the user opts in via RUST_LOG;
    // normal runs keep the console clean for table rendering.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
