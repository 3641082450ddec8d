mod env;
mod error;
mod shell;

use mailconfig_shared::ValidationSchema;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env::log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let schema = ValidationSchema::new(env::allowed_domain());

    tracing::info!("allowed email domain: {}", schema.allowed_domain());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Shell::new(schema).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
