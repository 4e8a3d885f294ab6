use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the global tracing subscriber: INFO by default, crate-level
/// debug, overridable through `RUST_LOG`.
pub fn init_logging() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive("confcarbon=debug".parse().unwrap());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}
