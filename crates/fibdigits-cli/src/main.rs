//! fibdigits — compare Fibonacci engines over digit-string bignums.

use fibdigits_core::{exit_codes, FibError};

mod app;
mod config;
mod output;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_code_for(&err));
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Mismatch { .. }) => exit_codes::ERROR_MISMATCH,
        Some(FibError::IndexOutOfRange { .. } | FibError::UnknownVariant(_)) => {
            exit_codes::ERROR_CONFIG
        }
        None => exit_codes::ERROR_GENERIC,
    }
}
