//! Batch runner for the augmentation engine.
//!
//! Reads every JPEG/PNG in an input directory, runs each one through
//! [`augmentor_core::apply_transformations`] `count` times and writes the
//! results as `augmented_<i>_<name>` into an output directory.

pub mod batch;
pub mod config;

pub use batch::{run_batch, BatchConfig, BatchReport};
pub use config::{load_params_file, ParamOverrides};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
