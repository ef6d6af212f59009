//! Directory-to-directory augmentation runs.
//!
//! Loop order is repetition first, then source image: with two sources and
//! `count = 2` the engine sees `a, b, a, b`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use augmentor_core::codec::is_supported_path;
use augmentor_core::{apply_transformations, load_image, save_image, AugmentParams, Image};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Everything one batch run needs.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Augmented copies written per source image
    pub count: u32,
    pub params: AugmentParams,
    /// Seed for reproducible runs; `None` draws fresh entropy per call
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Form-level checks, run before any file is touched.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.count == 0 {
            bail!("count must be greater than 0");
        }
        if let Some(resize) = self.params.resize_factor {
            if !(0.0..=1.0).contains(&resize) {
                bail!("resize must be between 0 and 1, got {}", resize);
            }
        }
        self.params.validate().context("Invalid augmentation parameters")?;
        if !self.input_dir.is_dir() {
            bail!("input directory {} does not exist", self.input_dir.display());
        }
        Ok(())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Source images that decoded successfully
    pub sources: usize,
    /// Augmented files written
    pub written: usize,
    /// Unreadable sources plus augmentations that failed to run or save
    pub failed: usize,
}

/// Output file name for repetition `index` of `file_name`.
pub fn output_name(index: u32, file_name: &str) -> String {
    format!("augmented_{}_{}", index, file_name)
}

/// List the JPEG and PNG files directly inside `dir`, sorted by name.
pub fn list_source_images(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Read input directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_supported_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Generator for repetition `index` of source `image_index`.
///
/// Seeded runs give every call its own ChaCha stream so that the output of
/// one call does not depend on how many draws an earlier call made.
pub fn call_rng(seed: Option<u64>, index: u32, image_index: usize) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream((u64::from(index) << 32) | image_index as u64);
            rng
        }
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Run a full batch.
///
/// # Errors
///
/// Fails on invalid configuration, an unreadable input directory or an
/// output directory that cannot be created. Per-image failures are logged
/// and counted in the report instead.
pub fn run_batch(config: &BatchConfig) -> anyhow::Result<BatchReport> {
    config.validate()?;

    let paths = list_source_images(&config.input_dir)?;
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Create output directory {}", config.output_dir.display())
    })?;

    let mut report = BatchReport::default();
    let sources = load_sources(&paths, &mut report);
    tracing::info!(
        sources = sources.len(),
        count = config.count,
        output = %config.output_dir.display(),
        "starting batch"
    );

    for index in 0..config.count {
        for (image_index, (name, image)) in sources.iter().enumerate() {
            let mut rng = call_rng(config.seed, index, image_index);
            let target = config.output_dir.join(output_name(index, name));

            let result = apply_transformations(image, &config.params, &mut rng)
                .map_err(anyhow::Error::from)
                .and_then(|augmented| {
                    save_image(&augmented, &target).map_err(anyhow::Error::from)
                });

            match result {
                Ok(()) => {
                    report.written += 1;
                    tracing::info!(path = %target.display(), "saved augmented image");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(source = %name, repetition = index, error = %e, "augmentation failed");
                }
            }
        }
    }

    tracing::info!(
        written = report.written,
        failed = report.failed,
        "batch finished"
    );
    Ok(report)
}

fn load_sources(paths: &[PathBuf], report: &mut BatchReport) -> Vec<(String, Image)> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        match load_image(path) {
            Ok(image) => sources.push((name, image)),
            Err(e) => {
                report.failed += 1;
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable image");
            }
        }
    }
    report.sources = sources.len();
    sources
}
