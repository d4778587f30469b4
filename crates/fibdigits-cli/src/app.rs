//! Run selection, timing, cross-validation, and presentation.

use std::time::{Duration, Instant};

use anyhow::Result;

use fibdigits_core::{AlgorithmVariant, EngineFactory, FibError};

use crate::config::AppConfig;
use crate::output::{format_duration, format_result, write_to_file};

/// One timed engine run.
pub struct RunResult {
    pub variant: AlgorithmVariant,
    pub digits: String,
    pub duration: Duration,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.list {
        for v in AlgorithmVariant::ALL {
            println!("{v}");
        }
        return Ok(());
    }

    if config.k > config.max_index {
        return Err(FibError::IndexOutOfRange {
            k: config.k,
            max: config.max_index,
        }
        .into());
    }

    let variants = select_variants(config)?;
    let results = execute(&variants, config.k);
    cross_validate(&results, config.k)?;

    for result in &results {
        present(result, config);
    }

    if let Some(ref path) = config.output {
        if let Some(result) = results.first() {
            write_to_file(path, &result.digits)?;
        }
    }

    Ok(())
}

fn select_variants(config: &AppConfig) -> Result<Vec<AlgorithmVariant>, FibError> {
    if config.variant == "all" {
        Ok(AlgorithmVariant::ALL.to_vec())
    } else {
        Ok(vec![config.variant.parse()?])
    }
}

/// Time each engine on `k`. Engines whose exact range ends below `k` are
/// dropped rather than compared against wrapped values.
fn execute(variants: &[AlgorithmVariant], k: u64) -> Vec<RunResult> {
    let factory = EngineFactory::new();
    let mut results = Vec::with_capacity(variants.len());

    for &variant in variants {
        let engine = factory.get(variant);
        if engine.exact_limit().is_some_and(|limit| k > limit) {
            tracing::warn!(%variant, k, "skipping variant beyond its exact range");
            continue;
        }

        let start = Instant::now();
        let digits = engine.compute(k);
        let duration = start.elapsed();
        tracing::debug!(%variant, k, ?duration, "engine finished");

        results.push(RunResult {
            variant,
            digits,
            duration,
        });
    }

    results
}

/// Independent engines must produce byte-identical digit strings.
fn cross_validate(results: &[RunResult], k: u64) -> Result<(), FibError> {
    for pair in results.windows(2) {
        if pair[0].digits != pair[1].digits {
            return Err(FibError::Mismatch {
                left: pair[0].variant.to_string(),
                right: pair[1].variant.to_string(),
                k,
            });
        }
    }
    Ok(())
}

fn present(result: &RunResult, config: &AppConfig) {
    if config.quiet {
        println!("{}", result.digits);
        return;
    }

    println!(
        "{:<18} {:>10}  F({}) = {}",
        result.variant,
        format_duration(result.duration),
        config.k,
        format_result(&result.digits, config.verbose)
    );
}
