/// Parallel decoding of independent dumps.
/// Each dump gets its own decoder and session registry; results come back in
/// input order regardless of completion order.

use anyhow::Result;
use rayon::prelude::*;
use serde_json::Value;

use crate::config::DecodeConfig;
use crate::domain::{decode, DecodeError, ParsedUnit};

/// Build a local pool using half the cores, minimum 1 worker.
pub fn build_pool() -> Result<rayon::ThreadPool> {
    let cores = num_cpus::get();
    let workers = std::cmp::max(1, cores / 2);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    tracing::debug!(workers, cores, "initialized decode pool");
    Ok(pool)
}

/// Decode every dump on `pool`.
pub fn decode_batch_in(
    pool: &rayon::ThreadPool,
    raws: &[Value],
    config: &DecodeConfig,
) -> Vec<Result<ParsedUnit, DecodeError>> {
    pool.install(|| raws.par_iter().map(|raw| decode(raw, config)).collect())
}

pub fn decode_batch(raws: &[Value], config: &DecodeConfig) -> Result<Vec<Result<ParsedUnit, DecodeError>>> {
    let pool = build_pool()?;
    Ok(decode_batch_in(&pool, raws, config))
}
