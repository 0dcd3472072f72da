//! Command implementations.

use crate::evaluator::Evaluator;
use crate::oracle::{Oracle, OracleClient};
use crate::types::config::Config;
use crate::AskResult;

/// Computes `f(n)` for `seed` against the configured oracle.
pub async fn solve(seed: &str, n: u64, config: &Config) -> AskResult<i64> {
    tracing::debug!(
        "Configuration: oracle={}, memo={:?}",
        config.oracle.base_url,
        config.evaluator.memo_strategy
    );

    let oracle = OracleClient::connect(seed, &config.oracle)?;
    solve_with(oracle, n, config).await
}

/// Computes `f(n)` with an already constructed oracle.
pub async fn solve_with<O: Oracle>(oracle: O, n: u64, config: &Config) -> AskResult<i64> {
    let mut evaluator = Evaluator::from_config(oracle, &config.evaluator);

    let result = evaluator.evaluate(n).await;

    let stats = evaluator.stats();
    tracing::debug!(
        n,
        oracle = evaluator.oracle().name(),
        expansions = stats.expansions,
        memo_hits = stats.memo.hits,
        memo_size = stats.memo.size,
        memo_hit_rate = stats.memo.hit_rate(),
        "Evaluation finished"
    );

    // main reports the error to the user; only trace it here.
    match &result {
        Ok(value) => tracing::info!(n, value, "Solved"),
        Err(e) => tracing::debug!(
            n,
            error = %e,
            oracle_failure = e.is_oracle_failure(),
            "Evaluation failed"
        ),
    }

    result
}
