//! Avaliador recursivo com memoização.

use std::future::Future;
use std::pin::Pin;

use crate::cache::{CacheStats, MemoCache};
use crate::oracle::Oracle;
use crate::types::config::{EvaluatorConfig, MemoStrategy};
use crate::{AskError, AskResult};

/// Future retornada pelo ponto de entrada recursivo.
pub type EvalFuture<'a> = Pin<Box<dyn Future<Output = AskResult<i64>> + Send + 'a>>;

/// Valor de `f(n)` quando `n` é um caso base.
pub fn base_case(n: u64) -> Option<i64> {
    match n {
        0 => Some(1),
        2 => Some(2),
        _ => None,
    }
}

/// Contadores do trabalho feito por um avaliador.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Somas de quatro termos calculadas.
    pub expansions: u64,

    /// Memo dos subresultados pares.
    pub memo: CacheStats,
}

/// Avaliador de `f`.
///
/// - `f(0) = 1`, `f(2) = 2`
/// - `n` ímpar: respondido pelo oráculo
/// - `n >= 4` par: `f(n-1) + f(n-2) + f(n-3) + f(n-4)`
///
/// Os termos são avaliados nessa ordem e o primeiro erro aborta a avaliação
/// inteira. Entradas do memo gravadas antes do erro continuam válidas.
pub struct Evaluator<O> {
    oracle: O,
    memo: MemoCache<u64, i64>,
    strategy: MemoStrategy,
    expansions: u64,
}

impl<O: Oracle> Evaluator<O> {
    /// Cria um avaliador com o memo vazio.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            memo: MemoCache::new(),
            strategy: MemoStrategy::default(),
            expansions: 0,
        }
    }

    /// Cria um avaliador a partir da configuração.
    pub fn from_config(oracle: O, config: &EvaluatorConfig) -> Self {
        Self::new(oracle).with_strategy(config.memo_strategy)
    }

    /// Define a estratégia de memoização.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MemoStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Estratégia de memoização atual.
    pub fn strategy(&self) -> MemoStrategy {
        self.strategy
    }

    /// Oráculo usado para argumentos ímpares.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Valor memoizado de `n` par, se já calculado.
    pub fn memoized(&self, n: u64) -> Option<i64> {
        self.memo.peek(&n)
    }

    /// Contadores de trabalho.
    pub fn stats(&self) -> EvaluationStats {
        EvaluationStats {
            expansions: self.expansions,
            memo: self.memo.stats(),
        }
    }

    /// Calcula `f(n)`.
    pub fn evaluate(&mut self, n: u64) -> EvalFuture<'_> {
        Box::pin(async move {
            if let Some(value) = base_case(n) {
                return Ok(value);
            }

            if n % 2 == 1 {
                return self.oracle.ask(n).await;
            }

            if self.strategy == MemoStrategy::Entry {
                if let Some(value) = self.memo.get(&n) {
                    return Ok(value);
                }
                let value = self.expand(n).await?;
                return Ok(self.memo.insert(n, value));
            }

            self.expand(n).await
        })
    }

    async fn expand(&mut self, n: u64) -> AskResult<i64> {
        self.expansions += 1;
        tracing::trace!(n, "Expanding");

        let mut total: i64 = 0;
        for i in 1..=4 {
            let value = self.term(n - i).await?;
            total = total
                .checked_add(value)
                .ok_or(AskError::Overflow { n })?;
        }

        Ok(total)
    }

    /// Uma parcela da expansão.
    async fn term(&mut self, target: u64) -> AskResult<i64> {
        let memoize = self.strategy == MemoStrategy::Predecessors
            && target % 2 == 0
            && base_case(target).is_none();

        if !memoize {
            return self.evaluate(target).await;
        }

        if let Some(value) = self.memo.get(&target) {
            return Ok(value);
        }

        let value = self.evaluate(target).await?;
        Ok(self.memo.insert(target, value))
    }
}
