//! Cache do oráculo: no máximo uma requisição por argumento distinto.

use async_trait::async_trait;

use super::base::Oracle;
use super::http::HttpOracle;
use crate::cache::{CacheStats, MemoCache};
use crate::types::config::OracleConfig;
use crate::AskResult;

/// Envolve um oráculo com um cache, por execução, das respostas resolvidas.
///
/// Só respostas bem sucedidas são armazenadas. Um `ask(n)` que falha não
/// altera o cache, então uma chamada posterior com o mesmo `n` chega de novo
/// ao oráculo interno.
pub struct CachedOracle<O> {
    inner: O,
    cache: MemoCache<u64, i64>,
}

/// Cliente do oráculo de produção: transporte HTTP atrás do cache.
pub type OracleClient = CachedOracle<HttpOracle>;

impl<O: Oracle> CachedOracle<O> {
    /// Envolve `inner` com um cache vazio.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: MemoCache::new(),
        }
    }

    /// O oráculo envolvido.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Resposta em cache para `n`, se houver. Não conta como consulta.
    pub fn cached(&self, n: u64) -> Option<i64> {
        self.cache.peek(&n)
    }

    /// Estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl CachedOracle<HttpOracle> {
    /// Cria o cliente HTTP do oráculo para `seed`.
    pub fn connect(seed: impl Into<String>, config: &OracleConfig) -> AskResult<Self> {
        Ok(Self::new(HttpOracle::new(seed, config)?))
    }
}

#[async_trait]
impl<O: Oracle> Oracle for CachedOracle<O> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn ask(&mut self, n: u64) -> AskResult<i64> {
        if let Some(value) = self.cache.get(&n) {
            tracing::trace!(n, value, "Oracle cache hit");
            return Ok(value);
        }

        let value = self.inner.ask(n).await?;
        Ok(self.cache.insert(n, value))
    }
}
