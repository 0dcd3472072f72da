//! Trait base para oráculos.

use async_trait::async_trait;

use crate::AskResult;

/// Autoridade que resolve `f(n)` para `n` ímpar.
///
/// O avaliador só enxerga esta trait; em testes roda contra um stub
/// determinístico.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Retorna o nome do oráculo, usado nos logs.
    fn name(&self) -> &str;

    /// Resolve `f(n)`.
    ///
    /// Só é chamado com `n` ímpar. Erros são retornados como vieram e nunca
    /// substituídos por um valor padrão.
    async fn ask(&mut self, n: u64) -> AskResult<i64>;
}

#[async_trait]
impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn ask(&mut self, n: u64) -> AskResult<i64> {
        (**self).ask(n).await
    }
}
