//! Tabelas de memo por execução.
//!
//! Tanto o memo de subresultados pares do avaliador quanto o cache de
//! respostas do cliente do oráculo são instâncias de [`MemoCache`]. São
//! criadas por componente e descartadas com ele; nada é persistido.

mod memo;

pub use memo::{CacheStats, MemoCache};
