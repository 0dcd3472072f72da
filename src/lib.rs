//! # recursive-ask
//!
//! Calcula `f(n)` onde `f(0) = 1`, `f(2) = 2`, argumentos ímpares são
//! resolvidos por um oráculo remoto e argumentos pares seguem
//! `f(n) = f(n-1) + f(n-2) + f(n-3) + f(n-4)`.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`evaluator`] - Avaliador recursivo com memoização
//! - [`oracle`] - Trait do oráculo, cliente HTTP e cache do oráculo
//! - [`cache`] - Tabelas de memo por execução
//! - [`types`] - Tipos compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod evaluator;
pub mod oracle;
pub mod types;

pub use types::config::Config;
pub use types::errors::{AskError, AskResult};
