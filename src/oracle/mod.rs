//! Cliente do oráculo remoto.
//!
//! [`HttpOracle`] fala com o endpoint, [`CachedOracle`] guarda as respostas
//! já resolvidas nesta execução. [`OracleClient`] é a composição dos dois.

mod base;
mod cached;
mod http;

pub use base::Oracle;
pub use cached::{CachedOracle, OracleClient};
pub use http::HttpOracle;
