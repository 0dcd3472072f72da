//! Transporte HTTP para o oráculo remoto.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::base::Oracle;
use crate::types::config::OracleConfig;
use crate::types::responses::OracleResponse;
use crate::{AskError, AskResult};

/// Oráculo que faz uma requisição GET por chamada.
///
/// Não há cache neste nível; use [`CachedOracle`](super::CachedOracle)
/// para deduplicar chamadas.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    base_url: Url,
    seed: String,
    client: Client,
}

impl HttpOracle {
    /// Cria um oráculo para `seed` usando o endpoint de `config`.
    pub fn new(seed: impl Into<String>, config: &OracleConfig) -> AskResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AskError::config(format!("url do oráculo inválida '{}': {}", config.base_url, e))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(|e| {
            AskError::config(format!("não foi possível criar o cliente HTTP: {}", e))
        })?;

        Ok(Self {
            base_url,
            seed: seed.into(),
            client,
        })
    }

    /// Seed enviada em toda requisição.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Monta a URL da requisição para `n`.
    pub fn request_url(&self, n: u64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("seed", &self.seed)
            .append_pair("n", &n.to_string());
        url
    }
}

#[async_trait]
impl Oracle for HttpOracle {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&mut self, n: u64) -> AskResult<i64> {
        let url = self.request_url(n);
        tracing::debug!(n, url = %url, "Asking oracle");

        let transport = |source| AskError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(n, status = status.as_u16(), "Oracle rejected request");
            return Err(AskError::Status {
                n,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let value = OracleResponse::parse(&body, n)?.into_value(n)?;

        tracing::debug!(n, value, "Oracle answered");
        Ok(value)
    }
}
