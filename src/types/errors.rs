//! Tipos de erro do recursive-ask.

use thiserror::Error;

/// Tipo de resultado padrão.
pub type AskResult<T> = Result<T, AskError>;

/// Erros possíveis no recursive-ask.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Não foi possível acessar a url {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Código de resposta inválido {status} para n={n}")]
    Status { n: u64, status: u16 },

    #[error("Não foi possível parsear a resposta para n={n}: {reason}")]
    Decode { n: u64, reason: String },

    #[error("Resposta para n={0} sem o campo 'result'")]
    MissingResult(u64),

    #[error("Resposta para n={n} com 'result' não inteiro: {value}")]
    MalformedResult { n: u64, value: String },

    #[error("f({n}) não cabe em um inteiro de 64 bits")]
    Overflow { n: u64 },
}

impl AskError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Verdadeiro para as falhas ocorridas ao consultar o oráculo.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Status { .. }
                | Self::Decode { .. }
                | Self::MissingResult(_)
                | Self::MalformedResult { .. }
        )
    }
}
