//! Interface de linha de comando.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::types::config::{Config, MemoStrategy};
use crate::{AskError, AskResult};

/// recursive-ask - calcula f(n) com a ajuda de um oráculo remoto.
#[derive(Parser, Debug)]
#[command(name = "recursive-ask")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed do problema, repassada ao oráculo sem alterações.
    pub seed: String,

    /// Argumento de f.
    #[arg(value_parser = parse_argument)]
    pub n: u64,

    /// Arquivo de configuração. Ignorado quando não existe.
    #[arg(short, long, default_value = "recursive-ask.toml")]
    pub config: PathBuf,

    /// Endpoint do oráculo, sobrescreve a configuração.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Timeout das requisições ao oráculo em segundos, sobrescreve a configuração.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Estratégia de memoização, sobrescreve a configuração.
    #[arg(long, value_enum)]
    pub memo: Option<MemoStrategy>,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Carrega o arquivo de configuração, se existir, e aplica as flags.
    pub fn resolve_config(&self) -> AskResult<Config> {
        let mut config = if self.config.exists() {
            Config::load(&self.config)?
        } else {
            Config::default_config()
        };

        if let Some(url) = &self.base_url {
            config.oracle.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.oracle.timeout_secs = Some(secs);
        }
        if let Some(strategy) = self.memo {
            config.evaluator.memo_strategy = strategy;
        }

        Ok(config)
    }

    /// Nível de log: as flags têm precedência sobre a configuração.
    pub fn log_level<'a>(&self, config: &'a Config) -> &'a str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            &config.general.log_level
        }
    }
}

/// Interpreta o argumento `n` como um inteiro decimal não negativo.
pub fn parse_argument(raw: &str) -> AskResult<u64> {
    raw.parse::<u64>().map_err(|_| {
        AskError::InvalidArgument(format!(
            "n deve ser um inteiro não negativo, '{}' recebido",
            raw
        ))
    })
}
