//! Tabela de memo por execução.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Estatísticas do cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número de entradas armazenadas.
    pub size: usize,

    /// Consultas respondidas pelo cache.
    pub hits: u64,

    /// Consultas que não encontraram nada.
    pub misses: u64,
}

impl CacheStats {
    /// Fração das consultas que foram hits.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memo de valores já resolvidos de uma função pura.
///
/// As entradas vivem tanto quanto o memo: nada é invalidado ou removido, e
/// uma segunda inserção sob uma chave existente mantém o primeiro valor.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Copy,
{
    /// Cria um memo vazio.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Busca `key`, contando o hit ou miss.
    pub fn get(&self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(*value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Busca `key` sem alterar os contadores.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.entries.get(key).copied()
    }

    /// Armazena `value` se `key` ainda não existe. Retorna o valor armazenado.
    pub fn insert(&mut self, key: K, value: V) -> V {
        *self.entries.entry(key).or_insert(value)
    }

    /// Verdadeiro se `key` está armazenada.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Número de entradas armazenadas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verdadeiro se nada está armazenado.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retorna as estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash,
    V: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
