//! Avaliador recursivo de `f`.
//!
//! Argumentos pares são expandidos pela recorrência de quatro termos e
//! memoizados; argumentos ímpares são delegados a um
//! [`Oracle`](crate::oracle::Oracle).
//!
//! ## Estratégias de memo
//!
//! | Estratégia     | Chaves armazenadas                                  |
//! |----------------|-----------------------------------------------------|
//! | `Predecessors` | os termos pares `n-i` consumidos por uma expansão   |
//! | `Entry`        | todo argumento par, inclusive o de nível superior   |
//!
//! As duas dão os mesmos valores. Só diferem em expandir de novo ou não uma
//! chamada de nível superior repetida.

mod engine;

pub use engine::{base_case, EvalFuture, EvaluationStats, Evaluator};
pub use crate::types::config::MemoStrategy;
