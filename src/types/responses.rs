//! Formato da resposta do oráculo.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{AskError, AskResult};

/// Campo `result` de uma resposta do oráculo.
///
/// Dependendo do deploy o oráculo envia um inteiro JSON ou a string decimal
/// de um. Qualquer outra coisa é guardada para aparecer no erro.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultField {
    Integer(i64),
    Text(String),
    Other(Value),
}

impl ResultField {
    /// Converte o campo na resposta inteira para `n`.
    pub fn into_value(self, n: u64) -> AskResult<i64> {
        match self {
            Self::Integer(v) => Ok(v),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| AskError::MalformedResult { n, value: s }),
            Self::Other(Value::Null) => Err(AskError::MissingResult(n)),
            Self::Other(v) => Err(AskError::MalformedResult {
                n,
                value: v.to_string(),
            }),
        }
    }
}

/// Corpo decodificado da resposta do oráculo.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleResponse {
    pub result: Option<ResultField>,
}

impl OracleResponse {
    /// Decodifica o corpo da resposta. O corpo deve ser um objeto JSON.
    pub fn parse(body: &str, n: u64) -> AskResult<Self> {
        let mut object: Map<String, Value> =
            serde_json::from_str(body).map_err(|e| AskError::Decode {
                n,
                reason: e.to_string(),
            })?;

        let result = match object.remove("result") {
            Some(value) => Some(serde_json::from_value(value)?),
            None => None,
        };

        Ok(Self { result })
    }

    /// Extrai a resposta inteira.
    pub fn into_value(self, n: u64) -> AskResult<i64> {
        self.result
            .ok_or(AskError::MissingResult(n))?
            .into_value(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_result() {
        let response = OracleResponse::parse(r#"{"result": 42, "seed": "abc"}"#, 3).unwrap();
        assert_eq!(response.result, Some(ResultField::Integer(42)));
        assert_eq!(response.into_value(3).unwrap(), 42);
    }

    #[test]
    fn test_string_result() {
        let response = OracleResponse::parse(r#"{"result": "-17"}"#, 3).unwrap();
        assert_eq!(response.into_value(3).unwrap(), -17);
    }

    #[test]
    fn test_missing_result() {
        let response = OracleResponse::parse(r#"{"seed": "abc", "n": 3}"#, 3).unwrap();
        assert!(matches!(response.into_value(3), Err(AskError::MissingResult(3))));

        let response = OracleResponse::parse(r#"{"result": null}"#, 5).unwrap();
        assert!(matches!(response.into_value(5), Err(AskError::MissingResult(5))));
    }

    #[test]
    fn test_malformed_result() {
        for body in [
            r#"{"result": 1.5}"#,
            r#"{"result": "twelve"}"#,
            r#"{"result": [1]}"#,
            r#"{"result": 18446744073709551615}"#,
        ] {
            let response = OracleResponse::parse(body, 7).unwrap();
            assert!(
                matches!(response.into_value(7), Err(AskError::MalformedResult { n: 7, .. })),
                "body {body} should be malformed"
            );
        }
    }

    #[test]
    fn test_undecodable_body() {
        for body in ["", "not json", "[1, 2]", "42"] {
            let err = OracleResponse::parse(body, 1).unwrap_err();
            assert!(matches!(err, AskError::Decode { n: 1, .. }), "body {body:?}");
        }
    }
}
