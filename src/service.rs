//! HTTP adapter contract
//!
//! Framework-agnostic handlers for a `GET /translate?number=<n>` style endpoint.
//! They never fail: every outcome becomes a [`Reply`] with a status code and a
//! JSON body, ready to be written by whatever server mounts them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::FormatError;
use crate::formatter::Formatter;

/// Name of the query parameter carrying the number
pub const NUMBER_PARAM: &str = "number";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Successful response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Status code and JSON body to send back
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn from_result(result: Result<String, FormatError>) -> Self {
        match result {
            Ok(translation) => Reply {
                status: STATUS_OK,
                body: serde_json::json!(TranslationResponse { translation }),
            },
            Err(e) => {
                let status = if e.is_client_error() {
                    STATUS_BAD_REQUEST
                } else {
                    warn!(error = %e, "translation failed");
                    STATUS_INTERNAL_ERROR
                };
                Reply::error(status, e.to_string())
            }
        }
    }

    fn error(status: u16, detail: String) -> Self {
        Reply {
            status,
            body: serde_json::json!(ErrorResponse { detail }),
        }
    }
}

/// Handle the raw value of the `number` query parameter
///
/// # Examples
/// ```
/// use french_numerals::{Dialect, Formatter};
/// use french_numerals::service::translate_query;
///
/// let formatter = Formatter::new(Dialect::Standard).unwrap();
/// let reply = translate_query(&formatter, Some("71"));
/// assert_eq!(reply.status, 200);
/// assert_eq!(reply.body["translation"], "soixante-et-onze");
/// ```
pub fn translate_query(formatter: &Formatter, number: Option<&str>) -> Reply {
    match number {
        Some(text) => Reply::from_result(formatter.format_str(text)),
        None => Reply::error(
            STATUS_BAD_REQUEST,
            format!("Missing required query parameter: {NUMBER_PARAM}"),
        ),
    }
}

/// Handle a number given as a JSON value
///
/// Only JSON integers are numbers here: `12.0`, `"12"` and `true` are invalid input.
pub fn translate_json(formatter: &Formatter, value: &Value) -> Reply {
    Reply::from_result(format_json_value(formatter, value))
}

fn format_json_value(formatter: &Formatter, value: &Value) -> Result<String, FormatError> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(n) => formatter.format(n),
            // Numbers keep their literal text, so integers beyond i64 stay integers
            // here and fractions or exponents are rejected by the parser.
            None => formatter.format_str(&number.to_string()),
        },
        other => Err(FormatError::invalid_input(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dialect;
    use serde_json::json;

    #[test]
    fn test_json_integer_kinds() {
        let formatter = Formatter::new(Dialect::Standard).unwrap();

        let reply = translate_json(&formatter, &json!(99));
        assert_eq!(reply.status, STATUS_OK);
        assert_eq!(reply.body, json!({ "translation": "quatre-vingt-dix-neuf" }));

        let reply = translate_json(&formatter, &json!(u64::MAX));
        assert_eq!(reply.status, STATUS_BAD_REQUEST);
        assert_eq!(
            reply.body["detail"],
            "Number out of supported range: 18446744073709551615 (must be between 0 and 999,999)"
        );
    }

    #[test]
    fn test_json_integers_beyond_u64_are_out_of_range() {
        let formatter = Formatter::new(Dialect::Standard).unwrap();

        let value: Value = serde_json::from_str("100000000000000000000000").unwrap();
        let reply = translate_json(&formatter, &value);
        assert_eq!(reply.status, STATUS_BAD_REQUEST);
        assert_eq!(
            reply.body["detail"],
            "Number out of supported range: 100000000000000000000000 (must be between 0 and 999,999)"
        );

        let value: Value = serde_json::from_str("-100000000000000000000000").unwrap();
        let reply = translate_json(&formatter, &value);
        assert_eq!(
            reply.body["detail"],
            "Number out of supported range: -100000000000000000000000 (must be between 0 and 999,999)"
        );

        let value: Value = serde_json::from_str("1e3").unwrap();
        let detail = translate_json(&formatter, &value).body["detail"].clone();
        assert_eq!(detail, "Number must be an integer, got \"1e3\"");
    }

    #[test]
    fn test_internal_errors_are_server_errors() {
        for error in [
            FormatError::EmptyInput,
            FormatError::Vocabulary("missing [be] table".to_string()),
        ] {
            let detail = error.to_string();
            let reply = Reply::from_result(Err(error));
            assert_eq!(reply.status, STATUS_INTERNAL_ERROR);
            assert_eq!(reply.body, serde_json::json!({ "detail": detail }));
        }
    }

    #[test]
    fn test_json_non_integers_are_invalid() {
        let formatter = Formatter::new(Dialect::Standard).unwrap();
        for value in [json!(12.0), json!("12"), json!(true), json!(null), json!([1])] {
            let reply = translate_json(&formatter, &value);
            assert_eq!(reply.status, STATUS_BAD_REQUEST, "value {value}");
            let detail = reply.body["detail"].as_str().unwrap();
            assert!(detail.starts_with("Number must be an integer"), "{detail}");
        }
    }
}
