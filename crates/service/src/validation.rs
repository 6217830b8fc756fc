//! Typed decoding of create payloads.
//!
//! A body either decodes into a complete value object or is rejected with one
//! of three kinds. There is no partially-decoded state.
use serde_json::{Map, Value};
use thiserror::Error;

use models::number::Number;
use models::record::NewRecord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Body absent, not JSON, or not a JSON object.
    #[error("Invalid request data")]
    MalformedPayload,
    /// One or more required fields absent (or `null`).
    #[error("Missing required fields")]
    MissingFields {
        required: &'static [&'static str],
        missing: Vec<&'static str>,
    },
    /// Field present but of a type the resource cannot accept.
    #[error("Invalid value for field '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// A create payload with a fixed set of required fields.
pub trait Payload: Sized {
    const RESOURCE: &'static str;
    const REQUIRED: &'static [&'static str];

    /// Called only once every field in [`Payload::REQUIRED`] is present.
    fn from_fields(fields: &Map<String, Value>) -> Result<Self, Rejection>;
}

/// Decode a raw request body into `P`. Extra fields are ignored; nothing is coerced.
pub fn decode<P: Payload>(body: &[u8]) -> Result<P, Rejection> {
    let value: Value = serde_json::from_slice(body).map_err(|_| Rejection::MalformedPayload)?;
    let Value::Object(fields) = value else {
        return Err(Rejection::MalformedPayload);
    };
    let missing: Vec<&'static str> = P::REQUIRED
        .iter()
        .copied()
        .filter(|f| fields.get(*f).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(Rejection::MissingFields { required: P::REQUIRED, missing });
    }
    P::from_fields(&fields)
}

fn number_field(fields: &Map<String, Value>, name: &'static str) -> Result<Number, Rejection> {
    match fields.get(name) {
        Some(Value::Number(n)) => Number::from_json(n)
            .ok_or(Rejection::InvalidField { field: name, expected: "number" }),
        _ => Err(Rejection::InvalidField { field: name, expected: "number" }),
    }
}

fn string_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, Rejection> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(Rejection::InvalidField { field: name, expected: "string" }),
    }
}

/// Validated operands for `POST /sum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumInput {
    pub num1: Number,
    pub num2: Number,
}

impl Payload for SumInput {
    const RESOURCE: &'static str = "sum";
    const REQUIRED: &'static [&'static str] = &["num1", "num2"];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, Rejection> {
        Ok(Self {
            num1: number_field(fields, "num1")?,
            num2: number_field(fields, "num2")?,
        })
    }
}

impl Payload for NewRecord {
    const RESOURCE: &'static str = "record";
    const REQUIRED: &'static [&'static str] = &["name", "email"];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, Rejection> {
        Ok(Self {
            name: string_field(fields, "name")?,
            email: string_field(fields, "email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_payload_decodes() {
        let input: SumInput = decode(br#"{"num1": 2, "num2": 2.5, "extra": true}"#).unwrap();
        assert_eq!(input.num1, Number::Int(2));
        assert!(input.num1.is_int());
        assert_eq!(input.num2, Number::Float(2.5));
    }

    #[test]
    fn malformed_bodies_rejected() {
        let bodies: [&[u8]; 6] = [b"", b"not json", b"[1, 2]", b"\"num1\"", b"null", b"{\"num1\": 1"];
        for body in bodies {
            assert_eq!(decode::<SumInput>(body), Err(Rejection::MalformedPayload), "body {:?}", body);
        }
    }

    #[test]
    fn missing_fields_are_named() {
        let err = decode::<SumInput>(br#"{"num1": 1}"#).unwrap_err();
        assert_eq!(err, Rejection::MissingFields { required: &["num1", "num2"], missing: vec!["num2"] });
        assert_eq!(err.to_string(), "Missing required fields");

        let err = decode::<SumInput>(br#"{"num1": null, "num2": null}"#).unwrap_err();
        assert!(matches!(err, Rejection::MissingFields { ref missing, .. } if missing.len() == 2));
    }

    #[test]
    fn no_coercion_of_strings() {
        let err = decode::<SumInput>(br#"{"num1": "2", "num2": 2}"#).unwrap_err();
        assert_eq!(err, Rejection::InvalidField { field: "num1", expected: "number" });
        assert_eq!(err.to_string(), "Invalid value for field 'num1': expected number");

        let err = decode::<SumInput>(br#"{"num1": 2, "num2": true}"#).unwrap_err();
        assert_eq!(err, Rejection::InvalidField { field: "num2", expected: "number" });
    }

    #[test]
    fn record_payload_rules() {
        let rec: NewRecord = decode(br#"{"name": "John Doe", "email": "johndoe@example.com"}"#).unwrap();
        assert_eq!(rec.name, "John Doe");
        assert_eq!(rec.email, "johndoe@example.com");

        // presence only: empty strings pass
        let rec: NewRecord = decode(br#"{"name": "", "email": ""}"#).unwrap();
        assert!(rec.name.is_empty());

        assert_eq!(
            decode::<NewRecord>(br#"{"foo": "bar"}"#).unwrap_err().to_string(),
            "Missing required fields"
        );
        assert_eq!(decode::<NewRecord>(b"{}").unwrap_err().to_string(), "Missing required fields");
        assert_eq!(decode::<NewRecord>(b"").unwrap_err().to_string(), "Invalid request data");
        assert_eq!(
            decode::<NewRecord>(br#"{"name": 5, "email": "x"}"#).unwrap_err(),
            Rejection::InvalidField { field: "name", expected: "string" }
        );
    }
}
