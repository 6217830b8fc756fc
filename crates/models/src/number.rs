//! JSON numeric value that keeps the integer/float distinction of its source.
//!
//! Arithmetic follows the usual promotion rule: `Int + Int` stays `Int`, any
//! `Float` operand makes the result `Float`. Equality is exact across kinds:
//! `Int(4) == Float(4.0)`, but `Int(2^53 + 1)` equals no float at all.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Converts a JSON number. `u64` values beyond `i64::MAX` become floats.
    pub fn from_json(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            return Some(Number::Int(i));
        }
        n.as_f64().map(Number::Float)
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// `self + rhs`. An overflowing integer sum is carried as a float.
    pub fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }

    /// The `i64` a float is exactly equal to, if any.
    pub fn exact_i64(f: f64) -> Option<i64> {
        // 2^63 is the first double past i64::MAX
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
            Some(f as i64)
        } else {
            None
        }
    }

    /// The `f64` an integer is exactly equal to, if any.
    pub fn exact_f64(i: i64) -> Option<f64> {
        let f = i as f64;
        (Number::exact_i64(f) == Some(i)).then_some(f)
    }

    /// Column pair for storage: the double value plus the exact integer for `Int`.
    pub fn to_stored(self) -> (f64, Option<i64>) {
        match self {
            Number::Int(i) => (i as f64, Some(i)),
            Number::Float(f) => (f, None),
        }
    }

    /// Rebuilds a value from its column pair; a present integer wins.
    pub fn from_stored(value: f64, exact: Option<i64>) -> Number {
        match exact {
            Some(i) => Number::Int(i),
            None => Number::Float(value),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                Number::exact_i64(f) == Some(i)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Number {
    type Err = ModelError;

    /// Integers first, then finite floats. `NaN`/`inf` are rejected since JSON
    /// cannot carry them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(ModelError::Validation(format!("not a number: {s:?}"))),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self { Number::Int(v) }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self { Number::Float(v) }
}
