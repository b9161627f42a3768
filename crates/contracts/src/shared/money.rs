//! Decimal fields on the wire
//!
//! The server renders decimals as strings (`"150.00"`) but accepts plain
//! numbers too. These helpers read either form into `f64` and always write
//! a two-decimal string back.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(DecimalVisitor)
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Same as the parent module, for optional fields (`null` or missing => `None`)
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(deserialize_with = "super::deserialize")] f64);

        Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(v)| v))
    }
}

/// Parse a user-typed amount, accepting both `1234.56` and `1.234,56`
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim().trim_start_matches("R$").trim();
    if s.is_empty() {
        return None;
    }
    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Priced {
        #[serde(with = "super")]
        price: f64,
        #[serde(with = "super::option", default)]
        discount: Option<f64>,
    }

    #[test]
    fn test_reads_string_and_number() {
        let a: Priced = serde_json::from_str(r#"{"price":"150.00","discount":"5.5"}"#).unwrap();
        assert_eq!(a, Priced { price: 150.0, discount: Some(5.5) });

        let b: Priced = serde_json::from_str(r#"{"price":12,"discount":null}"#).unwrap();
        assert_eq!(b, Priced { price: 12.0, discount: None });

        let c: Priced = serde_json::from_str(r#"{"price":1.25}"#).unwrap();
        assert_eq!(c.discount, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Priced>(r#"{"price":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"NaN"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"inf"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"12.00","discount":"-inf"}"#).is_err());
    }

    #[test]
    fn test_writes_two_decimals() {
        let json = serde_json::to_string(&Priced { price: 7.5, discount: None }).unwrap();
        assert_eq!(json, r#"{"price":"7.50","discount":null}"#);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(super::parse_amount("1234.56"), Some(1234.56));
        assert_eq!(super::parse_amount("R$ 1.234,56"), Some(1234.56));
        assert_eq!(super::parse_amount("10,5"), Some(10.5));
        assert_eq!(super::parse_amount(""), None);
        assert_eq!(super::parse_amount("abc"), None);
    }
}
