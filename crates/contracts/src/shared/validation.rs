//! Field-keyed validation errors
//!
//! Same shape for client-side form checks and for the error bodies the API
//! returns on rejected writes, so forms can show both the same way.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Key for messages not tied to a particular field
pub const GENERAL: &str = "__all__";

/// Server keys that carry a general message
const GENERAL_KEYS: [&str; 3] = ["detail", "error", "non_field_errors"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single general message
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(GENERAL, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, what a form shows under the input
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Drop the message of a field once the user edits it
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// All messages joined with ", "
    pub fn summary(&self) -> String {
        self.0
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse an API error body. Non-JSON bodies become a single general message.
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_json(&value),
            Err(_) => {
                let text = body.trim();
                if text.is_empty() {
                    Self::new()
                } else {
                    Self::general(text)
                }
            }
        }
    }

    pub fn from_json(value: &Value) -> Self {
        let mut errors = Self::new();
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    let field = if GENERAL_KEYS.contains(&key.as_str()) {
                        GENERAL
                    } else {
                        key.as_str()
                    };
                    errors.collect(field, v);
                }
            }
            other => errors.collect(GENERAL, other),
        }
        errors
    }

    fn collect(&mut self, field: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::String(s) => self.add(field, s.clone()),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    match item {
                        // nested serializer errors, one object per list element
                        Value::Object(map) => {
                            for (key, v) in map {
                                self.collect(&format!("{}.{}.{}", field, i, key), v);
                            }
                        }
                        other => self.collect(field, other),
                    }
                }
            }
            Value::Object(map) => {
                for (key, v) in map {
                    self.collect(&format!("{}.{}", field, key), v);
                }
            }
            other => self.add(field, other.to_string()),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_messages() {
        let body = r#"{"codigo": ["peça com este Código já existe."], "quantidade_total": ["Obrigatório."]}"#;
        let errors = FieldErrors::from_response_body(body);
        assert_eq!(errors.first("codigo"), Some("peça com este Código já existe."));
        assert_eq!(errors.get("quantidade_total"), ["Obrigatório.".to_string()]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_general_keys() {
        let errors = FieldErrors::from_response_body(r#"{"error": "Apenas locações ativas podem ser finalizadas"}"#);
        assert_eq!(errors.first(GENERAL), Some("Apenas locações ativas podem ser finalizadas"));

        let errors = FieldErrors::from_response_body(r#"{"non_field_errors": ["a", "b"], "detail": "c"}"#);
        assert_eq!(errors.get(GENERAL).len(), 3);
    }

    #[test]
    fn test_nested_item_errors() {
        let body = r#"{"itens": [{}, {"quantidade": ["excede a disponível"]}]}"#;
        let errors = FieldErrors::from_response_body(body);
        assert_eq!(errors.first("itens.1.quantidade"), Some("excede a disponível"));
        assert!(!errors.contains("itens"));
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(FieldErrors::from_response_body("<h1>Server Error</h1>").first(GENERAL), Some("<h1>Server Error</h1>"));
        assert!(FieldErrors::from_response_body("   ").is_empty());
    }

    #[test]
    fn test_summary_and_result() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());
        errors.add("nome", "Nome é obrigatório");
        errors.add(GENERAL, "Falha");
        assert_eq!(errors.summary(), "Falha, Nome é obrigatório");
        errors.clear_field(GENERAL);
        assert_eq!(errors.to_string(), "Nome é obrigatório");
        assert!(errors.into_result().is_err());
    }
}
