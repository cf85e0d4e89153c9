use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

/// A single posted value, shaped by the control that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Flags(BTreeMap<String, bool>),
}

impl FormValue {
    pub fn as_text(&self) -> Option<String> {
        match self {
            FormValue::Text(text) => Some(text.clone()),
            FormValue::Integer(value) => Some(value.to_string()),
            FormValue::Float(value) => Some(value.to_string()),
            FormValue::Bool(_) | FormValue::List(_) | FormValue::Flags(_) => None,
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        match self {
            FormValue::List(values) => values.iter().any(|v| v == option),
            FormValue::Flags(flags) => flags.get(option).copied().unwrap_or(false),
            FormValue::Text(text) => text == option,
            _ => false,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FormValue::Bool(true))
    }
}

/// Ad form values keyed by field attribute, in the order they were filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    #[serde(flatten)]
    values: IndexMap<String, FormValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: FormValue) {
        self.values.insert(attribute.into(), value);
    }

    pub fn get(&self, attribute: &str) -> Option<&FormValue> {
        self.values.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_map() {
        let mut state = FormState::new();
        state.set("title", FormValue::Text("Audi A8".to_string()));
        state.set("year", FormValue::Integer(2015));
        state.set(
            "features",
            FormValue::List(vec!["abs".to_string(), "sunroof".to_string()]),
        );
        state.set(
            "priceOptions",
            FormValue::Flags(BTreeMap::from([
                ("exchange".to_string(), false),
                ("negotiable".to_string(), true),
            ])),
        );

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["title"], "Audi A8");
        assert_eq!(json["year"], 2015);
        assert_eq!(json["features"][1], "sunroof");
        assert_eq!(json["priceOptions"]["negotiable"], true);
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let mut state = FormState::new();
        state.set("price", FormValue::Float(10.0));
        state.set("price", FormValue::Float(12.5));

        assert_eq!(state.len(), 1);
        assert_eq!(state.get("price").and_then(FormValue::as_text).as_deref(), Some("12.5"));
        assert!(state.get("price").is_some_and(|v| !v.is_checked()));
    }
}
