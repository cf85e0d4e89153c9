//! Maps a field descriptor onto the control the posting form shows for it.

use crate::models::{CategoryField, CategoryFieldChoice, ValueType};

/// Single-selection enums with more choices than this become a dropdown.
pub const MAX_PILL_CHOICES: usize = 5;

/// Strings allowing more characters than this get a textarea.
pub const TEXTAREA_THRESHOLD: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum Control<'a> {
    Pills(Vec<&'a CategoryFieldChoice>),
    Checkboxes(Vec<&'a CategoryFieldChoice>),
    /// Only top-level choices are offered.
    Select(Vec<&'a CategoryFieldChoice>),
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: NumberStep,
    },
    Text { max_length: Option<u32> },
    TextArea { max_length: Option<u32> },
    Checkbox,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStep {
    Whole,
    Cents,
}

impl NumberStep {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberStep::Whole => "1",
            NumberStep::Cents => "0.01",
        }
    }
}

impl Control<'_> {
    /// Character limit the counter is shown against, if any.
    pub fn max_length(&self) -> Option<u32> {
        match self {
            Control::Text { max_length } | Control::TextArea { max_length } => *max_length,
            _ => None,
        }
    }
}

/// `None` means the field renders nothing.
pub fn select_control(field: &CategoryField) -> Option<Control<'_>> {
    let control = match field.value_type {
        ValueType::Enum => {
            let choices = field.choices.as_deref().filter(|c| !c.is_empty())?;

            if field.is_multiple_choice() {
                Control::Checkboxes(choices.iter().collect())
            } else if choices.len() <= MAX_PILL_CHOICES {
                Control::Pills(choices.iter().collect())
            } else {
                Control::Select(choices.iter().filter(|c| c.is_top_level()).collect())
            }
        }
        ValueType::Integer => Control::Number {
            min: field.min_value,
            max: field.max_value,
            step: NumberStep::Whole,
        },
        ValueType::Float => Control::Number {
            min: field.min_value,
            max: field.max_value,
            step: NumberStep::Cents,
        },
        ValueType::String => match field.max_length {
            Some(max) if max > TEXTAREA_THRESHOLD => Control::TextArea {
                max_length: field.max_length,
            },
            _ => Control::Text {
                max_length: field.max_length,
            },
        },
        ValueType::Boolean => Control::Checkbox,
        ValueType::Date => Control::Date,
        ValueType::Unknown => {
            tracing::debug!("No control for field {} of unknown type", field.attribute);
            return None;
        }
    };

    Some(control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn enum_field(filter_type: &str, choices: usize) -> CategoryField {
        let choices: Vec<Value> = (0..choices)
            .map(|i| json!({"id": i, "value": format!("v{}", i), "label": format!("Choice {}", i)}))
            .collect();
        serde_json::from_value(json!({
            "id": 1,
            "name": "Condition",
            "attribute": "condition",
            "valueType": "enum",
            "filterType": filter_type,
            "choices": choices,
        }))
        .unwrap()
    }

    fn typed_field(value_type: &str, extra: Value) -> CategoryField {
        let mut raw = json!({
            "id": 2,
            "name": "Field",
            "attribute": "field",
            "valueType": value_type,
            "filterType": "text",
        });
        if let (Some(target), Value::Object(extra)) = (raw.as_object_mut(), extra) {
            target.extend(extra);
        }
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn few_single_choices_render_as_pills() {
        let field = enum_field("single_choice", 5);
        assert!(matches!(select_control(&field), Some(Control::Pills(c)) if c.len() == 5));
    }

    #[test]
    fn many_single_choices_render_as_select() {
        let field = enum_field("single_choice", 6);
        assert!(matches!(select_control(&field), Some(Control::Select(c)) if c.len() == 6));
    }

    #[test]
    fn multiple_choice_is_always_checkboxes() {
        for count in [1, 5, 12] {
            let field = enum_field("multiple_choice", count);
            assert!(matches!(select_control(&field), Some(Control::Checkboxes(c)) if c.len() == count));
        }
    }

    #[test]
    fn select_drops_nested_choices() {
        let mut field = enum_field("single_choice", 7);
        if let Some(choices) = field.choices.as_mut() {
            choices[6].parent_id = Some(1);
        }
        assert!(matches!(select_control(&field), Some(Control::Select(c)) if c.len() == 6));
    }

    #[test]
    fn enum_without_choices_renders_nothing() {
        let field = enum_field("single_choice", 0);
        assert_eq!(select_control(&field), None);

        let mut field = enum_field("single_choice", 0);
        field.choices = None;
        assert_eq!(select_control(&field), None);
    }

    #[test]
    fn numbers_carry_bounds_and_step() {
        let field = typed_field("integer", json!({"minValue": 1900, "maxValue": 2025}));
        assert_eq!(
            select_control(&field),
            Some(Control::Number {
                min: Some(1900.0),
                max: Some(2025.0),
                step: NumberStep::Whole,
            })
        );

        let field = typed_field("float", json!({}));
        assert!(matches!(
            select_control(&field),
            Some(Control::Number { step: NumberStep::Cents, min: None, max: None })
        ));
    }

    #[test]
    fn long_strings_render_as_textarea() {
        let short = typed_field("string", json!({"maxLength": 100}));
        assert_eq!(
            select_control(&short),
            Some(Control::Text { max_length: Some(100) })
        );

        let long = typed_field("string", json!({"maxLength": 4096}));
        let control = select_control(&long).unwrap();
        assert_eq!(control, Control::TextArea { max_length: Some(4096) });
        assert_eq!(control.max_length(), Some(4096));

        let open = typed_field("string", json!({}));
        assert_eq!(select_control(&open), Some(Control::Text { max_length: None }));
    }

    #[test]
    fn booleans_dates_and_unknowns() {
        assert_eq!(select_control(&typed_field("boolean", json!({}))), Some(Control::Checkbox));
        assert_eq!(select_control(&typed_field("date", json!({}))), Some(Control::Date));
        assert_eq!(select_control(&typed_field("geo", json!({}))), None);
    }
}
