//! Order of the attributes form and parsing of its submissions.
//!
//! Schema fields come first, sectioned by group index, except the reserved
//! attributes which are placed after them in a fixed order. Reserved slots the
//! schema does not cover fall back to built-in fields, followed by the seller's
//! contact fields.

use std::collections::BTreeMap;

use crate::{
    models::{CategoryField, FormState, FormValue},
    services::{
        field_renderer::{self, Control, NumberStep},
        field_schema::{self, FieldGroup, ResolvedSchema},
    },
};

pub const RESERVED_ATTRIBUTES: [&str; 6] = [
    "title",
    "description",
    "price",
    "location",
    "price_type",
    "delivery",
];

pub const PRICE_OPTIONS: [&str; 3] = ["negotiable", "exchange", "free"];

pub const CONTACT_METHODS: [&str; 3] = ["phoneNumber", "olxChat", "both"];

pub const PHONE_COUNTRY_CODE: &str = "+961";

/// Built-in fields the form shows alongside the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    Price,
    OptionalPrice,
    PriceOptions,
    Delivery,
    Name,
    Phone,
    ContactMethod,
}

impl CustomField {
    pub fn attribute(self) -> &'static str {
        match self {
            CustomField::Price => "price",
            CustomField::OptionalPrice => "optionalPrice",
            CustomField::PriceOptions => "priceOptions",
            CustomField::Delivery => "delivery",
            CustomField::Name => "name",
            CustomField::Phone => "phone",
            CustomField::ContactMethod => "contactMethod",
        }
    }

    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            CustomField::Price | CustomField::Name | CustomField::Phone
        )
    }

    /// Currency shown in front of price inputs.
    pub fn currency(self) -> Option<&'static str> {
        match self {
            CustomField::Price => Some("USD"),
            CustomField::OptionalPrice => Some("LBP"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEntry<'a> {
    Schema(&'a CategoryField),
    Custom(CustomField),
}

impl FormEntry<'_> {
    pub fn attribute(&self) -> &str {
        match self {
            FormEntry::Schema(field) => &field.attribute,
            FormEntry::Custom(custom) => custom.attribute(),
        }
    }
}

#[derive(Debug)]
pub struct FormLayout<'a> {
    /// Non-reserved schema fields, bucketed by group index.
    pub sections: Vec<FieldGroup<'a>>,
    pub tail: Vec<FormEntry<'a>>,
}

impl<'a> FormLayout<'a> {
    pub fn new(schema: &'a ResolvedSchema) -> Self {
        let sections = field_schema::group_fields(
            schema
                .fields
                .iter()
                .filter(|f| !RESERVED_ATTRIBUTES.contains(&f.attribute.as_str())),
        );

        let mut tail = Vec::new();
        for attribute in ["title", "description", "location"] {
            if let Some(field) = schema.field(attribute) {
                tail.push(FormEntry::Schema(field));
            }
        }

        let or_custom = |attribute: &str, custom: CustomField| {
            schema
                .field(attribute)
                .map_or(FormEntry::Custom(custom), FormEntry::Schema)
        };

        tail.push(or_custom("price", CustomField::Price));
        tail.push(FormEntry::Custom(CustomField::OptionalPrice));
        tail.push(or_custom("price_type", CustomField::PriceOptions));
        tail.push(or_custom("delivery", CustomField::Delivery));
        tail.extend(
            [CustomField::Name, CustomField::Phone, CustomField::ContactMethod]
                .map(FormEntry::Custom),
        );

        Self { sections, tail }
    }

    /// Every entry in render order.
    pub fn entries(&self) -> impl Iterator<Item = FormEntry<'a>> + '_ {
        self.sections
            .iter()
            .flat_map(|group| group.fields.iter().copied().map(FormEntry::Schema))
            .chain(self.tail.iter().copied())
    }

    /// Builds typed form values from the posted name/value pairs.
    pub fn parse(&self, input: &FormInput) -> FormState {
        let mut state = FormState::new();
        for entry in self.entries() {
            let attribute = entry.attribute();
            let value = match entry {
                FormEntry::Schema(field) => parse_schema_value(field, input),
                FormEntry::Custom(custom) => parse_custom_value(custom, input),
            };
            if let Some(value) = value {
                state.set(attribute, value);
            }
        }
        state
    }
}

/// Posted text values in arrival order; empty values are not kept.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    values: Vec<(String, String)>,
}

impl FormInput {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.values.push((name.into(), value));
        }
    }

    pub fn first<'s>(&'s self, name: &'s str) -> Option<&'s str> {
        self.all(name).next()
    }

    pub fn all<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.values
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.first(name).is_some()
    }
}

fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| trimmed.parse::<f64>().map(|v| v.trunc() as i64))
        .unwrap_or(0)
}

fn parse_float(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn parse_schema_value(field: &CategoryField, input: &FormInput) -> Option<FormValue> {
    let name = field.attribute.as_str();

    match field_renderer::select_control(field)? {
        Control::Checkboxes(_) => {
            let selected: Vec<String> = input.all(name).map(str::to_string).collect();
            (!selected.is_empty()).then_some(FormValue::List(selected))
        }
        Control::Number { step, .. } => input.first(name).map(|raw| match step {
            NumberStep::Whole => FormValue::Integer(parse_integer(raw)),
            NumberStep::Cents => FormValue::Float(parse_float(raw)),
        }),
        Control::Checkbox => input.has(name).then_some(FormValue::Bool(true)),
        Control::Pills(_)
        | Control::Select(_)
        | Control::Text { .. }
        | Control::TextArea { .. }
        | Control::Date => input.first(name).map(|raw| FormValue::Text(raw.to_string())),
    }
}

fn parse_custom_value(custom: CustomField, input: &FormInput) -> Option<FormValue> {
    let name = custom.attribute();

    match custom {
        CustomField::Price | CustomField::OptionalPrice => {
            input.first(name).map(|raw| FormValue::Float(parse_float(raw)))
        }
        CustomField::PriceOptions => {
            let checked: Vec<&str> = input.all(name).collect();
            (!checked.is_empty()).then(|| {
                FormValue::Flags(
                    PRICE_OPTIONS
                        .iter()
                        .map(|option| (option.to_string(), checked.contains(option)))
                        .collect::<BTreeMap<_, _>>(),
                )
            })
        }
        CustomField::Delivery => input.has(name).then_some(FormValue::Bool(true)),
        CustomField::Name | CustomField::Phone | CustomField::ContactMethod => {
            input.first(name).map(|raw| FormValue::Text(raw.trim().to_string()))
        }
    }
}
