use std::{collections::HashMap, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;
use crate::i18n::Locale;

/// Bucket key the API uses for fields that apply to every category.
pub const COMMON_FIELDS_KEY: &str = "common_category_fields";

/// Role tag hiding a field from the posting form.
pub const EXCLUDE_FROM_POST_AN_AD: &str = "exclude_from_post_an_ad";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Enum,
    Float,
    String,
    Integer,
    Boolean,
    Date,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    SingleChoice,
    MultipleChoice,
    Range,
    Text,
    Boolean,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Text(text) => f.write_str(text),
            ChoiceValue::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFieldChoice {
    pub id: i64,
    pub value: ChoiceValue,
    pub label: String,
    #[serde(rename = "label_l1", default, skip_serializing_if = "Option::is_none")]
    pub label_l1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_priority: Option<i32>,
    #[serde(rename = "parentID", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl CategoryFieldChoice {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none_or(|id| id == 0)
    }

    pub fn display_label(&self, locale: Locale) -> &str {
        match (locale, self.label_l1.as_deref()) {
            (Locale::Ar, Some(label)) if !label.is_empty() => label,
            _ => &self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryField {
    pub id: i64,
    pub name: String,
    pub attribute: String,
    #[serde(rename = "categoryID", default)]
    pub category_id: Option<i64>,
    pub value_type: ValueType,
    pub filter_type: FilterType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_priority: i32,
    #[serde(default)]
    pub group_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<CategoryFieldChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl CategoryField {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.iter().any(|r| r == role))
    }

    pub fn is_excluded_from_posting(&self) -> bool {
        self.has_role(EXCLUDE_FROM_POST_AN_AD)
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.filter_type == FilterType::MultipleChoice
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBucket {
    #[serde(default)]
    pub flat_fields: Vec<CategoryField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_field_lookup: Option<HashMap<String, String>>,
}

/// Category-fields response: buckets keyed by category id plus the common bucket,
/// kept in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFieldsResponse {
    pub buckets: IndexMap<String, FieldBucket>,
}

impl CategoryFieldsResponse {
    /// Builds the response from raw JSON, skipping buckets whose shape does not match.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            tracing::warn!("Category fields response is not an object, using no fields");
            return Self::default();
        };

        let mut buckets = IndexMap::with_capacity(map.len());
        for (key, raw) in map {
            match serde_json::from_value::<FieldBucket>(raw) {
                Ok(bucket) => {
                    buckets.insert(key, bucket);
                }
                Err(e) => tracing::warn!("Skipping malformed field bucket {}: {}", key, e),
            }
        }

        Self { buckets }
    }

    pub fn common(&self) -> &[CategoryField] {
        self.buckets
            .get(COMMON_FIELDS_KEY)
            .map(|bucket| bucket.flat_fields.as_slice())
            .unwrap_or_default()
    }
}

/// Query flags of the category-fields endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFieldsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slugs: Option<String>,
    #[serde(rename = "categoryExternalIDs", skip_serializing_if = "Option::is_none")]
    pub category_external_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_child_categories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_without_category: Option<bool>,
    #[serde(rename = "splitByCategoryIDs", skip_serializing_if = "Option::is_none")]
    pub split_by_category_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_choices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_choices_by_section: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<bool>,
}

impl CategoryFieldsParams {
    /// Flags the posting form uses: one category plus the common fields, flattened.
    pub fn for_posting(external_id: String) -> Self {
        Self {
            category_external_ids: Some(external_id),
            include_without_category: Some(true),
            split_by_category_ids: Some(true),
            flat_choices: Some(true),
            group_choices_by_section: Some(true),
            flat: Some(true),
            ..Default::default()
        }
    }
}
