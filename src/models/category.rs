use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::i18n::Locale;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "name_l1", default, skip_serializing_if = "Option::is_none")]
    pub name_l1: Option<String>,
    #[serde(rename = "externalID", default, deserialize_with = "null_as_default")]
    pub external_id: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: i32,
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// Roots carry no parent id; the API also uses `0` for "no parent".
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none_or(|id| id == 0)
    }

    pub fn children(&self) -> &[Category] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        match (locale, self.name_l1.as_deref()) {
            (Locale::Ar, Some(name)) if !name.is_empty() => name,
            _ => &self.name,
        }
    }

    /// The id the category-fields endpoint expects.
    pub fn fields_key(&self) -> String {
        if self.external_id.is_empty() {
            self.id.to_string()
        } else {
            self.external_id.clone()
        }
    }
}

/// The categories endpoint answers either with a bare array or a `{data}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoriesPayload {
    List(Vec<Category>),
    Envelope { data: Vec<Category> },
}

impl CategoriesPayload {
    pub fn into_categories(self) -> Vec<Category> {
        match self {
            CategoriesPayload::List(categories) => categories,
            CategoriesPayload::Envelope { data } => data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryTreeResponse {
    pub categories: Vec<Category>,
}
