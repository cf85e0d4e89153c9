use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{COMMON_FIELDS_KEY, Category, CategoryField, CategoryFieldsResponse};

/// Posting-form fields of one category: merged, filtered and sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSchema {
    pub fields: Vec<CategoryField>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup<'a> {
    pub group_index: Option<i32>,
    pub fields: Vec<&'a CategoryField>,
}

impl ResolvedSchema {
    pub fn field(&self, attribute: &str) -> Option<&CategoryField> {
        self.fields.iter().find(|f| f.attribute == attribute)
    }

    /// Buckets fields by group index (ascending) with ungrouped fields last,
    /// keeping display order inside each bucket.
    pub fn groups(&self) -> Vec<FieldGroup<'_>> {
        group_fields(self.fields.iter())
    }
}

pub fn group_fields<'a>(fields: impl Iterator<Item = &'a CategoryField>) -> Vec<FieldGroup<'a>> {
    let mut buckets: IndexMap<Option<i32>, Vec<&'a CategoryField>> = IndexMap::new();
    for field in fields {
        buckets.entry(field.group_index).or_default().push(field);
    }

    // `None` sorts before `Some`, so ungrouped fields are moved behind explicitly.
    buckets.sort_by(|a, _, b, _| match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, None) => std::cmp::Ordering::Equal,
    });

    buckets
        .into_iter()
        .map(|(group_index, fields)| FieldGroup {
            group_index,
            fields,
        })
        .collect()
}

/// Picks the category's own bucket out of a split response.
///
/// Looks up the category id, then its external id, then falls back to the
/// first non-common bucket that has any fields.
pub fn category_bucket<'r>(
    response: &'r CategoryFieldsResponse,
    category: &Category,
) -> &'r [CategoryField] {
    let keys = [category.id.to_string(), category.external_id.clone()];
    if let Some(bucket) = keys
        .iter()
        .filter(|key| !key.is_empty())
        .find_map(|key| response.buckets.get(key.as_str()))
    {
        return &bucket.flat_fields;
    }

    match response
        .buckets
        .iter()
        .find(|(key, bucket)| key.as_str() != COMMON_FIELDS_KEY && !bucket.flat_fields.is_empty())
    {
        Some((key, bucket)) => {
            tracing::info!(
                "No field bucket for category {}, using bucket {}",
                category.id,
                key
            );
            &bucket.flat_fields
        }
        None => {
            tracing::warn!("No fields found for category {}", category.id);
            &[]
        }
    }
}

/// Unions category-specific and common fields by attribute, the specific
/// definition winning, then drops fields excluded from posting and sorts by
/// display priority.
pub fn merge_fields(specific: &[CategoryField], common: &[CategoryField]) -> Vec<CategoryField> {
    let mut by_attribute: IndexMap<&str, &CategoryField> = IndexMap::new();
    for field in common.iter().chain(specific) {
        by_attribute.insert(field.attribute.as_str(), field);
    }

    let mut fields: Vec<CategoryField> = by_attribute
        .into_values()
        .filter(|field| !field.is_excluded_from_posting())
        .cloned()
        .collect();

    fields.sort_by_key(|field| field.display_priority);
    fields
}

pub fn resolve(response: &CategoryFieldsResponse, category: &Category) -> ResolvedSchema {
    let specific = category_bucket(response, category);
    let fields = merge_fields(specific, response.common());

    tracing::debug!(
        "Resolved {} fields for category {} ({} specific, {} common)",
        fields.len(),
        category.id,
        specific.len(),
        response.common().len()
    );

    ResolvedSchema { fields }
}
