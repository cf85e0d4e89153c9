use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CategoryFieldsParams, CategoryTreeResponse},
    queries::category_queries,
    services::field_schema,
};

pub async fn get_category_tree(State(state): State<AppState>) -> Result<Json<CategoryTreeResponse>> {
    let categories = state.catalog.fetch_categories().await?;

    let roots = category_queries::get_top_level(&categories)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CategoryTreeResponse { categories: roots }))
}

pub async fn get_category_fields(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let categories = state.catalog.fetch_categories().await?;
    let category = category_queries::find_by_id(&categories, id)
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let params = CategoryFieldsParams::for_posting(category.fields_key());
    let response = state.catalog.fetch_category_fields(&params).await?;
    let schema = field_schema::resolve(&response, category);

    Ok(Json(json!({
        "category": category,
        "fields": schema.fields,
        "groups": schema.groups(),
    })))
}
