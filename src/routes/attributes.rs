use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::Result,
    i18n::Locale,
    models::{CategoryFieldsParams, FormState},
    queries::category_queries,
    services::{
        field_schema::{self, ResolvedSchema},
        form_layout::{FormInput, FormLayout},
        image_service::{ImageAction, ImageSet},
    },
    utils::extractors::{CurrentPath, RequestLocale},
    views::{
        self, Page,
        attributes::{
            AttributesView, IMAGE_ACTION_FIELD, IMAGE_REFS_FIELD, IMAGE_UPLOAD_FIELD,
        },
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct AttributesParams {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

impl AttributesParams {
    fn category_id(&self) -> Option<i64> {
        self.category_id.as_deref()?.trim().parse().ok()
    }
}

/// A posted form: its text values and images after any image action.
struct Submission {
    input: FormInput,
    images: ImageSet,
    image_action: bool,
}

pub async fn show_form(
    State(state): State<AppState>,
    Query(params): Query<AttributesParams>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
) -> Response {
    render_form(&state, locale, &path, params.category_id(), None).await
}

pub async fn submit_form(
    State(state): State<AppState>,
    Query(params): Query<AttributesParams>,
    RequestLocale(locale): RequestLocale,
    CurrentPath(path): CurrentPath,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut input = FormInput::default();
    let mut refs = Vec::new();
    let mut uploads = Vec::new();
    let mut action = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            IMAGE_UPLOAD_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if !file_name.is_empty() {
                    uploads.push((field.content_type().map(str::to_string), file_name));
                }
            }
            IMAGE_REFS_FIELD => refs.push(field.text().await?),
            IMAGE_ACTION_FIELD => action = Some(field.text().await?),
            _ => {
                let value = field.text().await?;
                input.push(name, value);
            }
        }
    }

    let mut images = ImageSet::restore(state.settings.max_images, refs.iter().map(String::as_str));
    for (content_type, file_name) in &uploads {
        if let Some(image) = images.add(content_type.as_deref(), file_name) {
            tracing::debug!("Accepted upload {} as {}", file_name, image.reference());
        }
    }

    let image_action = action.is_some();
    if let Some(raw) = action {
        match raw.parse::<ImageAction>() {
            Ok(action) => images.apply(action),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    let submission = Submission {
        input,
        images,
        image_action,
    };

    Ok(render_form(&state, locale, &path, params.category_id(), Some(submission)).await)
}

async fn render_form(
    state: &AppState,
    locale: Locale,
    path: &str,
    category_id: Option<i64>,
    submission: Option<Submission>,
) -> Response {
    let ctx = state.page_context(locale, path);

    let categories = match state.catalog.fetch_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Failed to load categories for the ad form: {}", e);
            let page = views::render_page(
                &ctx,
                Page {
                    title: ctx.t("postAd.sellYourAd"),
                    categories: &[],
                    content: views::post_ad::load_error(&ctx, e.user_message()),
                },
            );
            return (StatusCode::BAD_GATEWAY, page).into_response();
        }
    };

    let Some(category) = category_id.and_then(|id| category_queries::find_by_id(&categories, id))
    else {
        tracing::warn!("No category {:?} to post an ad in", category_id);
        let page = views::render_page(
            &ctx,
            Page {
                title: ctx.t("postAd.sellYourAd"),
                categories: &categories,
                content: views::attributes::category_not_found(&ctx),
            },
        );
        return (StatusCode::NOT_FOUND, page).into_response();
    };

    let trail = category_queries::build_category_path(category, &categories);
    let params = CategoryFieldsParams::for_posting(category.fields_key());
    let (schema, fields_error) = match state.catalog.fetch_category_fields(&params).await {
        Ok(response) => (field_schema::resolve(&response, category), None),
        Err(e) => {
            tracing::error!("Failed to load fields for category {}: {}", category.id, e);
            (ResolvedSchema::default(), Some(e.user_message()))
        }
    };
    let layout = fields_error.is_none().then(|| FormLayout::new(&schema));

    let (images, form_state, submitted) = match submission {
        None => (ImageSet::new(state.settings.max_images), FormState::new(), false),
        Some(submission) => {
            let form_state = layout
                .as_ref()
                .map(|layout| layout.parse(&submission.input))
                .unwrap_or_default();
            let submitted = !submission.image_action;
            if submitted {
                log_submission(category.id, &form_state, &submission.images);
            }
            (submission.images, form_state, submitted)
        }
    };

    let content = views::attributes::attributes_form(
        &ctx,
        &AttributesView {
            category,
            trail: &trail,
            layout: layout.as_ref(),
            fields_error,
            images: &images,
            state: &form_state,
            submitted,
        },
    );

    views::render_page(
        &ctx,
        Page {
            title: ctx.t("postAd.sellYourAd"),
            categories: &categories,
            content,
        },
    )
    .into_response()
}

fn log_submission(category_id: i64, form_state: &FormState, images: &ImageSet) {
    let images: Vec<String> = images.images().iter().map(|image| image.reference()).collect();
    match serde_json::to_string(form_state) {
        Ok(values) => tracing::info!(
            "Ad form submitted for category {}: {} (images: {:?})",
            category_id,
            values,
            images
        ),
        Err(e) => tracing::warn!("Could not serialize ad form for category {}: {}", category_id, e),
    }
}
