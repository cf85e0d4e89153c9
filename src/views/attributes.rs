use super::{PageContext, escape, field};
use crate::{
    models::{Category, FormState},
    services::{
        category_icons,
        form_layout::{FormEntry, FormLayout},
        image_service::ImageSet,
    },
};

pub const IMAGE_REFS_FIELD: &str = "imageRefs";
pub const IMAGE_UPLOAD_FIELD: &str = "images";
pub const IMAGE_ACTION_FIELD: &str = "imageAction";

/// What the attributes screen shows besides the form values.
pub struct AttributesView<'a> {
    pub category: &'a Category,
    /// Root first, ending with `category`.
    pub trail: &'a [&'a Category],
    pub layout: Option<&'a FormLayout<'a>>,
    pub fields_error: Option<&'a str>,
    pub images: &'a ImageSet,
    pub state: &'a FormState,
    pub submitted: bool,
}

fn category_summary(ctx: &PageContext<'_>, view: &AttributesView<'_>) -> String {
    let root = view.trail.first().copied().unwrap_or(view.category);
    let icon = category_icons::icon_url(&root.name)
        .map(|src| format!(r#"<img src="{}" alt="" width="40" height="40">"#, escape(&src)))
        .unwrap_or_default();

    let names: Vec<String> = view
        .trail
        .iter()
        .map(|c| escape(c.display_name(ctx.locale)))
        .collect();

    // The picker reopens with every expanded ancestor of the leaf.
    let path: Vec<String> = view
        .trail
        .iter()
        .filter(|c| c.has_children())
        .map(|c| c.id.to_string())
        .collect();
    let change_href = if path.is_empty() {
        ctx.href("/post-ad")
    } else {
        ctx.href(&format!("/post-ad?path={}", path.join(",")))
    };

    format!(
        r#"<div class="field category-summary"><label>{label}<span class="required">*</span></label>
  {icon}<span class="trail">{trail}</span> <a class="change" href="{change_href}">{change}</a>
</div>"#,
        label = ctx.t("postAd.category"),
        trail = names.join(" &rsaquo; "),
        change = ctx.t("postAd.change"),
    )
}

fn image_upload(ctx: &PageContext<'_>, images: &ImageSet) -> String {
    let last = images.len().saturating_sub(1);
    let items: String = images
        .images()
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let cover = if i == 0 {
                format!(r#" <span class="badge">{}</span>"#, ctx.t("postAd.cover"))
            } else {
                String::new()
            };
            let up = if i > 0 {
                action_button(&format!("move:{}:{}", i, i - 1), "&uarr;", &ctx.t("postAd.moveUp"))
            } else {
                String::new()
            };
            let down = if i < last {
                action_button(&format!("move:{}:{}", i, i + 1), "&darr;", &ctx.t("postAd.moveDown"))
            } else {
                String::new()
            };
            format!(
                r#"<li><input type="hidden" name="{}" value="{}"><span class="file" data-ref="{}">{}</span>{}{}{}{}</li>"#,
                IMAGE_REFS_FIELD,
                escape(&image.encode()),
                escape(&image.reference()),
                escape(&image.file_name),
                cover,
                up,
                down,
                action_button(&format!("remove:{}", i), "&times;", &ctx.t("postAd.removeImage"))
            )
        })
        .collect();

    let picker = if images.is_full() {
        String::new()
    } else {
        format!(
            r#"<input type="file" name="{}" accept="image/*" multiple>"#,
            IMAGE_UPLOAD_FIELD
        )
    };

    format!(
        r#"<div class="field images"><label>{title}</label>{picker}
  <span class="counter">{count}</span>
  <ol class="image-list">{items}</ol>
  <p class="hint">{hint}</p>
</div>"#,
        title = ctx.t("postAd.uploadImages"),
        count = ctx.t_with(
            "postAd.imagesCount",
            &[
                ("count", images.len().to_string().as_str()),
                ("max", images.max().to_string().as_str())
            ]
        ),
        hint = ctx.t("postAd.coverImageRecommendation"),
    )
}

fn action_button(action: &str, symbol: &str, title: &str) -> String {
    format!(
        r#"<button type="submit" name="{}" value="{}" title="{}" formnovalidate>{}</button>"#,
        IMAGE_ACTION_FIELD,
        escape(action),
        title,
        symbol
    )
}

fn render_entry(ctx: &PageContext<'_>, entry: FormEntry<'_>, state: &FormState) -> String {
    let value = state.get(entry.attribute());
    match entry {
        FormEntry::Schema(schema_field) => field::schema_field(ctx, schema_field, value),
        FormEntry::Custom(custom) => field::custom_field(ctx, custom, value),
    }
}

fn fields(ctx: &PageContext<'_>, view: &AttributesView<'_>) -> String {
    let Some(layout) = view.layout else {
        return format!(
            r#"<div class="error" role="alert">{}: {}</div>"#,
            ctx.t("postAd.fieldsError"),
            escape(view.fields_error.unwrap_or_default())
        );
    };

    let sections: String = layout
        .sections
        .iter()
        .map(|group| {
            let rows: String = group
                .fields
                .iter()
                .copied()
                .map(|f| render_entry(ctx, FormEntry::Schema(f), view.state))
                .collect();
            let index = group
                .group_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "none".to_string());
            format!(r#"<fieldset class="group" data-group="{}">{}</fieldset>"#, index, rows)
        })
        .collect();

    let tail: String = layout
        .tail
        .iter()
        .map(|e| render_entry(ctx, *e, view.state))
        .collect();

    format!("{}\n{}", sections, tail)
}

fn help(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<aside class="help"><h3>{}</h3><p>{}</p><ul><li>{}</li><li>{}</li></ul><p>{}</p></aside>"#,
        ctx.t("postAd.needHelp.title"),
        ctx.t("postAd.needHelp.text"),
        ctx.t("postAd.needHelp.tip1"),
        ctx.t("postAd.needHelp.tip2"),
        ctx.t("postAd.needHelp.footer")
    )
}

pub fn attributes_form(ctx: &PageContext<'_>, view: &AttributesView<'_>) -> String {
    let notice = if view.submitted {
        format!(r#"<div class="notice" role="status">{}</div>"#, ctx.t("postAd.submitted"))
    } else {
        String::new()
    };

    let action = ctx.href(&format!("/post-ad/attributes?categoryId={}", view.category.id));

    format!(
        r#"<h1>{title}</h1>
{notice}
<form method="post" enctype="multipart/form-data" action="{action}">
{summary}
{images}
{fields}
<button type="submit" class="sell">{post}</button>
</form>
{help}"#,
        title = ctx.t("postAd.sellYourAd"),
        summary = category_summary(ctx, view),
        images = image_upload(ctx, view.images),
        fields = fields(ctx, view),
        post = ctx.t("postAd.postNow"),
        help = help(ctx),
    )
}

/// The category id did not resolve to a category.
pub fn category_not_found(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<h1>{}</h1><div class="error" role="alert">{}</div><a href="{}">{}</a>"#,
        ctx.t("postAd.sellYourAd"),
        ctx.t("postAd.categoryNotFound"),
        ctx.href("/post-ad"),
        ctx.t("postAd.backToCategories")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        i18n::{Locale, Translations},
        services::field_schema::ResolvedSchema,
    };

    #[test]
    fn renders_summary_images_and_custom_fields() {
        let i18n = Translations::load().unwrap();
        let ctx = PageContext {
            locale: Locale::En,
            default_locale: Locale::En,
            i18n: &i18n,
            site_name: "Souk",
            current_path: "/post-ad/attributes?categoryId=2",
        };
        let categories: Vec<Category> = serde_json::from_str(
            r#"[{"id": 1, "name": "Vehicles", "slug": "vehicles", "children": [
                {"id": 2, "name": "Cars for Sale", "slug": "cars-for-sale", "parentID": 1}
            ]}]"#,
        )
        .unwrap();
        let cars = &categories[0].children()[0];
        let trail = [&categories[0], cars];
        let schema = ResolvedSchema::default();
        let layout = FormLayout::new(&schema);
        let mut images = ImageSet::new(15);
        images.add(Some("image/jpeg"), "front.jpg");
        images.add(Some("image/jpeg"), "back.jpg");
        let state = FormState::new();

        let html = attributes_form(
            &ctx,
            &AttributesView {
                category: cars,
                trail: &trail,
                layout: Some(&layout),
                fields_error: None,
                images: &images,
                state: &state,
                submitted: true,
            },
        );

        assert!(html.contains("Vehicles &rsaquo; Cars for Sale"));
        assert!(html.contains(r#"href="/post-ad?path=1""#));
        assert!(html.contains("2/15"));
        assert!(html.contains(r#"value="remove:1""#));
        assert!(html.contains(r#"value="move:1:0""#));
        assert!(!html.contains(r#"value="move:1:2""#));
        assert!(html.contains(r#"name="phone""#));
        assert!(html.contains("Your ad details were received."));
    }
}
