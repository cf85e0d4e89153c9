use super::{PageContext, escape};
use crate::{
    models::Category,
    services::{category_icons, navigator::Navigator},
};

/// Link that replays a pick of `category` in column `level` on top of `path`.
pub fn pick_href(ctx: &PageContext<'_>, path: &[i64], level: usize, category_id: i64) -> String {
    let mut query = format!("level={}&pick={}", level, category_id);
    if !path.is_empty() {
        let ids: Vec<String> = path.iter().map(i64::to_string).collect();
        query = format!("path={}&{}", ids.join(","), query);
    }
    ctx.href(&format!("/post-ad?{}", query))
}

fn tile(ctx: &PageContext<'_>, href: String, category: &Category, class: &str) -> String {
    format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        class,
        href,
        escape(category.display_name(ctx.locale))
    )
}

fn grid(ctx: &PageContext<'_>, navigator: &Navigator<'_>) -> String {
    let Some(column) = navigator.columns().into_iter().next() else {
        return String::new();
    };

    let tiles: String = column
        .categories
        .iter()
        .map(|category| {
            let icon = category_icons::icon_url(&category.name)
                .map(|src| format!(r#"<img src="{}" alt="" width="60" height="60">"#, escape(&src)))
                .unwrap_or_default();
            format!(
                r#"<li>{}{}</li>"#,
                icon,
                tile(ctx, pick_href(ctx, &[], 0, category.id), category, "tile")
            )
        })
        .collect();

    format!(r#"<ul class="grid">{}</ul>"#, tiles)
}

fn columns(ctx: &PageContext<'_>, navigator: &Navigator<'_>) -> String {
    let path = navigator.path_ids();
    let selected = navigator.selection().map(|c| c.id);

    let columns: String = navigator
        .columns()
        .into_iter()
        .map(|column| {
            let items: String = column
                .categories
                .iter()
                .map(|category| {
                    let active = column.expanded_id == Some(category.id)
                        || selected == Some(category.id);
                    let class = if active { "expanded" } else { "" };
                    let arrow = if category.has_children() { " &rsaquo;" } else { "" };
                    format!(
                        "<li>{}{}</li>",
                        tile(ctx, pick_href(ctx, &path, column.level, category.id), category, class),
                        arrow
                    )
                })
                .collect();
            format!(
                r#"<ul class="column" data-level="{}">{}</ul>"#,
                column.level, items
            )
        })
        .collect();

    format!(
        r#"<a class="back" href="{}">&lsaquo; {}</a><div class="columns">{}</div>"#,
        ctx.href("/post-ad"),
        ctx.t("postAd.backToCategories"),
        columns
    )
}

/// Category picker: a grid of roots until something is expanded, then columns.
pub fn category_picker(ctx: &PageContext<'_>, navigator: &Navigator<'_>) -> String {
    let body = if navigator.is_grid_view() {
        grid(ctx, navigator)
    } else {
        columns(ctx, navigator)
    };

    format!(
        r#"<h1>{}</h1>
<section class="category-picker"><h2>{}</h2>{}</section>"#,
        ctx.t("postAd.title"),
        ctx.t("postAd.chooseCategory"),
        body
    )
}

/// Shown when the category tree could not be fetched.
pub fn load_error(ctx: &PageContext<'_>, message: &str) -> String {
    format!(
        r#"<h1>{}</h1>
<div class="error" role="alert"><p>{}</p><p>{}</p><a href="{}">{}</a></div>"#,
        ctx.t("postAd.title"),
        ctx.t("postAd.loadError"),
        escape(message),
        escape(&ctx.locale.href(ctx.default_locale, ctx.current_path)),
        ctx.t("postAd.retry")
    )
}
