use chrono::{DateTime, Utc};

use super::{PageContext, ad_card::ad_card, escape, layout::category_href};
use crate::{
    models::Category,
    queries::{ads_queries::AdSection, category_queries},
    services::category_icons,
};

pub fn all_categories(ctx: &PageContext<'_>, categories: &[Category]) -> String {
    let roots = category_queries::get_top_level(categories);
    if roots.is_empty() {
        return format!(
            r#"<section class="all-categories"><h2>{}</h2><p class="error">{}</p></section>"#,
            ctx.t("home.allCategories"),
            ctx.t("home.categoriesUnavailable")
        );
    }

    let tiles: String = roots
        .into_iter()
        .map(|category| {
            let icon = category_icons::icon_url(&category.name)
                .map(|src| format!(r#"<img src="{}" alt="" width="80" height="80">"#, escape(&src)))
                .unwrap_or_default();
            format!(
                r#"<li><a href="{}">{}<span>{}</span></a></li>"#,
                category_href(ctx, &category.slug),
                icon,
                escape(category.display_name(ctx.locale))
            )
        })
        .collect();

    format!(
        r#"<section class="all-categories"><h2>{}</h2><ul class="grid">{}</ul></section>"#,
        ctx.t("home.allCategories"),
        tiles
    )
}

pub fn ad_section(ctx: &PageContext<'_>, section: &AdSection<'_>, now: DateTime<Utc>) -> String {
    let cards: String = section.ads.iter().map(|ad| ad_card(ctx, ad, now)).collect();

    let view_more = section
        .slug
        .map(|slug| {
            format!(
                r#"<a class="view-more" href="{}">{}</a>"#,
                category_href(ctx, slug),
                ctx.t("categoryAds.viewMore")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="category-ads"><h2>{}</h2>{}<div class="ads">{}</div></section>"#,
        escape(section.category),
        view_more,
        cards
    )
}

pub fn home(
    ctx: &PageContext<'_>,
    categories: &[Category],
    sections: &[AdSection<'_>],
    now: DateTime<Utc>,
) -> String {
    let sections: String = sections
        .iter()
        .map(|section| ad_section(ctx, section, now))
        .collect();

    format!("{}\n{}", all_categories(ctx, categories), sections)
}
