use chrono::{DateTime, Utc};

use super::{PageContext, ad_card::ad_card, escape, layout::category_href};
use crate::models::{Ad, Category};

pub fn breadcrumb(ctx: &PageContext<'_>, path: &[&Category]) -> String {
    let mut crumbs = vec![format!(
        r#"<a href="{}">{}</a>"#,
        ctx.href("/"),
        ctx.t("categoryAds.home")
    )];

    crumbs.extend(path.iter().map(|category| {
        format!(
            r#"<a href="{}">{}</a>"#,
            category_href(ctx, &category.slug),
            escape(category.display_name(ctx.locale))
        )
    }));

    format!(r#"<nav class="breadcrumb">{}</nav>"#, crumbs.join(" &rsaquo; "))
}

pub fn category_ads(
    ctx: &PageContext<'_>,
    heading: &str,
    path: &[&Category],
    ads: &[Ad],
    now: DateTime<Utc>,
) -> String {
    let body = if ads.is_empty() {
        format!(r#"<p class="empty">{}</p>"#, ctx.t("categoryAds.empty"))
    } else {
        let cards: String = ads.iter().map(|ad| ad_card(ctx, ad, now)).collect();
        format!(r#"<div class="ads">{}</div>"#, cards)
    };

    format!(
        "{}\n<h1>{}</h1>\n{}",
        breadcrumb(ctx, path),
        escape(heading),
        body
    )
}
