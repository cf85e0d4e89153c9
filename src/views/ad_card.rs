use chrono::{DateTime, Utc};

use super::{PageContext, escape};
use crate::{
    models::Ad,
    utils::format::{format_price, relative_date},
};

pub fn ad_card(ctx: &PageContext<'_>, ad: &Ad, now: DateTime<Utc>) -> String {
    let image = match ad.images.first() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(src),
            escape(&ad.title)
        ),
        None => format!(r#"<div class="no-image">{}</div>"#, ctx.t("ads.noImage")),
    };

    let featured = if ad.featured.unwrap_or(false) {
        format!(r#"<span class="badge">{}</span>"#, ctx.t("ads.featured"))
    } else {
        String::new()
    };

    let negotiable = if ad.is_negotiable() {
        format!(r#"<span class="negotiable">{}</span>"#, ctx.t("ads.negotiable"))
    } else {
        String::new()
    };

    let details = ad
        .metadata
        .as_ref()
        .map(|m| m.details())
        .filter(|d| !d.is_empty())
        .map(|d| {
            let joined = d.iter().map(|v| escape(v)).collect::<Vec<_>>().join(" &bull; ");
            format!(r#"<div class="details">{}</div>"#, joined)
        })
        .unwrap_or_default();

    let location = ad
        .location
        .as_deref()
        .map(|l| format!(r#"<span class="location">{}</span>"#, escape(l)))
        .unwrap_or_default();

    let posted = ad
        .date_posted
        .as_deref()
        .and_then(|raw| relative_date(raw, now, ctx.i18n, ctx.locale))
        .map(|label| format!(r#"<span class="date">{}</span>"#, escape(&label)))
        .unwrap_or_default();

    let title = match ad.url.as_deref() {
        Some(url) => format!(r#"<a href="{}">{}</a>"#, escape(url), escape(&ad.title)),
        None => escape(&ad.title),
    };

    format!(
        r#"<article class="ad-card" data-ad-id="{id}">
  {image}{featured}
  <div class="body">
    <div><span class="price">{price}</span> {negotiable}</div>
    <h3>{title}</h3>
    <span class="favorite" title="{favorite}">&#9825;</span>
    {details}
    <div class="meta">{location} {posted}</div>
  </div>
</article>"#,
        id = escape(&ad.id.to_string()),
        price = escape(&format_price(ad.price, ad.currency())),
        favorite = ctx.t("ads.favorite"),
    )
}
