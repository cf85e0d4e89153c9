use super::{PageContext, escape};
use crate::{models::Category, queries::category_queries};

/// Shortcut links shown next to the categories dropdown: (name, slug).
pub const POPULAR_CATEGORIES: [(&str, &str); 8] = [
    ("Cars for Sale", "cars-for-sale"),
    ("Apartments & Villas For Rent", "apartments-villas-for-rent"),
    ("Mobile Phones", "mobile-phones"),
    ("Laptops, Tablets, Computers", "laptops-tablets-computers"),
    ("Vacation Rentals & Weekend Getaways", "vacation-rentals-and-weekend-getaways"),
    ("Motorcycles & ATVs", "motorcycles-atv"),
    ("Home Decoration & Accessories", "home-decoration-accessories"),
    ("Jobs Available", "jobs-available"),
];

pub fn category_href(ctx: &PageContext<'_>, slug: &str) -> String {
    ctx.href(&format!("/ads/{}", slug))
}

pub fn header(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<header class="header">
  <a class="logo" href="{home}"><strong>{site}</strong></a>
  <span class="location">{location}</span>
  <form role="search" action="{home}">
    <input type="search" name="q" placeholder="{placeholder}" aria-label="{search}">
    <button type="submit">{search}</button>
  </form>
  <a class="language" href="{switch_href}" hreflang="{switch_lang}" title="{switch}">{switch_to}</a>
  <a class="sell" href="{sell_href}">+ {sell}</a>
</header>"#,
        home = ctx.href("/"),
        site = escape(ctx.site_name),
        location = ctx.t("header.location"),
        placeholder = ctx.t("header.searchPlaceholder"),
        search = ctx.t("header.search"),
        switch_href = ctx.switch_href(),
        switch_lang = ctx.locale.other().code(),
        switch = ctx.t("language.switch"),
        switch_to = ctx.t("language.switchTo"),
        sell_href = ctx.href("/post-ad"),
        sell = ctx.t("header.sell"),
    )
}

pub fn navbar(ctx: &PageContext<'_>, categories: &[Category]) -> String {
    let groups: String = category_queries::get_top_level(categories)
        .into_iter()
        .map(|parent| {
            let children: String = category_queries::get_children(parent)
                .into_iter()
                .map(|child| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        category_href(ctx, &child.slug),
                        escape(child.display_name(ctx.locale))
                    )
                })
                .collect();

            format!(
                r#"<div><a href="{}"><strong>{}</strong></a><ul>{}</ul></div>"#,
                category_href(ctx, &parent.slug),
                escape(parent.display_name(ctx.locale)),
                children
            )
        })
        .collect();

    let popular: String = POPULAR_CATEGORIES
        .iter()
        .map(|(name, slug)| {
            format!(
                r#"<a href="{}">{}</a>"#,
                category_href(ctx, slug),
                escape(name)
            )
        })
        .collect();

    format!(
        r#"<nav class="navbar">
  <details><summary>{all}</summary><div class="dropdown">{groups}</div></details>
  {popular}
</nav>"#,
        all = ctx.t("navbar.allCategories"),
    )
}

pub fn footer(ctx: &PageContext<'_>) -> String {
    let popular: String = POPULAR_CATEGORIES
        .iter()
        .take(4)
        .map(|(name, slug)| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                category_href(ctx, slug),
                escape(name)
            )
        })
        .collect();

    format!(
        r#"<footer class="footer">
  <section><h4>{popular_title}</h4><ul>{popular}</ul></section>
  <section><h4>{about}</h4></section>
  <section><h4>{support}</h4></section>
  <p>&copy; {site}. {rights}</p>
</footer>"#,
        popular_title = ctx.t("footer.popularCategories"),
        about = ctx.t("footer.aboutUs"),
        support = ctx.t("footer.support"),
        site = escape(ctx.site_name),
        rights = ctx.t("footer.rights"),
    )
}

/// Localized 404 body.
pub fn not_found(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<section class="not-found"><h1>404</h1><p>{}</p><a href="{}">{}</a></section>"#,
        ctx.t("errors.notFound"),
        ctx.href("/"),
        ctx.t("errors.backHome")
    )
}
