//! Server-rendered pages.
//!
//! Pages are plain strings: fragments are built with `format!` and dropped into
//! `templates/layout.html` through `{{placeholder}}` replacement. Every value
//! that did not originate in this crate goes through [`escape`].

pub mod ad_card;
pub mod attributes;
pub mod category_ads;
pub mod field;
pub mod home;
pub mod layout;
pub mod post_ad;

use axum::response::Html;

use crate::{
    i18n::{Locale, Translations},
    models::Category,
};

const LAYOUT: &str = include_str!("../../templates/layout.html");

/// Per-request rendering context.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub default_locale: Locale,
    pub i18n: &'a Translations,
    pub site_name: &'a str,
    /// Current path and query without the locale prefix.
    pub current_path: &'a str,
}

impl PageContext<'_> {
    pub fn t(&self, key: &str) -> String {
        escape(&self.i18n.t(self.locale, key))
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        escape(&self.i18n.t_with(self.locale, key, args))
    }

    /// Link to `path` in the current locale.
    pub fn href(&self, path: &str) -> String {
        escape(&self.locale.href(self.default_locale, path))
    }

    /// The current page in the other locale.
    pub fn switch_href(&self) -> String {
        escape(&self.locale.other().href(self.default_locale, self.current_path))
    }
}

/// Everything the layout needs besides the page body.
pub struct Page<'a> {
    pub title: String,
    pub categories: &'a [Category],
    pub content: String,
}

pub fn render_page(ctx: &PageContext<'_>, page: Page<'_>) -> Html<String> {
    let title = if page.title.is_empty() {
        format!("{} - {}", escape(ctx.site_name), ctx.t("site.tagline"))
    } else {
        format!("{} | {}", page.title, escape(ctx.site_name))
    };

    let html = LAYOUT
        .replace("{{lang}}", ctx.locale.code())
        .replace("{{dir}}", ctx.locale.direction().as_str())
        .replace("{{title}}", &title)
        .replace("{{description}}", &ctx.t("site.description"))
        .replace("{{header}}", &layout::header(ctx))
        .replace("{{navbar}}", &layout::navbar(ctx, page.categories))
        .replace("{{footer}}", &layout::footer(ctx))
        .replace("{{content}}", &page.content);

    Html(html)
}

/// Escapes text for HTML element content and quoted attribute values. Braces are
/// escaped too so values never form layout placeholders.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn arabic_pages_are_right_to_left() {
        let i18n = Translations::load().unwrap();
        let ctx = PageContext {
            locale: Locale::Ar,
            default_locale: Locale::En,
            i18n: &i18n,
            site_name: "Souk",
            current_path: "/post-ad",
        };

        let Html(html) = render_page(
            &ctx,
            Page {
                title: String::new(),
                categories: &[],
                content: "<p>body</p>".to_string(),
            },
        );

        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"href="/post-ad""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn category_names_cannot_inject_placeholders() {
        let i18n = Translations::load().unwrap();
        let ctx = PageContext {
            locale: Locale::En,
            default_locale: Locale::En,
            i18n: &i18n,
            site_name: "Souk",
            current_path: "/",
        };
        let categories: Vec<Category> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "{{content}}", "slug": "tricky", "children": [
                {"id": 2, "name": "{{footer}}", "slug": "nested", "parentID": 1}
            ]}
        ]))
        .unwrap();

        let Html(html) = render_page(
            &ctx,
            Page {
                title: String::new(),
                categories: &categories,
                content: "<p>body</p>".to_string(),
            },
        );

        assert_eq!(html.matches("<p>body</p>").count(), 1);
        assert!(html.contains("&#123;&#123;content&#125;&#125;"));
        assert!(html.contains("&#123;&#123;footer&#125;&#125;"));
        assert!(!html.contains("{{"));
    }
}
