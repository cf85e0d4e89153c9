use super::{PageContext, escape};
use crate::{
    models::{CategoryField, CategoryFieldChoice, FormValue},
    services::{
        field_renderer::{self, Control},
        form_layout::{CONTACT_METHODS, CustomField, PHONE_COUNTRY_CODE, PRICE_OPTIONS},
    },
};

fn label(text: &str, mandatory: bool, for_id: Option<&str>) -> String {
    let star = if mandatory {
        r#"<span class="required">*</span>"#
    } else {
        ""
    };
    match for_id {
        Some(id) => format!(r#"<label for="{}">{}{}</label>"#, escape(id), escape(text), star),
        None => format!("<label>{}{}</label>", escape(text), star),
    }
}

fn row(attribute: &str, label: String, control: String) -> String {
    format!(
        r#"<div class="field" data-attribute="{}">{}{}</div>"#,
        escape(attribute),
        label,
        control
    )
}

fn required(mandatory: bool) -> &'static str {
    if mandatory { " required" } else { "" }
}

fn checked(on: bool) -> &'static str {
    if on { " checked" } else { "" }
}

fn text_value(value: Option<&FormValue>) -> String {
    value.and_then(FormValue::as_text).unwrap_or_default()
}

fn counter(current: &str, max: Option<u32>) -> String {
    max.map(|max| {
        format!(
            r#"<span class="counter">{}/{}</span>"#,
            current.chars().count(),
            max
        )
    })
    .unwrap_or_default()
}

fn hint(ctx: &PageContext<'_>, attribute: &str) -> String {
    let key = match attribute {
        "title" => "postAd.titleHint",
        "description" => "postAd.descriptionHint",
        _ => return String::new(),
    };
    format!(r#"<p class="hint">{}</p>"#, ctx.t(key))
}

fn choice_inputs(
    ctx: &PageContext<'_>,
    kind: &str,
    field: &CategoryField,
    choices: &[&CategoryFieldChoice],
    value: Option<&FormValue>,
) -> String {
    choices
        .iter()
        .map(|choice| {
            let raw = choice.value.to_string();
            let on = value.is_some_and(|v| v.contains(&raw));
            format!(
                r#"<label><input type="{}" name="{}" value="{}"{}{}> {}</label>"#,
                kind,
                escape(&field.attribute),
                escape(&raw),
                checked(on),
                if kind == "radio" { required(field.is_mandatory) } else { "" },
                escape(choice.display_label(ctx.locale))
            )
        })
        .collect()
}

fn number_bound(name: &str, bound: Option<f64>) -> String {
    bound
        .map(|b| format!(r#" {}="{}""#, name, b))
        .unwrap_or_default()
}

/// Control for a schema field, or an empty string when the field has none.
pub fn schema_field(
    ctx: &PageContext<'_>,
    field: &CategoryField,
    value: Option<&FormValue>,
) -> String {
    let Some(control) = field_renderer::select_control(field) else {
        return String::new();
    };

    let name = escape(&field.attribute);
    let mandatory = field.is_mandatory;
    let id = format!("field-{}", field.attribute);

    let (for_id, html) = match &control {
        Control::Pills(choices) => (
            None,
            format!(
                r#"<div class="pills">{}</div>"#,
                choice_inputs(ctx, "radio", field, choices, value)
            ),
        ),
        Control::Checkboxes(choices) => (
            None,
            format!(
                r#"<div class="checkboxes">{}</div>"#,
                choice_inputs(ctx, "checkbox", field, choices, value)
            ),
        ),
        Control::Select(choices) => {
            let current = text_value(value);
            let options: String = choices
                .iter()
                .map(|choice| {
                    let raw = choice.value.to_string();
                    format!(
                        r#"<option value="{}"{}>{}</option>"#,
                        escape(&raw),
                        if raw == current { " selected" } else { "" },
                        escape(choice.display_label(ctx.locale))
                    )
                })
                .collect();
            (
                Some(id.as_str()),
                format!(
                    r#"<select id="{}" name="{}"{}><option value="">{}</option>{}</select>"#,
                    escape(&id),
                    name,
                    required(mandatory),
                    ctx.t("postAd.select"),
                    options
                ),
            )
        }
        Control::Number { min, max, step } => (
            Some(id.as_str()),
            format!(
                r#"<input type="number" id="{}" name="{}" step="{}"{}{} value="{}" placeholder="{} {}"{}>"#,
                escape(&id),
                name,
                step.as_str(),
                number_bound("min", *min),
                number_bound("max", *max),
                escape(&text_value(value)),
                ctx.t("postAd.enter"),
                escape(&field.name),
                required(mandatory)
            ),
        ),
        Control::Text { max_length } => {
            let current = text_value(value);
            (
                Some(id.as_str()),
                format!(
                    r#"<input type="text" id="{}" name="{}" value="{}"{}{}>{}"#,
                    escape(&id),
                    name,
                    escape(&current),
                    length_attrs(field.min_length, *max_length),
                    required(mandatory),
                    counter(&current, *max_length)
                ),
            )
        }
        Control::TextArea { max_length } => {
            let current = text_value(value);
            let placeholder = if field.attribute == "description" {
                format!(r#" placeholder="{}""#, ctx.t("postAd.descriptionPlaceholder"))
            } else {
                String::new()
            };
            (
                Some(id.as_str()),
                format!(
                    r#"<textarea id="{}" name="{}" rows="5"{}{}{}>{}</textarea>{}"#,
                    escape(&id),
                    name,
                    length_attrs(field.min_length, *max_length),
                    placeholder,
                    required(mandatory),
                    escape(&current),
                    counter(&current, *max_length)
                ),
            )
        }
        Control::Checkbox => (
            Some(id.as_str()),
            format!(
                r#"<input type="checkbox" id="{}" name="{}" value="true"{}{}>"#,
                escape(&id),
                name,
                checked(value.is_some_and(FormValue::is_checked)),
                required(mandatory)
            ),
        ),
        Control::Date => (
            Some(id.as_str()),
            format!(
                r#"<input type="date" id="{}" name="{}" value="{}"{}>"#,
                escape(&id),
                name,
                escape(&text_value(value)),
                required(mandatory)
            ),
        ),
    };

    row(
        &field.attribute,
        label(&field.name, mandatory, for_id),
        format!("{}{}", html, hint(ctx, &field.attribute)),
    )
}

fn length_attrs(min: Option<u32>, max: Option<u32>) -> String {
    let mut attrs = String::new();
    if let Some(min) = min {
        attrs.push_str(&format!(r#" minlength="{}""#, min));
    }
    if let Some(max) = max {
        attrs.push_str(&format!(r#" maxlength="{}""#, max));
    }
    attrs
}

/// One of the built-in fields.
pub fn custom_field(ctx: &PageContext<'_>, custom: CustomField, value: Option<&FormValue>) -> String {
    let attribute = custom.attribute();
    let name = escape(attribute);
    let id = format!("field-{}", attribute);
    let mandatory = custom.is_mandatory();

    let (title, for_id, html) = match custom {
        CustomField::Price | CustomField::OptionalPrice => {
            let (title, placeholder) = if custom == CustomField::Price {
                ("postAd.price", "postAd.enterPrice")
            } else {
                ("postAd.optionalPrice", "postAd.enterOptionalPrice")
            };
            (
                title,
                true,
                format!(
                    r#"<div class="price-input"><span class="currency">{}</span><input type="number" id="{}" name="{}" min="0" step="0.01" value="{}" placeholder="{}"{}></div>"#,
                    custom.currency().unwrap_or_default(),
                    escape(&id),
                    name,
                    escape(&text_value(value)),
                    ctx.t(placeholder),
                    required(mandatory)
                ),
            )
        }
        CustomField::PriceOptions => {
            let boxes: String = PRICE_OPTIONS
                .iter()
                .map(|option| {
                    format!(
                        r#"<label><input type="checkbox" name="{}" value="{}"{}> {}</label>"#,
                        name,
                        option,
                        checked(value.is_some_and(|v| v.contains(option))),
                        ctx.t(&format!("postAd.{}", option))
                    )
                })
                .collect();
            ("postAd.price", false, format!(r#"<div class="checkbox-row">{}</div>"#, boxes))
        }
        CustomField::Delivery => (
            "postAd.delivery",
            true,
            format!(
                r#"<input type="checkbox" id="{}" name="{}" value="true"{}><p class="hint">{} <a href="{}">{}</a></p>"#,
                escape(&id),
                name,
                checked(value.is_some_and(FormValue::is_checked)),
                ctx.t("postAd.deliveryText"),
                ctx.href("/post-ad"),
                ctx.t("postAd.selfDelivery")
            ),
        ),
        CustomField::Name => (
            "postAd.name",
            true,
            format!(
                r#"<input type="text" id="{}" name="{}" value="{}"{}>"#,
                escape(&id),
                name,
                escape(&text_value(value)),
                required(mandatory)
            ),
        ),
        CustomField::Phone => (
            "postAd.mobilePhoneNumber",
            true,
            format!(
                r#"<div class="phone-input"><span class="country-code">{}</span><input type="tel" id="{}" name="{}" value="{}"{}></div>"#,
                PHONE_COUNTRY_CODE,
                escape(&id),
                name,
                escape(&text_value(value)),
                required(mandatory)
            ),
        ),
        CustomField::ContactMethod => {
            let current = text_value(value);
            let pills: String = CONTACT_METHODS
                .iter()
                .map(|method| {
                    format!(
                        r#"<label><input type="radio" name="{}" value="{}"{}> {}</label>"#,
                        name,
                        method,
                        checked(current == *method),
                        ctx.t(&format!("postAd.contactOptions.{}", method))
                    )
                })
                .collect();
            ("postAd.contactMethod", false, format!(r#"<div class="pills">{}</div>"#, pills))
        }
    };

    row(
        attribute,
        label(
            &ctx.i18n.t(ctx.locale, title),
            mandatory,
            for_id.then_some(id.as_str()),
        ),
        html,
    )
}
