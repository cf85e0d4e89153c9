use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{i18n::Locale, i18n::Translations, models::DEFAULT_CURRENCY};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Whole-unit price with thousands separators, `$` for USD and a code prefix
/// otherwise. Negative prices display as zero.
pub fn format_price(price: Decimal, currency: &str) -> String {
    let amount = price
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc()
        .to_string();

    let grouped = group_thousands(&amount);
    if currency.is_empty() || currency.eq_ignore_ascii_case(DEFAULT_CURRENCY) {
        format!("${}", grouped)
    } else {
        format!("{} {}", currency.to_uppercase(), grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    Today,
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl RelativeAge {
    pub fn from_days(days: i64) -> Self {
        match days {
            0 => RelativeAge::Today,
            1..=6 => RelativeAge::Days(days),
            7..=29 => RelativeAge::Weeks(days / 7),
            30..=364 => RelativeAge::Months(days / 30),
            _ => RelativeAge::Years(days / 365),
        }
    }

    /// Days are the ceiling of the absolute distance between the two instants.
    pub fn between(posted: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (now - posted).num_milliseconds().abs();
        let days = (diff_ms + DAY_MS - 1) / DAY_MS;
        Self::from_days(days)
    }

    pub fn localize(self, translations: &Translations, locale: Locale) -> String {
        let (singular, plural, count) = match self {
            RelativeAge::Today => return translations.t(locale, "date.today"),
            RelativeAge::Days(n) => ("date.dayAgo", "date.daysAgo", n),
            RelativeAge::Weeks(n) => ("date.weekAgo", "date.weeksAgo", n),
            RelativeAge::Months(n) => ("date.monthAgo", "date.monthsAgo", n),
            RelativeAge::Years(n) => ("date.yearAgo", "date.yearsAgo", n),
        };

        if count == 1 {
            translations.t(locale, singular)
        } else {
            translations.t_with(locale, plural, &[("count", count.to_string().as_str())])
        }
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_posted_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

/// "3 days ago" style label, or `None` when the date cannot be read.
pub fn relative_date(
    raw: &str,
    now: DateTime<Utc>,
    translations: &Translations,
    locale: Locale,
) -> Option<String> {
    let posted = parse_posted_date(raw).or_else(|| {
        tracing::debug!("Unreadable posting date {}", raw);
        None
    })?;
    Some(RelativeAge::between(posted, now).localize(translations, locale))
}
