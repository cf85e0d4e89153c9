use std::collections::HashMap;

use serde_json::Value;

use super::Locale;
use crate::error::{AppError, Result};

const EN_CATALOG: &str = include_str!("../../locales/en.json");
const AR_CATALOG: &str = include_str!("../../locales/ar.json");

/// String catalogues keyed by dotted paths such as `postAd.title`.
#[derive(Debug, Clone)]
pub struct Translations {
    catalogs: HashMap<Locale, Value>,
}

impl Translations {
    pub fn load() -> Result<Self> {
        let mut catalogs = HashMap::new();

        for (locale, source) in [(Locale::En, EN_CATALOG), (Locale::Ar, AR_CATALOG)] {
            let catalog: Value = serde_json::from_str(source).map_err(|e| {
                AppError::ConfigError(format!(
                    "Invalid {} translation catalogue: {}",
                    locale.code(),
                    e
                ))
            })?;
            catalogs.insert(locale, catalog);
        }

        tracing::info!("Loaded {} translation catalogues", catalogs.len());

        Ok(Self { catalogs })
    }

    /// Looks a key up in `locale`, then in English, then falls back to the key.
    pub fn t(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!("Missing translation for {} ({})", key, locale.code());
                key.to_string()
            })
    }

    /// Like [`Translations::t`] with `{{name}}` placeholders substituted.
    pub fn t_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(locale, key), |text, (name, value)| {
                text.replace(&format!("{{{{{}}}}}", name), value)
            })
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.catalogs.get(&locale)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }
}
