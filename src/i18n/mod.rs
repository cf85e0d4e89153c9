mod locale;
mod translations;

pub use locale::{Direction, Locale, split_locale_prefix};
pub use translations::Translations;
