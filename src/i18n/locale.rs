use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// The locale the language switcher offers.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Builds a link to `path` in this locale. The default locale is served
    /// without a prefix.
    pub fn href(self, default_locale: Locale, path: &str) -> String {
        if self == default_locale {
            return path.to_string();
        }

        if path == "/" {
            format!("/{}", self.code())
        } else {
            format!("/{}{}", self.code(), path)
        }
    }
}

/// Splits a leading locale segment off a request path.
///
/// `/ar/post-ad` yields `(Some(Ar), "/post-ad")`, `/ar` yields `(Some(Ar), "/")`
/// and paths without a known locale segment are returned untouched.
pub fn split_locale_prefix(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, "/"),
    };

    match Locale::from_code(segment) {
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
        assert_eq!(Locale::En.direction().as_str(), "ltr");
    }

    #[test]
    fn splits_known_prefix() {
        assert_eq!(split_locale_prefix("/ar/post-ad"), (Some(Locale::Ar), "/post-ad"));
        assert_eq!(split_locale_prefix("/ar"), (Some(Locale::Ar), "/"));
        assert_eq!(split_locale_prefix("/en/ads/cars"), (Some(Locale::En), "/ads/cars"));
    }

    #[test]
    fn leaves_other_paths_alone() {
        assert_eq!(split_locale_prefix("/post-ad"), (None, "/post-ad"));
        assert_eq!(split_locale_prefix("/"), (None, "/"));
        assert_eq!(split_locale_prefix("/arabic"), (None, "/arabic"));
    }

    #[test]
    fn default_locale_links_have_no_prefix() {
        assert_eq!(Locale::En.href(Locale::En, "/post-ad"), "/post-ad");
        assert_eq!(Locale::Ar.href(Locale::En, "/post-ad"), "/ar/post-ad");
        assert_eq!(Locale::Ar.href(Locale::En, "/"), "/ar");
    }
}
