use pure_rust_locales::Locale;
use tracing::{debug, warn};

use crate::error::LocaleResolutionError;

/// Locale used when the system locale is unknown or missing from the locale data.
pub const FALLBACK_LOCALE: &str = "en_US";

/// A locale identifier and a time zone identifier, either of which may be left unset
/// to use the process-wide default.
///
/// ```rust
/// # use weekday_intl::LocaleRef;
/// let locale = LocaleRef::locale("fr_FR").with_time_zone("Europe/Paris");
/// assert_eq!(locale.locale_id(), Some("fr_FR"));
/// assert_eq!(locale.time_zone_id(), Some("Europe/Paris"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocaleRef {
    locale: Option<String>,
    time_zone: Option<String>,
}

impl LocaleRef {
    pub fn new(locale: Option<&str>, time_zone: Option<&str>) -> Self {
        LocaleRef {
            locale: locale.map(str::to_string),
            time_zone: time_zone.map(str::to_string),
        }
    }

    pub fn locale(locale: &str) -> Self {
        LocaleRef::new(Some(locale), None)
    }

    pub fn with_time_zone(self, time_zone: &str) -> Self {
        LocaleRef {
            time_zone: Some(time_zone.to_string()),
            ..self
        }
    }

    pub fn locale_id(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn time_zone_id(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

/// A locale identifier matched against the compiled-in locale data.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedLocale {
    // Key of the matching locale data, e.g. `fr_CA` or `sr_RS@latin`.
    pub(crate) tag: String,
    pub(crate) locale: Locale,
}

impl ResolvedLocale {
    /// Resolve `id`, or the process default when it is `None`.
    pub(crate) fn resolve(id: Option<&str>) -> Result<Self, LocaleResolutionError> {
        match id {
            Some(id) => ResolvedLocale::from_id(id),
            None => Ok(ResolvedLocale::system_default()),
        }
    }

    /// Match `id` against the locale data, trying the most specific tag first:
    /// `sr-Latn-RS` tries `sr_RS@latin` and then `sr_RS`, and a bare language such as
    /// `fr` falls back to its most likely region, `fr_FR`.
    pub(crate) fn from_id(id: &str) -> Result<Self, LocaleResolutionError> {
        let parts = LocaleParts::parse(id);
        for tag in parts.candidates() {
            if let Ok(locale) = Locale::try_from(tag.as_str()) {
                debug!(locale = id, tag = %tag, "resolved locale");
                return Ok(ResolvedLocale { tag, locale });
            }
        }
        Err(LocaleResolutionError::UnknownLocale(id.to_string()))
    }

    fn system_default() -> Self {
        if let Some(id) = sys_locale::get_locale() {
            match ResolvedLocale::from_id(&id) {
                Ok(resolved) => return resolved,
                Err(err) => warn!(%err, "system locale is not usable, using {}", FALLBACK_LOCALE),
            }
        }
        ResolvedLocale {
            tag: FALLBACK_LOCALE.to_string(),
            locale: Locale::en_US,
        }
    }

    /// The territory part of the locale, e.g. `CA` for `fr_CA`.
    pub(crate) fn region(&self) -> Option<&str> {
        region_of(&self.tag)
    }
}

/// The region subtag of a glibc-style tag. Regions are the second `_` component when it
/// is two uppercase letters or three digits.
pub(crate) fn region_of(tag: &str) -> Option<&str> {
    let tag = tag.split('@').next().unwrap_or(tag);
    let candidate = tag.split('_').nth(1)?;
    let is_alpha_region =
        candidate.len() == 2 && candidate.bytes().all(|b| b.is_ascii_uppercase());
    let is_numeric_region = candidate.len() == 3 && candidate.bytes().all(|b| b.is_ascii_digit());
    (is_alpha_region || is_numeric_region).then_some(candidate)
}

/// The subtags of a POSIX or BCP 47 locale identifier that select locale data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LocaleParts {
    language: String,
    script: Option<String>,
    region: Option<String>,
    modifier: Option<String>,
}

impl LocaleParts {
    /// `fr-ca.UTF-8` gives language `fr` and region `CA`; `sr_RS.UTF-8@latin` adds the
    /// modifier `latin`; `C` and `POSIX` give `POSIX`. Variants and extensions are
    /// ignored.
    pub(crate) fn parse(id: &str) -> Self {
        let id = id.trim();
        let (base, modifier) = match id.split_once('@') {
            Some((base, modifier)) => (base, Some(modifier)),
            None => (id, None),
        };
        let base = base.split('.').next().unwrap_or(base);
        if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
            return LocaleParts {
                language: "POSIX".to_string(),
                ..LocaleParts::default()
            };
        }

        let mut subtags = base.split(['-', '_']);
        let mut parts = LocaleParts {
            language: subtags.next().unwrap_or_default().to_ascii_lowercase(),
            modifier: modifier
                .filter(|m| !m.is_empty())
                .map(str::to_ascii_lowercase),
            ..LocaleParts::default()
        };
        for subtag in subtags {
            let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_digit = subtag.bytes().all(|b| b.is_ascii_digit());
            if subtag.len() == 1 {
                // Extension singleton: nothing after it names the locale.
                break;
            } else if parts.script.is_none()
                && parts.region.is_none()
                && subtag.len() == 4
                && is_alpha
            {
                parts.script = Some(subtag.to_ascii_lowercase());
            } else if parts.region.is_none()
                && ((subtag.len() == 2 && is_alpha) || (subtag.len() == 3 && is_digit))
            {
                parts.region = Some(subtag.to_ascii_uppercase());
            }
        }
        parts
    }

    /// Tags to look up in the locale data, most specific first.
    pub(crate) fn candidates(&self) -> Vec<String> {
        let modifier = self
            .modifier
            .as_deref()
            .or_else(|| self.script.as_deref().and_then(script_modifier));
        let mut bases = Vec::new();
        match &self.region {
            Some(region) => bases.push(format!("{}_{}", self.language, region)),
            None => {
                bases.push(self.language.clone());
                if let Some(region) = likely_region(&self.language, self.script.as_deref()) {
                    bases.push(format!("{}_{}", self.language, region));
                }
            }
        }
        let mut tags = Vec::new();
        for base in bases {
            if let Some(modifier) = modifier {
                tags.push(format!("{}@{}", base, modifier));
            }
            tags.push(base);
        }
        tags
    }
}

/// The glibc modifier that selects a script variant, e.g. `sr_RS@latin`.
fn script_modifier(script: &str) -> Option<&'static str> {
    match script {
        "latn" => Some("latin"),
        "cyrl" => Some("cyrillic"),
        "deva" => Some("devanagari"),
        _ => None,
    }
}

/// The region a bare language most likely refers to, after CLDR likely subtags.
fn likely_region(language: &str, script: Option<&str>) -> Option<String> {
    let region = match (language, script) {
        ("", _) | ("POSIX", _) => return None,
        ("zh", Some("hant")) => "TW",
        ("zh", _) => "CN",
        ("en", _) => "US",
        ("ar", _) => "EG",
        ("pt", _) => "BR",
        ("ja", _) => "JP",
        ("ko", _) => "KR",
        ("sv", _) => "SE",
        ("da", _) => "DK",
        ("nb", _) | ("nn", _) => "NO",
        ("el", _) => "GR",
        ("cs", _) => "CZ",
        ("uk", _) => "UA",
        ("he", _) => "IL",
        ("hi", _) | ("bn", _) | ("ta", _) | ("te", _) | ("mr", _) | ("gu", _) => "IN",
        ("ur", _) => "PK",
        ("vi", _) => "VN",
        ("et", _) => "EE",
        ("sl", _) => "SI",
        ("sr", _) => "RS",
        ("ca", _) | ("eu", _) | ("gl", _) => "ES",
        ("ga", _) => "IE",
        ("cy", _) => "GB",
        ("ka", _) => "GE",
        ("kk", _) => "KZ",
        ("sq", _) => "AL",
        ("hy", _) => "AM",
        ("fa", _) => "IR",
        ("ms", _) => "MY",
        ("be", _) => "BY",
        ("bs", _) => "BA",
        ("af", _) | ("zu", _) | ("xh", _) => "ZA",
        ("fil", _) => "PH",
        ("km", _) => "KH",
        ("lo", _) => "LA",
        ("my", _) => "MM",
        ("si", _) => "LK",
        ("ne", _) => "NP",
        ("am", _) => "ET",
        ("sw", _) => "TZ",
        ("ky", _) => "KG",
        ("tg", _) => "TJ",
        ("tk", _) => "TM",
        ("ps", _) => "AF",
        // Most other languages share their code with their main country: fr_FR, de_DE.
        (language, _) if language.len() == 2 => return Some(language.to_ascii_uppercase()),
        _ => return None,
    };
    Some(region.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(id: &str) -> Vec<String> {
        LocaleParts::parse(id).candidates()
    }

    fn tag_of(id: &str) -> String {
        ResolvedLocale::from_id(id).unwrap().tag
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates("fr_FR"), ["fr_FR"]);
        assert_eq!(candidates("fr-ca"), ["fr_CA"]);
        assert_eq!(candidates("en_us.UTF-8"), ["en_US"]);
        assert_eq!(candidates("de_DE.UTF-8@euro"), ["de_DE@euro", "de_DE"]);
        assert_eq!(candidates("C"), ["POSIX"]);
        assert_eq!(candidates("C.UTF-8"), ["POSIX"]);
        assert_eq!(candidates("EN"), ["en", "en_US"]);
        assert_eq!(candidates("sr-Latn-RS"), ["sr_RS@latin", "sr_RS"]);
        assert_eq!(candidates("zh-Hant"), ["zh", "zh_TW"]);
        assert_eq!(candidates("en-US-u-fw-mon"), ["en_US"]);
        assert_eq!(candidates("es-419"), ["es_419"]);
    }

    #[test]
    fn test_resolve_bare_languages() {
        assert_eq!(tag_of("fr"), "fr_FR");
        assert_eq!(tag_of("en"), "en_US");
        assert_eq!(tag_of("de"), "de_DE");
        assert_eq!(tag_of("pt"), "pt_BR");
        // Languages without a region in the locale data resolve as they are.
        assert_eq!(tag_of("eo"), "eo");
    }

    #[test]
    fn test_resolve_scripts_and_modifiers() {
        assert_eq!(tag_of("zh-Hant-TW"), "zh_TW");
        assert_eq!(tag_of("zh-Hans"), "zh_CN");
        assert_eq!(tag_of("sr_RS@latin"), "sr_RS@latin");
        assert_eq!(tag_of("sr-Latn-RS"), "sr_RS@latin");
        assert_eq!(tag_of("sr_RS"), "sr_RS");
        // Modifiers without their own locale data fall back to the plain tag.
        assert_eq!(tag_of("en_US@calendar=gregorian"), "en_US");
        assert_eq!(tag_of("uz-Latn-UZ"), "uz_UZ");
    }

    #[test]
    fn test_region_of() {
        assert_eq!(region_of("fr_CA"), Some("CA"));
        assert_eq!(region_of("es_419"), Some("419"));
        assert_eq!(region_of("fr"), None);
        assert_eq!(region_of("POSIX"), None);
        assert_eq!(region_of("sr_RS@latin"), Some("RS"));
    }

    #[test]
    fn test_resolve_known_locales() {
        for id in ["en_US", "fr_FR", "fr_CA", "fr-ca", "de_DE.UTF-8", "C"] {
            assert!(ResolvedLocale::from_id(id).is_ok(), "{}", id);
        }
        assert_eq!(
            ResolvedLocale::from_id("fr_CA").unwrap().region(),
            Some("CA")
        );
    }

    #[test]
    fn test_resolve_unknown_locale() {
        for id in ["xx_YY", "xx", "", "fr_XX"] {
            assert_eq!(
                ResolvedLocale::from_id(id).unwrap_err(),
                LocaleResolutionError::UnknownLocale(id.to_string())
            );
        }
    }

    #[test]
    fn test_default_locale_always_resolves() {
        assert!(ResolvedLocale::resolve(None).is_ok());
    }

    #[test]
    fn test_locale_ref() {
        let locale = LocaleRef::default();
        assert_eq!(locale.locale_id(), None);
        assert_eq!(locale.time_zone_id(), None);

        let locale = LocaleRef::new(Some("fr_FR"), Some("UTC"));
        assert_eq!(locale, LocaleRef::locale("fr_FR").with_time_zone("UTC"));
    }
}
