//! Locale reference data
//!
//! Two sources back every supported locale:
//! - Fluent resources (embedded at compile time) for relative calendar
//!   phrases such as "last week" or "in 3 months"
//! - chrono's POSIX locale tables for weekday names, month abbreviations
//!   and the short date pattern
//!
//! The catalog is built once at startup and shared read-only between
//! requests.

use chrono::{Locale as FormatLocale, NaiveDate, NaiveTime, TimeZone, Utc};
use fluent::concurrent::FluentBundle;
use fluent::{FluentArgs, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::fmt;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

use crate::error::CoreError;
use crate::granularity::Granularity;

/// Language used when nothing better matches
const DEFAULT_LANGUAGE: &str = "en";

/// Relative phrase resources, one per language
const TRANSLATIONS: &[(&str, &str)] = &[
    ("en", include_str!("../resources/locales/en.ftl")),
    ("de", include_str!("../resources/locales/de.ftl")),
    ("fr", include_str!("../resources/locales/fr.ftl")),
    ("es", include_str!("../resources/locales/es.ftl")),
    ("nl", include_str!("../resources/locales/nl.ftl")),
    ("it", include_str!("../resources/locales/it.ftl")),
    ("pt", include_str!("../resources/locales/pt.ftl")),
];

/// Languages offered to callers
///
/// `default_region` picks the chrono locale for a bare language tag;
/// `regions` are the regional variants listed alongside it.
struct LanguageDefinition {
    language: &'static str,
    native_name: &'static str,
    default_region: &'static str,
    regions: &'static [&'static str],
}

const fn language(
    language: &'static str,
    native_name: &'static str,
    default_region: &'static str,
    regions: &'static [&'static str],
) -> LanguageDefinition {
    LanguageDefinition { language, native_name, default_region, regions }
}

const LANGUAGES: &[LanguageDefinition] = &[
    language("en", "English", "US", &["US", "GB", "AU", "CA", "IE", "NZ", "IN", "ZA"]),
    language("de", "Deutsch", "DE", &["DE", "AT", "CH", "BE", "LU"]),
    language("fr", "Français", "FR", &["FR", "BE", "CA", "CH", "LU"]),
    language("es", "Español", "ES", &["ES", "MX", "AR", "CL", "CO", "PE", "US"]),
    language("nl", "Nederlands", "NL", &["NL", "BE"]),
    language("it", "Italiano", "IT", &["IT", "CH"]),
    language("pt", "Português", "PT", &["PT", "BR"]),
    language("sv", "Svenska", "SE", &["SE", "FI"]),
    language("da", "Dansk", "DK", &["DK"]),
    language("nb", "Norsk bokmål", "NO", &["NO"]),
    language("fi", "Suomi", "FI", &["FI"]),
    language("is", "Íslenska", "IS", &["IS"]),
    language("et", "Eesti", "EE", &["EE"]),
    language("lv", "Latviešu", "LV", &["LV"]),
    language("lt", "Lietuvių", "LT", &["LT"]),
    language("pl", "Polski", "PL", &["PL"]),
    language("cs", "Čeština", "CZ", &["CZ"]),
    language("sk", "Slovenčina", "SK", &["SK"]),
    language("sl", "Slovenščina", "SI", &["SI"]),
    language("hr", "Hrvatski", "HR", &["HR"]),
    language("hu", "Magyar", "HU", &["HU"]),
    language("ro", "Română", "RO", &["RO"]),
    language("bg", "Български", "BG", &["BG"]),
    language("el", "Ελληνικά", "GR", &["GR", "CY"]),
    language("ru", "Русский", "RU", &["RU", "UA"]),
    language("uk", "Українська", "UA", &["UA"]),
    language("tr", "Türkçe", "TR", &["TR"]),
    language("ca", "Català", "ES", &["ES", "AD"]),
    language("he", "עברית", "IL", &["IL"]),
    language("ar", "العربية", "SA", &["SA", "EG", "AE"]),
    language("hi", "हिन्दी", "IN", &["IN"]),
    language("th", "ไทย", "TH", &["TH"]),
    language("vi", "Tiếng Việt", "VN", &["VN"]),
    language("id", "Bahasa Indonesia", "ID", &["ID"]),
    language("ja", "日本語", "JP", &["JP"]),
    language("ko", "한국어", "KR", &["KR"]),
    language("zh", "中文", "CN", &["CN", "TW", "HK", "SG"]),
];

/// Short dates that replace the POSIX `%x` pattern, keyed by chrono locale
const SHORT_DATE_PATTERNS: &[(&str, &str)] = &[
    ("en_US", "%-m/%-d/%Y"),
    ("en_GB", "%d/%m/%Y"),
    ("de_DE", "%-d.%-m.%Y"),
    ("de_AT", "%-d.%-m.%Y"),
    ("de_CH", "%-d.%-m.%Y"),
    ("es_ES", "%-d/%-m/%Y"),
    ("es_MX", "%-d/%-m/%Y"),
    ("nl_NL", "%-d-%-m-%Y"),
    ("nl_BE", "%-d/%-m/%Y"),
    ("it_IT", "%-d/%-m/%Y"),
    ("pt_PT", "%d/%m/%Y"),
    ("pt_BR", "%d/%m/%Y"),
];

const FALLBACK_FORMATS: &str = "en_US";

type Bundle = FluentBundle<FluentResource>;

/// A locale offered to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub tag: String,
    pub native_name: &'static str,
}

impl LocaleEntry {
    /// Display title, e.g. `Deutsch (de-AT)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.native_name, self.tag)
    }
}

/// Immutable locale reference data shared by all requests
pub struct LocaleCatalog {
    languages: Vec<LanguageIdentifier>,
    bundles: Vec<Bundle>,
    default_language: LanguageIdentifier,
}

impl fmt::Debug for LocaleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCatalog")
            .field("languages", &self.languages)
            .field("default_language", &self.default_language)
            .finish()
    }
}

impl LocaleCatalog {
    /// Parses the embedded resources
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Resource` if an embedded resource does not parse.
    pub fn load() -> Result<Self, CoreError> {
        let mut languages = Vec::with_capacity(TRANSLATIONS.len());
        let mut bundles = Vec::with_capacity(TRANSLATIONS.len());

        for (tag, source) in TRANSLATIONS {
            let language: LanguageIdentifier = tag
                .parse()
                .map_err(|_| CoreError::resource(format!("invalid language tag {tag}")))?;
            let resource = FluentResource::try_new((*source).to_string()).map_err(|(_, errors)| {
                CoreError::resource(format!("{tag}: {} syntax errors", errors.len()))
            })?;

            let mut bundle = FluentBundle::new_concurrent(vec![language.clone()]);
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                CoreError::resource(format!("{tag}: {} conflicting messages", errors.len()))
            })?;

            languages.push(language);
            bundles.push(bundle);
        }

        let default_language: LanguageIdentifier = DEFAULT_LANGUAGE
            .parse()
            .map_err(|_| CoreError::resource("invalid default language"))?;

        info!(
            languages = languages.len(),
            locale_languages = LANGUAGES.len(),
            "Locale catalog loaded"
        );

        Ok(Self {
            languages,
            bundles,
            default_language,
        })
    }

    /// Locales offered to callers: each language, then its regional
    /// variants. Tags without chrono locale data are left out.
    pub fn entries(&self) -> impl Iterator<Item = LocaleEntry> + '_ {
        LANGUAGES.iter().flat_map(|definition| {
            let regional = definition
                .regions
                .iter()
                .map(move |region| format!("{}-{}", definition.language, region));
            std::iter::once(definition.language.to_string())
                .chain(regional)
                .filter(|tag| {
                    tag.parse::<LanguageIdentifier>()
                        .is_ok_and(|id| format_locale(&id).is_some())
                })
                .map(move |tag| LocaleEntry {
                    tag,
                    native_name: definition.native_name,
                })
        })
    }

    /// Resolves a caller-supplied tag such as `de-AT` or `pt_BR`
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLocale` if the tag is not a syntactically
    /// valid language identifier. Well-formed tags without data fall back to
    /// English.
    pub fn resolve(&self, tag: &str) -> Result<ResolvedLocale<'_>, CoreError> {
        let normalized = tag.trim().replace('_', "-");
        let requested: LanguageIdentifier = normalized
            .parse()
            .map_err(|_| CoreError::invalid_locale(tag))?;

        let (format_name, formats) = match format_locale(&requested) {
            Some(found) => found,
            None => {
                warn!(locale = %requested, "No date formats, falling back to {}", FALLBACK_FORMATS);
                (FALLBACK_FORMATS.to_string(), FormatLocale::en_US)
            }
        };

        let negotiated = negotiate_languages(
            std::slice::from_ref(&requested),
            &self.languages,
            Some(&self.default_language),
            NegotiationStrategy::Lookup,
        );
        let language = negotiated.first().copied().unwrap_or(&self.default_language);
        if language == &self.default_language && requested.language != self.default_language.language {
            debug!(locale = %requested, "No relative phrases, using {}", DEFAULT_LANGUAGE);
        }
        let index = self
            .languages
            .iter()
            .position(|l| l == language)
            .ok_or_else(|| CoreError::resource(format!("no bundle for {language}")))?;

        let short_date = SHORT_DATE_PATTERNS
            .iter()
            .find(|(name, _)| *name == format_name)
            .map_or("%x", |(_, pattern)| *pattern);

        Ok(ResolvedLocale {
            tag: requested,
            bundle: &self.bundles[index],
            formats,
            short_date,
        })
    }
}

/// chrono locale for a tag, e.g. `sv_SE` for `sv` or `sv-SE`
///
/// An unknown region falls back to the language's default region.
fn format_locale(requested: &LanguageIdentifier) -> Option<(String, FormatLocale)> {
    let language = requested.language.as_str();
    let default_region = LANGUAGES
        .iter()
        .find(|d| d.language == language)
        .map(|d| d.default_region);

    requested
        .region
        .as_ref()
        .map(|region| region.as_str())
        .into_iter()
        .chain(default_region)
        .map(|region| format!("{language}_{region}"))
        .find_map(|name| {
            FormatLocale::try_from(name.as_str())
                .ok()
                .map(|formats| (name, formats))
        })
}

/// Locale data selected for one request
pub struct ResolvedLocale<'a> {
    tag: LanguageIdentifier,
    bundle: &'a Bundle,
    formats: FormatLocale,
    short_date: &'static str,
}

impl fmt::Debug for ResolvedLocale<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedLocale")
            .field("tag", &self.tag)
            .field("formats", &self.formats)
            .finish()
    }
}

impl ResolvedLocale<'_> {
    /// The requested language identifier, canonicalized
    pub fn tag(&self) -> &LanguageIdentifier {
        &self.tag
    }

    /// Locale short date, e.g. `1/5/2024` or `5.1.2024`
    pub fn short_date(&self, date: NaiveDate) -> String {
        self.localized(date, self.short_date)
    }

    /// Full weekday name, e.g. `Friday` or `vendredi`
    pub fn weekday(&self, date: NaiveDate) -> String {
        self.localized(date, "%A")
    }

    /// Abbreviated month name, e.g. `Jan` or `janv.`
    pub fn month_short(&self, date: NaiveDate) -> String {
        self.localized(date, "%b")
    }

    /// Calendar phrase for an offset of `offset` units from now
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Resource` if the message is missing or fails to
    /// format.
    pub fn relative(&self, granularity: Granularity, offset: i64) -> Result<String, CoreError> {
        let id = format!("relative-{}", granularity.unit_key());
        let pattern = self
            .bundle
            .get_message(&id)
            .and_then(|message| message.value())
            .ok_or_else(|| CoreError::resource(format!("missing message {id}")))?;

        let direction = match offset {
            0 => "present",
            o if o < 0 => "past",
            _ => "future",
        };
        let mut args = FluentArgs::new();
        args.set("count", offset.unsigned_abs());
        args.set("direction", direction);

        let mut errors = Vec::new();
        let phrase = self.bundle.format_pattern(pattern, Some(&args), &mut errors);
        if let Some(error) = errors.first() {
            return Err(CoreError::resource(format!("{id}: {error}")));
        }
        Ok(phrase.into_owned())
    }

    fn localized(&self, date: NaiveDate, pattern: &str) -> String {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized(pattern, self.formats)
            .to_string()
    }
}
