/*!
 * Site language lookup.
 *
 * Callers resolve the current site themselves and hand its languages to the
 * availability checker; this trait is the seam for that lookup.
 */

use crate::app_config::{AppConfig, SiteLanguage};
use crate::errors::ConfigurationError;
use crate::language_utils;

/// Source of the languages configured for a site
pub trait SiteLanguageProvider {
    /// All languages of the site, in configuration order
    fn site_languages(&self, site_identifier: &str) -> Result<&[SiteLanguage], ConfigurationError>;
}

impl SiteLanguageProvider for AppConfig {
    fn site_languages(&self, site_identifier: &str) -> Result<&[SiteLanguage], ConfigurationError> {
        self.get_site(site_identifier)
            .map(|site| site.languages.as_slice())
            .ok_or_else(|| ConfigurationError::UnknownSite(site_identifier.to_string()))
    }
}

/// Resolve a language given either a numeric id or an ISO code
///
/// Numeric input is returned as-is so that unknown ids still reach the
/// availability check and fail there. ISO codes are matched against the
/// configured `iso_code` of each language.
pub fn resolve_language_id(
    languages: &[SiteLanguage],
    language: &str,
) -> Option<i64> {
    if let Ok(id) = language.trim().parse::<i64>() {
        return Some(id);
    }

    languages
        .iter()
        .find(|l| {
            l.iso_code
                .as_deref()
                .is_some_and(|code| language_utils::language_codes_match(code, language))
        })
        .map(|l| l.language_id)
}
