//! Locale validation and slug resolution. A visitor can follow a link minted
//! for one locale while browsing the other (language switch, shared URL), so
//! a slug that misses in the current locale's list is retried once through
//! the cross-locale slug map before giving up.

use super::{crossref, Locale, Slugged};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unsupported locale {0:?}")]
    UnsupportedLocale(String),
    #[error("no record found for slug {0:?}")]
    RecordNotFound(String),
}

/// Exact match against the supported locale set. Must succeed before any
/// dictionary access.
pub fn validate_locale(candidate: &str) -> Result<Locale, ResolveError> {
    Locale::ALL
        .into_iter()
        .find(|locale| locale.as_str() == candidate)
        .ok_or_else(|| ResolveError::UnsupportedLocale(candidate.to_string()))
}

/// Find the record identified by `slug` in `list` (the already-selected
/// locale's content list). Direct lookup first; on miss, the cross-locale
/// map may supply the slug variant for `locale` and the lookup is retried
/// with it. A slug the map knows but the list lacks is a data inconsistency
/// and still resolves to `RecordNotFound`, never to a different record.
pub fn resolve_record<'a, R: Slugged>(
    locale: Locale,
    slug: &str,
    list: &'a [R],
) -> Result<&'a R, ResolveError> {
    if let Some(record) = list.iter().find(|r| r.slug() == slug) {
        return Ok(record);
    }

    if let Some(pair) = crossref::slug_pair(slug) {
        let variant = pair.get(locale);
        if variant != slug {
            if let Some(record) = list.iter().find(|r| r.slug() == variant) {
                return Ok(record);
            }
        }
    }

    Err(ResolveError::RecordNotFound(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::get_dictionary;

    #[test]
    fn validates_supported_locales_only() {
        assert_eq!(validate_locale("it"), Ok(Locale::It));
        assert_eq!(validate_locale("en"), Ok(Locale::En));
        assert_eq!(
            validate_locale("fr"),
            Err(ResolveError::UnsupportedLocale("fr".to_string()))
        );
        assert_eq!(
            validate_locale("de"),
            Err(ResolveError::UnsupportedLocale("de".to_string()))
        );
        // Exact match, no case folding or trimming.
        assert!(validate_locale("IT").is_err());
        assert!(validate_locale("it ").is_err());
        assert!(validate_locale("").is_err());
    }

    #[test]
    fn every_listed_slug_resolves_directly() {
        for locale in Locale::ALL {
            let dictionary = get_dictionary(locale);
            for service in &dictionary.services.list {
                let found = resolve_record(locale, &service.id, &dictionary.services.list).unwrap();
                assert_eq!(found.id, service.id);
            }
            for member in &dictionary.team.members {
                let found = resolve_record(locale, &member.slug, &dictionary.team.members).unwrap();
                assert_eq!(found.slug, member.slug);
            }
        }
    }

    #[test]
    fn italian_slug_cross_resolves_under_english() {
        let dictionary = get_dictionary(Locale::En);
        let service =
            resolve_record(Locale::En, "supporto-su-misura", &dictionary.services.list).unwrap();
        assert_eq!(service.id, "tailored-support");
        assert_eq!(service.title, "Tailored Support");
    }

    #[test]
    fn english_slug_cross_resolves_under_italian() {
        let dictionary = get_dictionary(Locale::It);
        let service =
            resolve_record(Locale::It, "tailored-support", &dictionary.services.list).unwrap();
        assert_eq!(service.id, "supporto-su-misura");
    }

    #[test]
    fn cross_resolution_targets_the_same_logical_entity() {
        let it = get_dictionary(Locale::It);
        let en = get_dictionary(Locale::En);
        for service in &it.services.list {
            let counterpart = resolve_record(Locale::En, &service.id, &en.services.list).unwrap();
            // Same position in both lists identifies the same entity.
            let it_index = it.services.list.iter().position(|s| s.id == service.id);
            let en_index = en.services.list.iter().position(|s| s.id == counterpart.id);
            assert_eq!(it_index, en_index);
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let dictionary = get_dictionary(Locale::It);
        assert_eq!(
            resolve_record(Locale::It, "nonexistent-service", &dictionary.services.list).err(),
            Some(ResolveError::RecordNotFound("nonexistent-service".to_string()))
        );
    }

    struct Stub(&'static str);

    impl Slugged for Stub {
        fn slug(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn mapped_slug_with_missing_record_is_not_found() {
        // Map/dictionary disagreement: "supporto-su-misura" maps to
        // "tailored-support", which this list lacks. The resolver must not
        // substitute another record.
        let list = [Stub("technical-support"), Stub("training-support")];
        assert_eq!(
            resolve_record(Locale::En, "supporto-su-misura", &list).err(),
            Some(ResolveError::RecordNotFound("supporto-su-misura".to_string()))
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let dictionary = get_dictionary(Locale::En);
        let first =
            resolve_record(Locale::En, "tailored-support", &dictionary.services.list).unwrap();
        let second =
            resolve_record(Locale::En, "tailored-support", &dictionary.services.list).unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
