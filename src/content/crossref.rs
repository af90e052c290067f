//! Cross-locale slug map: the single source of truth for how the localized
//! slugs of one logical entity correspond across languages. Service slugs
//! differ per language; team member slugs currently coincide but still go
//! through the same table.

use super::Locale;

#[derive(Debug, PartialEq, Eq)]
pub struct SlugPair {
    pub it: &'static str,
    pub en: &'static str,
}

impl SlugPair {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::It => self.it,
            Locale::En => self.en,
        }
    }
}

const SLUG_PAIRS: [SlugPair; 7] = [
    SlugPair {
        it: "supporto-su-misura",
        en: "tailored-support",
    },
    SlugPair {
        it: "supporto-tecnico",
        en: "technical-support",
    },
    SlugPair {
        it: "supporto-gestionale-organizzativo",
        en: "management-organizational-support",
    },
    SlugPair {
        it: "supporto-commerciale-marketing",
        en: "commercial-marketing-support",
    },
    SlugPair {
        it: "supporto-formativo",
        en: "training-support",
    },
    SlugPair {
        it: "mauro-balduccini",
        en: "mauro-balduccini",
    },
    SlugPair {
        it: "livia-balduccini",
        en: "livia-balduccini",
    },
];

/// Look up a slug written in either language. Exact, case-sensitive match.
pub fn slug_pair(slug: &str) -> Option<&'static SlugPair> {
    SLUG_PAIRS.iter().find(|p| p.it == slug || p.en == slug)
}

/// The equivalent slug in `target`, or the input itself when the map does
/// not know it. Used for language-switch links and sitemap alternates, where
/// an unknown slug is kept as-is rather than treated as an error.
pub fn translate_slug(slug: &str, target: Locale) -> &str {
    match slug_pair(slug) {
        Some(pair) => pair.get(target),
        None => slug,
    }
}

pub fn pairs() -> impl Iterator<Item = &'static SlugPair> {
    SLUG_PAIRS.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_works_from_either_side() {
        for pair in pairs() {
            assert_eq!(slug_pair(pair.it), Some(pair));
            assert_eq!(slug_pair(pair.en), Some(pair));
        }
    }

    #[test]
    fn translation_is_symmetric() {
        for pair in pairs() {
            assert_eq!(translate_slug(pair.it, Locale::En), pair.en);
            assert_eq!(translate_slug(pair.en, Locale::It), pair.it);
        }
    }

    #[test]
    fn unknown_slug_translates_to_itself() {
        assert_eq!(translate_slug("nonexistent-service", Locale::En), "nonexistent-service");
    }

    #[test]
    fn slugs_are_unique_across_the_table() {
        let mut seen = std::collections::HashSet::new();
        for pair in pairs() {
            assert!(seen.insert(pair.it), "duplicate it slug {:?}", pair.it);
            // Team slugs are identical in both languages.
            if pair.en != pair.it {
                assert!(seen.insert(pair.en), "duplicate en slug {:?}", pair.en);
            }
        }
    }
}
