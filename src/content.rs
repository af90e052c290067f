pub mod crossref;
pub mod resolve;

use std::fmt;

use eyre::bail;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The closed set of languages this site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    It,
    En,
}

pub const DEFAULT_LOCALE: Locale = Locale::It;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::It => Locale::En,
            Locale::En => Locale::It,
        }
    }

    /// Short label shown on the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::It => "IT",
            Locale::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content record addressable by its locale-specific slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

#[derive(Debug, Deserialize)]
pub struct Dictionary {
    pub seo: Seo,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub features: Features,
    pub services: Services,
    pub team: Team,
    pub contact: Contact,
    pub footer: Footer,
    pub privacy: LegalPage,
    pub cookies: LegalPage,
    pub terms: LegalPage,
    pub not_found: NotFoundCopy,
}

#[derive(Debug, Deserialize)]
pub struct Seo {
    pub site_name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Nav {
    pub about: String,
    pub services: String,
    pub team: String,
    pub contact: String,
}

#[derive(Debug, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Deserialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stats: Stats,
}

#[derive(Debug, Deserialize)]
pub struct Stats {
    pub years: Stat,
    pub clients: Stat,
    pub projects: Stat,
}

#[derive(Debug, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct Features {
    pub title: String,
    pub subtitle: String,
    pub list: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Services {
    pub title: String,
    pub subtitle: String,
    pub detail: ServiceDetailCopy,
    pub list: Vec<Service>,
}

/// Labels shared by every service detail page.
#[derive(Debug, Deserialize)]
pub struct ServiceDetailCopy {
    pub back_to_services: String,
    pub details_title: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button: String,
}

#[derive(Debug, Deserialize)]
pub struct Service {
    /// Locale-specific slug, used as the path segment of the detail page.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: ServiceContent,
}

#[derive(Debug, Deserialize)]
pub struct ServiceContent {
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
}

impl Slugged for Service {
    fn slug(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct Team {
    pub title: String,
    pub subtitle: String,
    pub back_to_team: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMember {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub bio_title: String,
    pub bio_content: String,
    /// Label of the CV download link; the file itself lives at
    /// `/docs/cv-{slug}-{locale}.pdf`.
    pub cv_label: String,
    pub personal_data: Vec<PersonalDatum>,
    pub sections: MemberSections,
    pub timeline: Vec<TimelineEntry>,
    pub skills: Vec<String>,
    pub highlights: Vec<String>,
}

/// One labelled line of the personal-data panel (birth, education, ...).
/// The set of lines differs per member, so they ship as label/value pairs.
#[derive(Debug, Deserialize)]
pub struct PersonalDatum {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberSections {
    pub experience: String,
    pub skills: String,
    pub highlights: String,
}

#[derive(Debug, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub points: Vec<String>,
}

impl Slugged for TeamMember {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Deserialize)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub info: ContactInfo,
}

#[derive(Debug, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub email_value: String,
    pub location: String,
    pub location_value: String,
}

#[derive(Debug, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub rights: String,
    pub legal_info: String,
    pub links: FooterLinks,
}

#[derive(Debug, Deserialize)]
pub struct FooterLinks {
    pub privacy: String,
    pub cookies: String,
    pub terms: String,
}

#[derive(Debug, Deserialize)]
pub struct LegalPage {
    pub title: String,
    pub introduction: String,
    pub sections: Vec<LegalSection>,
}

#[derive(Debug, Deserialize)]
pub struct LegalSection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct NotFoundCopy {
    pub title: String,
    pub message: String,
    pub back_home: String,
}

static DICTIONARY_IT: Lazy<Dictionary> = Lazy::new(|| {
    parse_dictionary(
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/it.json")),
        Locale::It,
    )
});

static DICTIONARY_EN: Lazy<Dictionary> = Lazy::new(|| {
    parse_dictionary(
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/en.json")),
        Locale::En,
    )
});

fn parse_dictionary(raw: &str, locale: Locale) -> Dictionary {
    serde_json::from_str(raw)
        .unwrap_or_else(|error| panic!("malformed {locale} dictionary: {error}"))
}

/// Full content tree for one locale. Pure lookup over static data; the
/// locale has already been validated by the routing boundary.
pub fn get_dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::It => &DICTIONARY_IT,
        Locale::En => &DICTIONARY_EN,
    }
}

/// Startup check that the dictionaries and the cross-locale slug map agree:
/// every listed slug must be known to the map, must be the map's canonical
/// slug for its own locale, and its counterpart must exist in the other
/// locale's list.
pub fn verify_cross_references() -> eyre::Result<()> {
    for locale in Locale::ALL {
        let dictionary = get_dictionary(locale);
        let other = get_dictionary(locale.other());
        verify_list(locale, "service", &dictionary.services.list, &other.services.list)?;
        verify_list(locale, "team member", &dictionary.team.members, &other.team.members)?;
    }
    Ok(())
}

fn verify_list<R: Slugged>(
    locale: Locale,
    kind: &str,
    list: &[R],
    other_list: &[R],
) -> eyre::Result<()> {
    for record in list {
        let slug = record.slug();
        let Some(pair) = crossref::slug_pair(slug) else {
            bail!("{kind} slug {slug:?} ({locale}) is missing from the cross-locale slug map");
        };
        if pair.get(locale) != slug {
            bail!("{kind} slug {slug:?} is not the canonical {locale} slug of its map entry");
        }
        let counterpart = pair.get(locale.other());
        if !other_list.iter().any(|r| r.slug() == counterpart) {
            bail!(
                "{kind} slug {slug:?} ({locale}) maps to {counterpart:?}, which is absent from \
                 the {} dictionary",
                locale.other()
            );
        }
    }
    Ok(())
}
