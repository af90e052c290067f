//! `sitemap.xml` generation: every (locale × page) pair, each entry carrying
//! hreflang alternates for both locales. Service alternates translate the
//! slug through the cross-locale map so each language links its own slug.

use itertools::Itertools;
use time::{Date, OffsetDateTime};
use url::Url;

use crate::content::{crossref, get_dictionary, Locale};

const LEGAL_PATHS: [&str; 3] = ["privacy-policy", "cookie-policy", "terms-of-service"];

pub fn render_sitemap(public_url: &Url) -> String {
    let base = public_url.as_str().trim_end_matches('/');
    let today = OffsetDateTime::now_utc().date();

    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for locale in Locale::ALL {
        push_entry(
            &mut out,
            &format!("{base}/{locale}"),
            today,
            "weekly",
            "1.0",
            |l| format!("{base}/{l}"),
        );
    }

    for locale in Locale::ALL {
        let dictionary = get_dictionary(locale);
        for service in &dictionary.services.list {
            push_entry(
                &mut out,
                &format!("{base}/{locale}/services/{}", service.id),
                today,
                "monthly",
                "0.8",
                |l| {
                    format!(
                        "{base}/{l}/services/{}",
                        crossref::translate_slug(&service.id, l)
                    )
                },
            );
        }
        for member in &dictionary.team.members {
            push_entry(
                &mut out,
                &format!("{base}/{locale}/team/{}", member.slug),
                today,
                "monthly",
                "0.7",
                |l| {
                    format!(
                        "{base}/{l}/team/{}",
                        crossref::translate_slug(&member.slug, l)
                    )
                },
            );
        }
    }

    for (locale, path) in Locale::ALL.iter().cartesian_product(LEGAL_PATHS) {
        push_entry(
            &mut out,
            &format!("{base}/{locale}/{path}"),
            today,
            "yearly",
            "0.3",
            |l| format!("{base}/{l}/{path}"),
        );
    }

    out.push_str("</urlset>\n");
    out
}

fn push_entry(
    out: &mut String,
    loc: &str,
    lastmod: Date,
    changefreq: &str,
    priority: &str,
    alternate: impl Fn(Locale) -> String,
) {
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{loc}</loc>\n"));
    out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    out.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    out.push_str(&format!("    <priority>{priority}</priority>\n"));
    for locale in Locale::ALL {
        out.push_str(&format!(
            "    <xhtml:link rel=\"alternate\" hreflang=\"{locale}\" href=\"{}\"/>\n",
            alternate(locale)
        ));
    }
    out.push_str("  </url>\n");
}
