use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::bookmark::NewBookmark;
use crate::utils::{collapse_whitespace, split_tags};

/// Extracts bookmark candidates from an HTML page or a Netscape bookmark file
///
/// Relative links are resolved against `base`; links that do not end up as
/// `http`/`https` URLs are dropped.
pub fn parse(html: &str, base: Option<&Url>) -> Vec<NewBookmark> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a[href]").unwrap();
    let candidates = doc
        .select(&link_selector)
        .filter_map(|link| candidate_from_link(link, base))
        .collect::<Vec<_>>();

    ::log::debug!("HTML import found {} links", candidates.len());
    if !candidates.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            candidates.iter().take(5).map(|c| &c.url).collect::<Vec<_>>()
        );
    }

    candidates
}

fn candidate_from_link(link: ElementRef<'_>, base: Option<&Url>) -> Option<NewBookmark> {
    let href = link.value().attr("href")?;
    let url = resolve(href.trim(), base)?.to_string();

    let text = collapse_whitespace(&link.text().collect::<Vec<_>>().join(" "));
    let title = if text.is_empty() { url.clone() } else { text };

    let description = definition_after(link)
        .or_else(|| link.value().attr("title").map(collapse_whitespace))
        .filter(|d| !d.is_empty());

    let tags = link.value().attr("tags").map(split_tags).unwrap_or_default();

    Some(NewBookmark {
        title,
        url,
        description,
        tags,
    })
}

fn resolve(href: &str, base: Option<&Url>) -> Option<Url> {
    let parsed = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Netscape exports put the description in a `<dd>` right after the link's `<dt>`
fn definition_after(link: ElementRef<'_>) -> Option<String> {
    let term = link.parent().and_then(ElementRef::wrap)?;
    if term.value().name() != "dt" {
        return None;
    }

    let next = term.next_siblings().find_map(ElementRef::wrap)?;
    if next.value().name() != "dd" {
        return None;
    }

    Some(collapse_whitespace(&next.text().collect::<Vec<_>>().join(" ")))
}
