use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use super::links::{dedup_preserving_order, extract_text_urls};
use crate::domain::{EmailBody, NormalizedContent};

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

const SILENT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Produces the canonical text and the link list for an email body.
///
/// A supplied plaintext body always wins over the HTML for the text. Links come
/// from anchors when HTML is present and from a URL scan of the text otherwise.
/// Malformed markup is parsed leniently; this never fails.
pub fn normalize(body: &EmailBody) -> NormalizedContent {
    let html = body.html();
    let document = (!html.is_empty()).then(|| Html::parse_document(html));

    let text = match (body.text(), &document) {
        (text, _) if !text.is_empty() => text.to_string(),
        (_, Some(document)) => document_text(document),
        _ => String::new(),
    };

    let links = match &document {
        Some(document) => anchor_links(document),
        None => extract_text_urls(&text),
    };

    debug!(
        target: "content",
        text_len = text.len(),
        links = links.len(),
        from_html = document.is_some(),
        "email body normalized"
    );

    NormalizedContent { text, links }
}

fn document_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut text = String::new();
    for node in body.descendants() {
        if let Node::Text(chunk) = node.value() {
            let silenced = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| SILENT_ELEMENTS.contains(&el.value().name()));
            if !silenced {
                text.push_str(chunk);
            }
        }
    }
    text.trim().to_string()
}

fn anchor_links(document: &Html) -> Vec<String> {
    dedup_preserving_order(
        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| !href.is_empty())
            .map(str::to_string),
    )
}
