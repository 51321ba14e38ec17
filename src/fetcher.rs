use std::time::Duration;

use scraper::{ElementRef, Html, Node, Selector};

use crate::config::Config;
use crate::data_models::{DocumentExcerpt, MAX_EXCERPT_CHARS};

/// Where the readable part of a page usually lives, most specific first.
/// The first selector that matches anything wins; matches are never merged.
pub const CONTENT_SELECTORS: [&str; 4] = ["article", "div.legal-content", "main", "body"];

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "template"];

pub struct ContentFetcher {
    http: reqwest::Client,
    timeout: Duration,
}

impl ContentFetcher {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            timeout: config.fetch_timeout,
        }
    }

    /// Downloads `url` and returns its excerpt. Any failure yields an empty excerpt.
    pub async fn fetch(&self, url: &str) -> DocumentExcerpt {
        match self.fetch_page(url).await {
            Ok(html) => extract_excerpt(&html),
            Err(e) => {
                log::debug!("error fetching page {url}, error: {:#}", e);
                DocumentExcerpt::empty()
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> reqwest::Result<String> {
        let res = self.http.get(url).timeout(self.timeout).send().await?;
        if !res.status().is_success() {
            // error pages still carry text, keep parsing
            log::debug!("page {url} returned status {}", res.status());
        }
        res.text().await
    }
}

/// Picks the first element matching [`CONTENT_SELECTORS`] and returns its
/// stripped text, one text segment per line. Falls back to the raw text of
/// the whole document when nothing matches.
pub fn extract_excerpt(html: &str) -> DocumentExcerpt {
    let document = Html::parse_document(html);

    for css in CONTENT_SELECTORS {
        let selector = match Selector::parse(css) {
            Ok(selector) => selector,
            Err(e) => {
                log::error!("invalid content selector {css}: {:?}", e);
                return DocumentExcerpt::empty();
            }
        };
        if let Some(element) = document.select(&selector).next() {
            return DocumentExcerpt::new(&stripped_text(element));
        }
    }

    // html5ever always synthesizes a <body>, so this only runs for fragments
    // that somehow lose it.
    let all_text: String = document.root_element().text().collect();
    DocumentExcerpt::new(&all_text)
}

/// Walks the subtree with an explicit stack, so nesting depth costs heap, not call stack.
/// Stops once the joined text already fills an excerpt.
fn stripped_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    let mut chars = 0usize;
    let mut stack = vec![*element];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(t) => {
                let segment = t.trim();
                if segment.is_empty() {
                    continue;
                }
                if !text.is_empty() {
                    text.push('\n');
                    chars += 1;
                }
                text.push_str(segment);
                chars += segment.chars().count();
                if chars >= MAX_EXCERPT_CHARS {
                    break;
                }
            }
            Node::Element(el) if SKIPPED_ELEMENTS.contains(&el.name()) => {}
            _ => stack.extend(node.children().rev()),
        }
    }
    text
}
