//! Rendered-page snapshot with CSS-selector query primitives

use scraper::{ElementRef, Html, Selector};

use crate::error::QueryError;

/// A fully rendered page: the URL it was loaded from plus its HTML snapshot.
///
/// Queries parse the snapshot on demand and hand each matched element to an
/// extraction closure. Closures must return owned data; no DOM handle
/// outlives the call.
#[derive(Debug, Clone)]
pub struct Page {
    url: String,
    html: String,
}

impl Page {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self { url: url.into(), html: html.into() }
    }

    /// URL this page was navigated to. Relative links resolve against it.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw rendered HTML
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Run `extract` over every element matching `selector`, in document
    /// order. Matching nothing yields an empty vec, not an error.
    pub fn query_all<T>(
        &self,
        selector: &str,
        extract: impl Fn(ElementRef<'_>) -> T,
    ) -> Result<Vec<T>, QueryError> {
        let sel = parse_selector(selector)?;
        let doc = Html::parse_document(&self.html);
        Ok(doc.select(&sel).map(extract).collect())
    }

    /// Like [`query_all`](Self::query_all) but requires at least one match
    /// and extracts from the first.
    pub fn query_single<T>(
        &self,
        selector: &str,
        extract: impl Fn(ElementRef<'_>) -> T,
    ) -> Result<T, QueryError> {
        let sel = parse_selector(selector)?;
        let doc = Html::parse_document(&self.html);
        let element = doc
            .select(&sel)
            .next()
            .ok_or_else(|| QueryError::NoMatch { selector: selector.to_string() })?;
        Ok(extract(element))
    }
}

fn parse_selector(selector: &str) -> Result<Selector, QueryError> {
    Selector::parse(selector)
        .map_err(|_| QueryError::InvalidSelector { selector: selector.to_string() })
}

/// Concatenated text content of an element, whitespace-trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Value of an attribute, if present
pub fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_string)
}
