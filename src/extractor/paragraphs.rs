//! Strategy 2: generic paragraph scraping.
//!
//! Collects every `<p>` whose trimmed text is longer than
//! [`MIN_PARAGRAPH_CHARS`] and joins the survivors with a blank line.

use scraper::{Html, Selector};

use crate::extractor::{MIN_PARAGRAPH_CHARS, StrategyError};
use crate::fetcher;

pub async fn attempt(url: &str) -> Result<String, StrategyError> {
    let page = fetcher::fetch(url).await?;
    from_html(&page.body)
}

fn from_html(body: &str) -> Result<String, StrategyError> {
    let selector = Selector::parse("p").map_err(|e| StrategyError::Parse(e.to_string()))?;
    let document = Html::parse_document(body);

    let mut kept = Vec::new();
    for paragraph in document.select(&selector) {
        let text = paragraph.text().collect::<String>();
        let text = text.trim();
        if text.chars().count() > MIN_PARAGRAPH_CHARS {
            kept.push(text.to_string());
        }
    }

    if kept.is_empty() {
        return Err(StrategyError::NoParagraphs {
            min: MIN_PARAGRAPH_CHARS,
        });
    }

    Ok(kept.join("\n\n"))
}
