//! Strategy 3: dedicated article-zone extraction, gated to English content.
//!
//! Walks a fixed list of selectors that publishers typically use for the
//! article body and takes the first zone whose text clears
//! [`MIN_ARTICLE_CHARS`], accepting it only when the text reads as English.

use scraper::{Html, Selector};
use whatlang::Lang;

use crate::extractor::{MIN_ARTICLE_CHARS, StrategyError};
use crate::fetcher;

const ZONE_SELECTORS: [&str; 9] = [
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post",
    ".article",
    "#content",
    "#main",
    ".entry-content",
];

const MIN_LANG_CONFIDENCE: f64 = 0.25;

pub async fn attempt(url: &str) -> Result<String, StrategyError> {
    let page = fetcher::fetch(url).await?;
    from_html(&page.body)
}

fn from_html(body: &str) -> Result<String, StrategyError> {
    let document = Html::parse_document(body);
    let mut longest = 0usize;

    for selector_str in ZONE_SELECTORS {
        let selector =
            Selector::parse(selector_str).map_err(|e| StrategyError::Parse(e.to_string()))?;
        for zone in document.select(&selector) {
            let text = zone.text().collect::<String>();
            let text = text.trim();
            let chars = text.chars().count();
            if chars > MIN_ARTICLE_CHARS {
                return require_english(text.to_string());
            }
            longest = longest.max(chars);
        }
    }

    Err(StrategyError::TooShort {
        got: longest,
        min: MIN_ARTICLE_CHARS,
    })
}

fn require_english(text: String) -> Result<String, StrategyError> {
    match whatlang::detect(&text) {
        Some(info) if info.lang() == Lang::Eng && info.confidence() >= MIN_LANG_CONFIDENCE => {
            Ok(text)
        }
        Some(info) => Err(StrategyError::WrongLanguage(
            info.lang().code().to_string(),
        )),
        None => Err(StrategyError::WrongLanguage("unknown".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_BODY: &str =
        "Shares of the company rose sharply in early trading after the quarterly report \
         showed revenue well ahead of analyst expectations. Management raised full year \
         guidance and announced an expanded buyback program, citing strong demand across \
         all regions and improving margins in the services segment.";

    #[test]
    fn accepts_english_article_zone() {
        let html = format!("<html><body><article>{ENGLISH_BODY}</article></body></html>");
        let text = from_html(&html).unwrap();
        assert_eq!(text, ENGLISH_BODY);
    }

    #[test]
    fn falls_back_through_selector_list() {
        let html = format!(
            "<html><body><div class=\"entry-content\">{ENGLISH_BODY}</div></body></html>"
        );
        let text = from_html(&html).unwrap();
        assert_eq!(text, ENGLISH_BODY);
    }

    #[test]
    fn rejects_non_english_zone() {
        let spanish = "Las acciones de la empresa subieron con fuerza en las primeras \
                       operaciones despues de que el informe trimestral mostrara ingresos muy \
                       por encima de las expectativas de los analistas. La direccion elevo sus \
                       previsiones para todo el ano y anuncio un programa ampliado de recompra.";
        let html = format!("<html><body><article>{spanish}</article></body></html>");

        let err = from_html(&html).unwrap_err();
        assert!(matches!(err, StrategyError::WrongLanguage(_)));
    }

    #[test]
    fn rejects_when_no_zone_is_long_enough() {
        let html = "<html><body><article>Too small.</article>\
                    <div class=\"content\">Also small.</div></body></html>";

        let err = from_html(html).unwrap_err();
        assert!(matches!(
            err,
            StrategyError::TooShort { got, min: MIN_ARTICLE_CHARS } if got < MIN_ARTICLE_CHARS
        ));
    }
}
