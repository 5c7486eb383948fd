//! Strategy 1: readability-style boilerplate removal over the full page.

use readability::extractor;
use url::Url;

use crate::extractor::{MIN_ARTICLE_CHARS, StrategyError};
use crate::fetcher;

pub async fn attempt(url: &str) -> Result<String, StrategyError> {
    let page = fetcher::fetch(url).await?;
    from_page(&page.body, &page.url_final)
}

fn from_page(body: &str, base_url: &Url) -> Result<String, StrategyError> {
    let article = extractor::extract(&mut body.as_bytes(), base_url)
        .map_err(|e| StrategyError::Parse(e.to_string()))?;

    let chars = article.text.chars().count();
    if chars > MIN_ARTICLE_CHARS {
        Ok(article.text)
    } else {
        Err(StrategyError::TooShort {
            got: chars,
            min: MIN_ARTICLE_CHARS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/article").unwrap()
    }

    #[test]
    fn accepts_long_article_body() {
        let paragraph =
            "The central bank held rates steady on Wednesday, citing persistent uncertainty \
             about inflation and a labor market that has cooled faster than expected. ";
        let html = format!(
            "<html><head><title>Rates Held</title></head><body><article>{}</article></body></html>",
            format!("<p>{paragraph}</p>").repeat(4)
        );

        let text = from_page(&html, &base()).unwrap();
        assert!(text.chars().count() > MIN_ARTICLE_CHARS);
        assert!(text.contains("central bank held rates steady"));
    }

    #[test]
    fn rejects_short_fragment() {
        let html = "<html><head><title>Stub</title></head>\
                    <body><article><p>Subscribe to continue reading.</p></article></body></html>";

        let err = from_page(html, &base()).unwrap_err();
        assert!(matches!(
            err,
            StrategyError::TooShort { .. } | StrategyError::Parse(_)
        ));
    }
}
