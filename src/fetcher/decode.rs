use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("Failed to compile charset regex")
});

// Matches both <meta charset="..."> and the http-equiv Content-Type form.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s;/>]+)"#)
        .expect("Failed to compile meta charset regex")
});

/// Decode a fetched body to UTF-8, returning the text and the name of the
/// encoding that ended up being used.
pub fn decode_body(content_type: &str, body: &[u8]) -> Result<(String, &'static str), FetchError> {
    let encoding = sniff_encoding(content_type, body);
    let (decoded, used, had_errors) = encoding.decode(body);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            used.name()
        )));
    }
    Ok((decoded.into_owned(), used.name()))
}

/// Resolution order: Content-Type header charset, `<meta>` charset within the
/// first 4KiB, then chardetng's statistical guess.
fn sniff_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(4096)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = label_from(&META_CHARSET, &head_str) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let captures = pattern.captures(haystack)?;
    let label = captures.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
