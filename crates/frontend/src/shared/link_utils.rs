//! Links embedded in free-text record fields.
//!
//! QA staff paste whole sentences into the link field ("see https://... for
//! details"), so the URL is pulled out before opening it.

use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhttps?://\S+").unwrap_or_else(|e| panic!("invalid url pattern: {e}"))
});

/// First `http(s)://` token in `text`, falling back to the text from the
/// first literal `https` onwards.
pub fn extract_first_url(text: &str) -> Option<String> {
    if let Some(found) = URL_RE.find(text) {
        return Some(found.as_str().to_string());
    }
    text.find("https").map(|start| text[start..].to_string())
}

/// Link field after an explicit "Extract": the first URL, or the field
/// unchanged when it holds none.
pub fn extracted_link(text: &str) -> String {
    extract_first_url(text).unwrap_or_else(|| text.to_string())
}

/// URL to open for a link field, `None` when there is nothing link-like
pub fn link_target(text: &str) -> Option<String> {
    if text.encode_utf16().count() <= 7 || !text.contains("http") {
        return None;
    }
    extract_first_url(text).or_else(|| text.find("http").map(|start| text[start..].to_string()))
}

/// Open the link in a new browsing context without a referrer
pub fn open_link(text: &str) {
    let Some(url) = link_target(text) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        if window
            .open_with_url_and_target_and_features(&url, "_blank", "noreferrer")
            .is_err()
        {
            log::warn!("could not open {}", url);
        }
    }
}

/// Copy text to the system clipboard
pub fn copy_link(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                log::warn!("clipboard write failed: {:?}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_url() {
        assert_eq!(
            extract_first_url("see http://a.com/x and more").as_deref(),
            Some("http://a.com/x")
        );
        assert_eq!(
            extract_first_url("HTTPS://SHOP.EXAMPLE/item?id=3 then http://b.com").as_deref(),
            Some("HTTPS://SHOP.EXAMPLE/item?id=3")
        );
    }

    #[test]
    fn test_extract_without_link() {
        assert_eq!(extract_first_url("no link here"), None);
        assert_eq!(extract_first_url(""), None);
    }

    #[test]
    fn test_extract_falls_back_to_https_literal() {
        assert_eq!(
            extract_first_url("httpsonly-no-real-link").as_deref(),
            Some("httpsonly-no-real-link")
        );
        assert_eq!(
            extract_first_url("ref:https-broken").as_deref(),
            Some("https-broken")
        );
    }

    #[test]
    fn test_link_target_guards() {
        assert_eq!(link_target("http://"), None);
        assert_eq!(link_target("amazon listing B00X"), None);
        assert_eq!(
            link_target("see https://a.com/x").as_deref(),
            Some("https://a.com/x")
        );
        assert_eq!(link_target("xhttp:/broken").as_deref(), Some("http:/broken"));
    }

    #[test]
    fn test_extracted_link_replaces_sentence() {
        assert_eq!(
            extracted_link("box says see https://shop.example/p/9 for specs"),
            "https://shop.example/p/9"
        );
        assert_eq!(extracted_link("no url yet"), "no url yet");
    }

    #[test]
    fn test_short_guard_counts_characters() {
        // 6 characters but 8 bytes
        assert_eq!(link_target("ééhttp"), None);
        assert_eq!(link_target("ééhttp://a").as_deref(), Some("http://a"));
    }
}
