use scraper::Html;

/// Reduces an HTML fragment to plain text, decoding entities and
/// collapsing whitespace.
pub fn html_to_text(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    let text = document.root_element().text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Finds the `vqd` token DuckDuckGo embeds in its landing page.
pub fn extract_vqd(html: &str) -> Option<String> {
    for prefix in ["vqd=\"", "vqd='", "vqd="] {
        let mut rest = html;
        while let Some(start) = rest.find(prefix) {
            rest = &rest[start + prefix.len()..];
            let token: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        assert_eq!(
            html_to_text("OpenAI <b>releases</b> new  model &amp; API"),
            "OpenAI releases new model & API"
        );
        assert_eq!(html_to_text("plain text"), "plain text");
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_extract_vqd() {
        let html = r#"<script>DDG.deep.initialize('/d.js?q=ai&vqd="4-123456789012345678901234567890"&l=wt-wt');</script>"#;
        assert_eq!(
            extract_vqd(html).as_deref(),
            Some("4-123456789012345678901234567890")
        );

        let html = "nrj('/d.js?q=ai&vqd=4-9876&kl=wt-wt')";
        assert_eq!(extract_vqd(html).as_deref(), Some("4-9876"));

        let html = "vqd='3-55'";
        assert_eq!(extract_vqd(html).as_deref(), Some("3-55"));

        assert!(extract_vqd("<html>no token here</html>").is_none());
    }
}
