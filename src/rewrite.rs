// src/rewrite.rs

//! Resource URL absolutization.
//!
//! Rewrites relative `img`/`link`/`script` references and CSS `url(...)`
//! arguments in an HTML document to absolute URLs resolved against a base.
//! Matching is regex based, not a full HTML parse: markup the patterns do
//! not recognize is left untouched, and a single unresolvable reference
//! never aborts the rest of the rewrite.

use regex::{Captures, Regex};
use url::Url;

/// Patterns with a capturing group per part: (prefix)(url value)(suffix).
const RESOURCE_PATTERNS: [&str; 4] = [
    r#"(?i)(<img[^>]+src=["'])([^"']+)(["'][^>]*>)"#,
    r#"(?i)(<link[^>]+href=["'])([^"']+)(["'][^>]*>)"#,
    r#"(?i)(<script[^>]+src=["'])([^"']+)(["'][^>]*>)"#,
    r#"(?i)(url\(["']?)([^"')]+)(["']?\))"#,
];

/// Rewrite relative resource references in `html` to absolute URLs.
///
/// Total function: an unparsable `base_url` returns the input unchanged,
/// and so does any individual reference that fails to resolve.
///
/// # Examples
/// ```
/// use pagemirror::rewrite::rewrite;
///
/// assert_eq!(
///     rewrite(r#"<img src="a/b.png">"#, "https://x.com/p/q"),
///     r#"<img src="https://x.com/p/a/b.png">"#
/// );
/// ```
pub fn rewrite(html: &str, base_url: &str) -> String {
    let Ok(base) = Url::parse(base_url) else {
        return html.to_string();
    };

    let mut out = html.to_string();
    for pattern in RESOURCE_PATTERNS {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        out = re
            .replace_all(&out, |caps: &Captures<'_>| absolutize(caps, &base))
            .into_owned();
    }
    out
}

/// Resolve one captured reference, keeping the surrounding markup.
fn absolutize(caps: &Captures<'_>, base: &Url) -> String {
    let value = &caps[2];

    // Already absolute or protocol-relative.
    if value.starts_with("http") || value.starts_with("//") {
        return caps[0].to_string();
    }

    match base.join(value) {
        Ok(resolved) => format!("{}{}{}", &caps[1], resolved, &caps[3]),
        Err(_) => caps[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://x.com/p/q";

    #[test]
    fn test_img_relative_path() {
        let html = r#"<img src="a/b.png">"#;
        assert_eq!(
            rewrite(html, BASE),
            r#"<img src="https://x.com/p/a/b.png">"#
        );
    }

    #[test]
    fn test_img_absolute_path() {
        let html = r#"<img class="hero" src="/img/logo.png" alt="logo">"#;
        assert_eq!(
            rewrite(html, BASE),
            r#"<img class="hero" src="https://x.com/img/logo.png" alt="logo">"#
        );
    }

    #[test]
    fn test_link_href() {
        let html = r#"<link rel="stylesheet" href="styles/site.css">"#;
        assert_eq!(
            rewrite(html, BASE),
            r#"<link rel="stylesheet" href="https://x.com/p/styles/site.css">"#
        );
    }

    #[test]
    fn test_script_src() {
        let html = r#"<script type="text/javascript" src="app.js"></script>"#;
        assert_eq!(
            rewrite(html, BASE),
            r#"<script type="text/javascript" src="https://x.com/p/app.js"></script>"#
        );
    }

    #[test]
    fn test_css_url_parent_directory() {
        let html = r#"<style>body { background: url(../c.css); }</style>"#;
        let rewritten = rewrite(html, BASE);
        assert!(rewritten.contains("url(https://x.com/c.css)"));
    }

    #[test]
    fn test_css_url_quoted() {
        let html = r#"<style>@font-face { src: url("fonts/a.woff2"); }</style>"#;
        let rewritten = rewrite(html, BASE);
        assert!(rewritten.contains(r#"url("https://x.com/p/fonts/a.woff2")"#));
    }

    #[test]
    fn test_absolute_and_protocol_relative_left_alone() {
        let html = concat!(
            r#"<img src="https://cdn.example.com/a.png">"#,
            r#"<script src="//cdn.example.com/b.js"></script>"#,
        );
        assert_eq!(rewrite(html, BASE), html);
    }

    #[test]
    fn test_case_insensitive_tags() {
        let html = r#"<IMG SRC="pic.gif">"#;
        assert_eq!(rewrite(html, BASE), r#"<IMG SRC="https://x.com/p/pic.gif">"#);
    }

    #[test]
    fn test_multiple_occurrences() {
        let html = r#"<img src="1.png"><img src="2.png">"#;
        assert_eq!(
            rewrite(html, BASE),
            r#"<img src="https://x.com/p/1.png"><img src="https://x.com/p/2.png">"#
        );
    }

    #[test]
    fn test_unparsable_base_returns_input() {
        let html = r#"<img src="a.png">"#;
        assert_eq!(rewrite(html, "not a base"), html);
        assert_eq!(rewrite(html, ""), html);
    }

    #[test]
    fn test_unresolvable_reference_left_alone() {
        // Non-special scheme with an out-of-range port fails URL resolution;
        // only that reference keeps its original form.
        let html = r#"<img src="foo://h:99999999999/a"><img src="ok.png">"#;
        let rewritten = rewrite(html, BASE);
        assert!(rewritten.contains(r#"src="foo://h:99999999999/a""#));
        assert!(rewritten.contains(r#"src="https://x.com/p/ok.png""#));
    }

    #[test]
    fn test_idempotent_once_absolute() {
        let html = r#"<img src="a/b.png"><link rel="x" href="/c.css"><style>.x{background:url('d.png')}</style>"#;
        let once = rewrite(html, BASE);
        let twice = rewrite(&once, BASE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unmatched_markup_untouched() {
        let html = "<p>no resources here</p>";
        assert_eq!(rewrite(html, BASE), html);
    }
}
