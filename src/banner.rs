// src/banner.rs

//! Mirror banner injection.
//!
//! Every served page carries a fixed bar identifying it as a mirrored copy.
//! Injection is purely textual: the fragment goes right after the first
//! opening `<body>` tag, or in front of the document when no body tag is
//! found.

use regex::Regex;

/// Constant fragment inserted into every served page.
const BANNER_HTML: &str = r#"
    <!-- pagemirror banner -->
    <div id="pagemirror-banner" style="
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      height: 40px;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      z-index: 9999;
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 0 20px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    ">
      <div style="display: flex; align-items: center;">
        <div style="
          font-size: 16px;
          font-weight: bold;
          background: linear-gradient(45deg, #fff, #e0e7ff);
          -webkit-background-clip: text;
          -webkit-text-fill-color: transparent;
          background-clip: text;
          margin-right: 15px;
        ">pagemirror</div>
        <div style="font-size: 12px; opacity: 0.85;">mirrored copy</div>
      </div>
    </div>
"#;

/// Insert the banner fragment into a stored document.
pub fn inject(html: &str) -> String {
    let body_open = Regex::new(r"(?i)<body[^>]*>")
        .ok()
        .and_then(|re| re.find(html));

    match body_open {
        Some(m) => {
            let split = m.end();
            format!("{}{}{}", &html[..split], BANNER_HTML, &html[split..])
        }
        None => format!("{BANNER_HTML}{html}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_after_body_open() {
        let html = "<html><body class=\"page\"><p>hi</p></body></html>";
        let out = inject(html);
        let banner_at = out.find("pagemirror-banner").unwrap();
        let body_at = out.find("<body").unwrap();
        let p_at = out.find("<p>hi</p>").unwrap();
        assert!(body_at < banner_at);
        assert!(banner_at < p_at);
    }

    #[test]
    fn test_prepends_without_body() {
        let html = "<p>fragment only</p>";
        let out = inject(html);
        assert!(out.starts_with('\n'));
        assert!(out.find("pagemirror-banner").unwrap() < out.find("fragment only").unwrap());
        assert!(out.ends_with(html));
    }

    #[test]
    fn test_body_tag_case_insensitive() {
        let html = "<HTML><BODY><p>x</p></BODY></HTML>";
        let out = inject(html);
        assert!(out.find("<BODY>").unwrap() < out.find("pagemirror-banner").unwrap());
    }

    #[test]
    fn test_only_first_body_receives_banner() {
        let html = "<body>first</body><body>second</body>";
        let out = inject(html);
        assert_eq!(out.matches("pagemirror-banner").count(), 1);
        assert!(out.find("pagemirror-banner").unwrap() < out.find("first").unwrap());
    }
}
