//! Plain HTTP rendering backend.
//!
//! Fetches documents with an HTTP client and no script execution. Useful
//! where a browser is unavailable; script-driven pages are captured in
//! their unrendered form. Non-success statuses still return their body,
//! the same way a browser renders an error page's document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::RendererConfig;
use crate::error::Result;
use crate::render::{FrameRef, PageRenderer, RenderSession, RenderedPage};

/// Renderer backed by a plain HTTP client.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(config: &RendererConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn open_session(&self) -> Result<Box<dyn RenderSession>> {
        Ok(Box::new(HttpSession {
            client: self.client.clone(),
        }))
    }
}

struct HttpSession {
    client: Client,
}

#[async_trait]
impl RenderSession for HttpSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<RenderedPage> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        let html = response.text().await?;
        let frames = extract_frames(&html);
        Ok(RenderedPage { html, frames })
    }

    async fn close(&mut self) {}
}

/// Collect `iframe` elements in document order.
fn extract_frames(html: &str) -> Vec<FrameRef> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("iframe") else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|element| FrameRef {
            src: element.value().attr("src").map(str::to_string),
        })
        .collect()
}
