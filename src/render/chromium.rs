//! Headless Chromium rendering backend.
//!
//! Each session launches its own browser process over the DevTools
//! protocol, so every mirror request gets a clean profile and no state
//! leaks between requests. The browser is told to wait for navigation to
//! complete and then given a short settle delay for late resource loads
//! and script-driven DOM changes before the document is serialized.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::config::RendererConfig;
use crate::error::{AppError, Result};
use crate::render::{FrameRef, PageRenderer, RenderSession, RenderedPage};

/// Renderer backed by headless Chromium.
pub struct ChromiumRenderer {
    config: RendererConfig,
}

impl ChromiumRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PageRenderer for ChromiumRenderer {
    async fn open_session(&self) -> Result<Box<dyn RenderSession>> {
        let cfg = &self.config;

        let mut builder = BrowserConfig::builder()
            .window_size(cfg.viewport_width, cfg.viewport_height)
            .request_timeout(cfg.navigation_timeout())
            .no_sandbox()
            .disable_default_args()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-background-networking")
            .arg("--disable-extensions")
            .arg("--disable-sync")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--mute-audio")
            .arg("--hide-scrollbars")
            .arg(format!("--user-agent={}", cfg.user_agent));

        if let Some(ref chrome_path) = cfg.chrome_path {
            builder = builder.chrome_executable(chrome_path);
        }

        let browser_config = builder
            .build()
            .map_err(|e| AppError::render(format!("browser configuration rejected: {e}")))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| AppError::render(format!("browser launch failed: {e}")))?;

        // Drain protocol events until the browser goes away.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser event error: {e}");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| AppError::render(format!("page creation failed: {e}")))?;

        Ok(Box::new(ChromiumSession {
            browser,
            page,
            settle: cfg.settle_delay(),
        }))
    }
}

/// One live browser process and its single page.
struct ChromiumSession {
    browser: Browser,
    page: Page,
    settle: Duration,
}

impl ChromiumSession {
    async fn render(&self, url: &str) -> Result<RenderedPage> {
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::render(format!("navigation failed: {e}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppError::render(format!("navigation did not complete: {e}")))?;

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        let html = self
            .page
            .content()
            .await
            .map_err(|e| AppError::render(format!("document serialization failed: {e}")))?;

        // A failed frame query degrades to "no frames" rather than failing
        // the whole fetch.
        let mut frames = Vec::new();
        let elements = self.page.find_elements("iframe").await.unwrap_or_default();
        for element in elements {
            let src = element.attribute("src").await.ok().flatten();
            frames.push(FrameRef { src });
        }

        Ok(RenderedPage { html, frames })
    }
}

#[async_trait]
impl RenderSession for ChromiumSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<RenderedPage> {
        match tokio::time::timeout(timeout, self.render(url)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::render(format!(
                "navigation to {url} timed out after {}s",
                timeout.as_secs()
            ))),
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser close failed: {e}");
        }
    }
}
