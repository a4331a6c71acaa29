// src/services/mirror.rs

//! Mirror orchestration service.
//!
//! Coordinates a single mirror request: check the URL against the safety
//! filter, render it, optionally follow the document's first embedded
//! frame, rewrite resource references to absolute form and persist the
//! result under a fresh code.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use crate::code;
use crate::error::{AppError, Result};
use crate::models::PageRecord;
use crate::render::{PageRenderer, RenderSession};
use crate::rewrite;
use crate::safety;
use crate::storage::PageStore;

/// What a successful mirror run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
    /// Code the stored record is reachable under.
    pub code: String,
    /// Resolved frame URL, when the stored content came from a frame.
    pub frame_url: Option<String>,
}

/// Service that creates mirrored page records.
pub struct MirrorService {
    renderer: Arc<dyn PageRenderer>,
    store: Arc<dyn PageStore>,
    navigation_timeout: Duration,
}

impl MirrorService {
    pub fn new(
        renderer: Arc<dyn PageRenderer>,
        store: Arc<dyn PageStore>,
        navigation_timeout: Duration,
    ) -> Self {
        Self {
            renderer,
            store,
            navigation_timeout,
        }
    }

    /// Mirror `raw_url` and return the stored record's code.
    ///
    /// Every call opens its own rendering session and closes it on every
    /// exit path. Navigation failures surface as `FetchFailed`; a failure
    /// while following the optional frame falls back to the main document
    /// instead of failing the request.
    pub async fn create_mirror(&self, raw_url: &str) -> Result<MirrorOutcome> {
        if !safety::is_safe(raw_url) {
            return Err(AppError::UnsafeUrl);
        }

        info!("mirroring {raw_url}");

        let mut session = self
            .renderer
            .open_session()
            .await
            .map_err(AppError::fetch_failed)?;

        let rendered = self.render_document(session.as_mut(), raw_url).await;
        session.close().await;
        let (html, final_url) = rendered?;

        let content = rewrite::rewrite(&html, &final_url);
        let code = code::generate();
        let frame_url = (final_url != raw_url).then(|| final_url.clone());

        let record = PageRecord::new(&code, raw_url, &final_url, frame_url.clone(), content);
        self.store.save(&code, &record).await?;

        info!("stored page {code} for {raw_url}");

        Ok(MirrorOutcome { code, frame_url })
    }

    /// Render `raw_url` and, when its first frame points somewhere safe,
    /// the frame instead. Returns the document of record and the URL it
    /// was rendered from.
    async fn render_document(
        &self,
        session: &mut dyn RenderSession,
        raw_url: &str,
    ) -> Result<(String, String)> {
        let page = session
            .navigate(raw_url, self.navigation_timeout)
            .await
            .map_err(AppError::fetch_failed)?;

        let mut html = page.html;
        let mut final_url = raw_url.to_string();

        if !page.frames.is_empty() {
            info!("found {} frame(s), following the first", page.frames.len());
        }

        let first_src = page
            .frames
            .first()
            .and_then(|frame| frame.src.as_deref())
            .filter(|src| !src.is_empty());

        if let Some(src) = first_src {
            match Url::parse(raw_url).and_then(|base| base.join(src)) {
                Ok(resolved) => {
                    let resolved = resolved.to_string();
                    info!("frame resolves to {resolved}");
                    if safety::is_safe(&resolved) {
                        match session.navigate(&resolved, self.navigation_timeout).await {
                            Ok(frame_page) => {
                                html = frame_page.html;
                                final_url = resolved;
                            }
                            Err(e) => {
                                warn!("frame navigation failed, keeping main document: {e}");
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!("frame src did not resolve, keeping main document: {e}");
                }
            }
        }

        Ok((html, final_url))
    }
}
