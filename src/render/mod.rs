// src/render/mod.rs

//! Page rendering backends.
//!
//! A renderer hands out short-lived sessions. Each mirror request opens
//! its own session, navigates at most twice (the main document, then
//! optionally its first embedded frame) and closes the session on every
//! exit path. Any engine that can serialize a loaded document and list
//! its frame elements satisfies the contract.

pub mod chromium;
pub mod http;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub use chromium::ChromiumRenderer;
pub use http::HttpRenderer;

/// A frame element found in a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRef {
    /// Raw `src` attribute value. None when the attribute is absent.
    pub src: Option<String>,
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Serialized markup after rendering.
    pub html: String,
    /// Frame elements in document order.
    pub frames: Vec<FrameRef>,
}

/// Opens rendering sessions.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Open a fresh session.
    async fn open_session(&self) -> Result<Box<dyn RenderSession>>;
}

/// A single scoped rendering session.
#[async_trait]
pub trait RenderSession: Send {
    /// Navigate to `url`, wait for the document to settle, and return it.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<RenderedPage>;

    /// Release the underlying engine resources. Problems are logged, not
    /// returned, so callers can close unconditionally.
    async fn close(&mut self);
}
