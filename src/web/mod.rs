// src/web/mod.rs

//! HTTP surface: route table, request handlers and the landing page.

pub mod handlers;
pub mod pages;
mod router;

pub use router::build_router;
