// src/models/mod.rs

//! Domain models for the mirror service.

mod page;

pub use page::{PageRecord, now_iso};
